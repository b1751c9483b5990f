use crate::entities::EntityHandle;
use crate::math::VectorMath;
use crate::tiles::TilePosition;
use crate::Area;

impl Area {
    /// Creatures whose tile centre lies within `range` world units, sorted by handle.
    pub fn creatures_in_range(&self, position: TilePosition, range: f32) -> Vec<EntityHandle> {
        let center = self.tiles.tile_center(position);
        let mut creatures: Vec<EntityHandle> = self
            .entities
            .creatures
            .values()
            .filter(|creature| self.tiles.tile_center(creature.position).distance(center) <= range)
            .map(|creature| creature.handle)
            .collect();
        creatures.sort();
        creatures
    }

    pub fn is_creature_in_range(&self, creature: EntityHandle, position: TilePosition, range: f32) -> bool {
        match self.entities.creatures.get(&creature) {
            Some(creature) => {
                let center = self.tiles.tile_center(position);
                self.tiles.tile_center(creature.position).distance(center) <= range
            }
            None => false,
        }
    }
}
