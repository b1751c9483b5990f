use crate::entities::{EntitiesDomain, EntityKind, EntityKinds, WallOrientation};
use crate::tiles::{AccessMask, Direction, TilePosition, TilesDomain};

impl TilesDomain {
    pub fn get_floor_access(&self, position: TilePosition) -> AccessMask {
        self.access
            .get(&self.to_index(position))
            .copied()
            .unwrap_or(AccessMask::OPEN)
    }

    /// Floor access combined with obstacles of every entity on the tile
    /// and walls standing on neighbour tiles.
    pub fn get_combined_access(
        &self,
        position: TilePosition,
        excluded: EntityKinds,
        entities: &EntitiesDomain,
    ) -> AccessMask {
        let mut mask = self.get_floor_access(position);
        if let Ok(cell) = self.get_cell(position) {
            for handle in &cell.entities {
                if excluded.contains(handle.kind()) {
                    continue;
                }
                if let Some(obstacle) = entities.obstacle_of(*handle) {
                    mask = mask | obstacle;
                }
            }
        }
        if !excluded.contains(EntityKind::Wall) {
            mask = mask | self.adjacent_walls_blockage(position, entities);
        }
        mask
    }

    fn adjacent_walls_blockage(&self, position: TilePosition, entities: &EntitiesDomain) -> AccessMask {
        // front facing walls never project onto neighbours
        let mut mask = AccessMask::OPEN;
        let checks = [
            (Direction::North, WallOrientation::SouthWest),
            (Direction::NorthEast, WallOrientation::SouthWest),
            (Direction::East, WallOrientation::SouthWest),
            (Direction::North, WallOrientation::SouthEast),
            (Direction::NorthWest, WallOrientation::SouthEast),
            (Direction::West, WallOrientation::SouthEast),
        ];
        for (direction, orientation) in checks {
            if self.has_wall_facing(position, direction, orientation, entities) {
                mask.set(direction, true);
            }
        }
        mask
    }

    fn has_wall_facing(
        &self,
        position: TilePosition,
        direction: Direction,
        orientation: WallOrientation,
        entities: &EntitiesDomain,
    ) -> bool {
        let neighbour = match self.adjacent_tile(position, direction) {
            Some(neighbour) => neighbour,
            None => return false,
        };
        match self.get_cell(neighbour) {
            Ok(cell) => cell
                .entities
                .iter()
                .any(|handle| entities.wall_orientation(*handle) == Some(orientation)),
            Err(_) => false,
        }
    }
}
