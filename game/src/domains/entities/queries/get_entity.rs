use crate::entities::EntitiesError::EntityNotFound;
use crate::entities::{
    Creature, EntitiesDomain, EntitiesError, EntityHandle, EntityKind, Item, Roof, SceneObj, Wall,
};
use crate::tiles::TilePosition;

impl EntitiesDomain {
    pub fn contains(&self, handle: EntityHandle) -> bool {
        match handle.kind() {
            EntityKind::Wall => self.walls.contains_key(&handle),
            EntityKind::SceneObj => self.scene_objs.contains_key(&handle),
            EntityKind::Item => self.items.contains_key(&handle),
            EntityKind::Player | EntityKind::Creature => self.creatures.contains_key(&handle),
            EntityKind::Roof => self.roofs.contains_key(&handle),
        }
    }

    pub fn len(&self) -> usize {
        self.walls.len()
            + self.scene_objs.len()
            + self.items.len()
            + self.creatures.len()
            + self.roofs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get_wall(&self, handle: EntityHandle) -> Result<&Wall, EntitiesError> {
        self.walls.get(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_scene_obj(&self, handle: EntityHandle) -> Result<&SceneObj, EntitiesError> {
        self.scene_objs.get(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_item(&self, handle: EntityHandle) -> Result<&Item, EntitiesError> {
        self.items.get(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_item_mut(&mut self, handle: EntityHandle) -> Result<&mut Item, EntitiesError> {
        self.items.get_mut(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_creature(&self, handle: EntityHandle) -> Result<&Creature, EntitiesError> {
        self.creatures.get(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_creature_mut(&mut self, handle: EntityHandle) -> Result<&mut Creature, EntitiesError> {
        self.creatures.get_mut(&handle).ok_or(EntityNotFound { handle })
    }

    #[inline]
    pub fn get_roof(&self, handle: EntityHandle) -> Result<&Roof, EntitiesError> {
        self.roofs.get(&handle).ok_or(EntityNotFound { handle })
    }

    /// Position recorded on the entity itself.
    pub fn position_of(&self, handle: EntityHandle) -> Option<TilePosition> {
        match handle.kind() {
            EntityKind::Wall => self.walls.get(&handle).map(|wall| wall.position),
            EntityKind::SceneObj => self.scene_objs.get(&handle).map(|scene| scene.position),
            EntityKind::Item => self.items.get(&handle).map(|item| item.position),
            EntityKind::Player | EntityKind::Creature => {
                self.creatures.get(&handle).map(|creature| creature.position)
            }
            EntityKind::Roof => self.roofs.get(&handle).map(|roof| roof.position),
        }
    }

    /// Tile the entity occupies on the map, carried items share the tile of their owner.
    pub fn tile_of(&self, handle: EntityHandle) -> Option<TilePosition> {
        if let Some(item) = self.items.get(&handle) {
            return match item.owner {
                Some(owner) => self.position_of(owner),
                None => Some(item.position),
            };
        }
        self.position_of(handle)
    }

    /// Tile whose entity list holds the handle right now.
    pub fn displayed_position(&self, handle: EntityHandle) -> Option<TilePosition> {
        self.visuals
            .get(&handle)
            .copied()
            .or_else(|| self.position_of(handle))
    }

    pub fn profile_of(&self, handle: EntityHandle) -> Option<&str> {
        let profile = match handle.kind() {
            EntityKind::Wall => &self.walls.get(&handle)?.profile,
            EntityKind::SceneObj => &self.scene_objs.get(&handle)?.profile,
            EntityKind::Item => &self.items.get(&handle)?.profile,
            EntityKind::Player | EntityKind::Creature => &self.creatures.get(&handle)?.profile,
            EntityKind::Roof => &self.roofs.get(&handle)?.profile,
        };
        Some(profile.as_str())
    }
}
