use crate::entities::{EntitiesDomain, EntityHandle, EntityKind, WallOrientation};
use crate::tiles::AccessMask;

impl EntitiesDomain {
    /// Directions the entity blocks on its tile. A walking creature is
    /// leaving its tile and never blocks it.
    pub fn obstacle_of(&self, handle: EntityHandle) -> Option<AccessMask> {
        match handle.kind() {
            EntityKind::Wall => self.walls.get(&handle).map(|wall| wall.obstacle),
            EntityKind::SceneObj => self.scene_objs.get(&handle).map(|scene| scene.obstacle),
            EntityKind::Player | EntityKind::Creature => self
                .creatures
                .get(&handle)
                .filter(|creature| !creature.walking)
                .map(|creature| creature.obstacle),
            EntityKind::Item | EntityKind::Roof => None,
        }
    }

    #[inline]
    pub fn wall_orientation(&self, handle: EntityHandle) -> Option<WallOrientation> {
        self.walls.get(&handle).map(|wall| wall.orientation)
    }
}
