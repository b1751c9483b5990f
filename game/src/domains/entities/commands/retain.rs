use std::collections::HashSet;

use crate::entities::{EntitiesDomain, EntityHandle};

impl EntitiesDomain {
    /// Forgets every entity except the kept ones, used when a whole area is freed.
    pub fn retain(&mut self, keep: &HashSet<EntityHandle>) {
        self.walls.retain(|handle, _| keep.contains(handle));
        self.scene_objs.retain(|handle, _| keep.contains(handle));
        self.items.retain(|handle, _| keep.contains(handle));
        self.creatures.retain(|handle, _| keep.contains(handle));
        self.roofs.retain(|handle, _| keep.contains(handle));
        self.visuals.clear();
    }
}
