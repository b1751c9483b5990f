use log::debug;

use crate::entities::{EntitiesError, EntityHandle};
use crate::Area;

impl Area {
    /// Removes the entity from the map. Everything it held falls onto its tile.
    pub fn destroy_entity(&mut self, handle: EntityHandle) -> Result<(), EntitiesError> {
        let dropped = self.entities.carried_items(handle);
        self.lighting.set_light(handle, 0, &self.tiles, &self.entities);
        let events = self.entities.destroy(&mut self.tiles, handle)?;
        for item in dropped {
            self.lighting.update_focus(item, &self.tiles, &self.entities);
        }
        self.tags.remove_handle(handle);
        if self.player == Some(handle) {
            self.player = None;
        }
        debug!("Entity {:?} destroyed", handle);
        self.push_events(events);
        Ok(())
    }
}
