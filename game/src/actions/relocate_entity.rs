use crate::api::CreatureEvent;
use crate::entities::{EntitiesError, EntityHandle};
use crate::lighting::LightingDomain;
use crate::tiles::TilePosition;
use crate::Area;

impl Area {
    pub fn relocate(&mut self, handle: EntityHandle, destination: TilePosition) -> Result<(), EntitiesError> {
        let from = self.entities.position_of(handle);
        let events = self.entities.relocate(&mut self.tiles, handle, destination)?;
        self.push_events(events);
        match (handle.kind().is_creature(), from) {
            (true, Some(from)) => self.notify_creature(handle, CreatureEvent::Walk { from }),
            _ => self.lighting.update_focus(handle, &self.tiles, &self.entities),
        }
        Ok(())
    }

    pub fn relocate_into_container(&mut self, item: EntityHandle, container: EntityHandle) -> Result<(), EntitiesError> {
        let events = self
            .entities
            .relocate_into_container(&mut self.tiles, item, container)?;
        self.push_events(events);
        self.refresh_item_light(item);
        Ok(())
    }

    /// Drawing position only, used while a walk animation is in progress.
    pub fn relocate_for_visuals(&mut self, handle: EntityHandle, original: TilePosition, visual: TilePosition) {
        self.entities
            .relocate_for_visuals(&mut self.tiles, handle, original, visual);
    }

    /// Hidden items keep their focus record but drop their contributions.
    pub(crate) fn refresh_item_light(&mut self, item: EntityHandle) {
        let hidden = !LightingDomain::can_affect_map(item, &self.entities);
        if hidden && self.lighting.focus_intensity(item) > 0 {
            self.lighting.remove_light(item, true, &self.tiles);
        } else {
            self.lighting.update_focus(item, &self.tiles, &self.entities);
        }
    }
}
