use log::debug;

use crate::api::CreatureEvent;
use crate::entities::EntityHandle;
use crate::Area;

impl Area {
    /// Keeps light of the creature and of its items in sync with what the
    /// creature just did.
    pub fn notify_creature(&mut self, creature: EntityHandle, event: CreatureEvent) {
        debug!("Creature {:?} notifies {:?}", creature, event);
        match event {
            CreatureEvent::Walk { .. } => {
                self.lighting
                    .update_focus(creature, &self.tiles, &self.entities);
                for item in self.entities.equipped_items(creature) {
                    self.lighting.update_focus(item, &self.tiles, &self.entities);
                }
            }
            CreatureEvent::Equip { item } | CreatureEvent::DropItem { item } => {
                self.lighting.update_focus(item, &self.tiles, &self.entities);
            }
            CreatureEvent::Unequip { item } | CreatureEvent::GetItem { item } => {
                self.refresh_item_light(item);
            }
        }
    }
}
