use crate::api::CreatureEvent;
use crate::entities::{EntitiesError, EntityHandle};
use crate::Area;

impl Area {
    pub fn equip(&mut self, creature: EntityHandle, item: EntityHandle, slot: usize) -> Result<(), EntitiesError> {
        self.entities.equip_item(creature, item, slot)?;
        self.notify_creature(creature, CreatureEvent::Equip { item });
        Ok(())
    }

    pub fn unequip(&mut self, creature: EntityHandle, slot: usize) -> Result<EntityHandle, EntitiesError> {
        let item = self.entities.unequip_item(creature, slot)?;
        self.notify_creature(creature, CreatureEvent::Unequip { item });
        Ok(item)
    }

    pub fn pick_up(&mut self, creature: EntityHandle, item: EntityHandle) -> Result<(), EntitiesError> {
        let events = self
            .entities
            .pick_up_item(&mut self.tiles, creature, item)?;
        self.push_events(events);
        self.notify_creature(creature, CreatureEvent::GetItem { item });
        Ok(())
    }

    pub fn drop_item(&mut self, creature: EntityHandle, item: EntityHandle) -> Result<(), EntitiesError> {
        let events = self.entities.drop_item(&mut self.tiles, creature, item)?;
        self.push_events(events);
        self.notify_creature(creature, CreatureEvent::DropItem { item });
        Ok(())
    }
}
