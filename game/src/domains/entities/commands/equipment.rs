use crate::entities::{EntitiesDomain, EntitiesError, EntityHandle};

impl EntitiesDomain {
    /// Moves an item from the inventory of the creature into an empty slot.
    pub fn equip_item(&mut self, creature: EntityHandle, item: EntityHandle, slot: usize) -> Result<(), EntitiesError> {
        let target = self.get_creature_mut(creature)?;
        match target.equipment.get(slot) {
            Some(None) => {}
            Some(Some(_)) => return Err(EntitiesError::SlotOccupied { slot }),
            None => return Err(EntitiesError::InvalidSlot { slot }),
        }
        if !target.inventory.remove(item) {
            return Err(EntitiesError::ItemNotCarried { item });
        }
        target.equipment[slot] = Some(item);
        Ok(())
    }

    /// Moves the item worn in the slot back into the inventory.
    pub fn unequip_item(&mut self, creature: EntityHandle, slot: usize) -> Result<EntityHandle, EntitiesError> {
        let target = self.get_creature_mut(creature)?;
        let item = match target.equipment.get_mut(slot) {
            Some(current) => current.take().ok_or(EntitiesError::SlotEmpty { slot })?,
            None => return Err(EntitiesError::InvalidSlot { slot }),
        };
        target.inventory.items.push(item);
        Ok(item)
    }
}
