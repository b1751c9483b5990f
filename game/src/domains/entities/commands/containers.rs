use crate::entities::{EntitiesDomain, EntitiesError, EntityHandle, EntityKind, ItemContainer};

impl EntitiesDomain {
    pub fn container_mut(&mut self, owner: EntityHandle) -> Result<&mut ItemContainer, EntitiesError> {
        let container = match owner.kind() {
            EntityKind::SceneObj => self
                .scene_objs
                .get_mut(&owner)
                .and_then(|scene| scene.container.as_mut()),
            EntityKind::Player | EntityKind::Creature => self
                .creatures
                .get_mut(&owner)
                .map(|creature| &mut creature.inventory),
            _ => None,
        };
        container.ok_or(EntitiesError::NotAContainer { handle: owner })
    }

    /// Puts a floor-less item into the container of the owner, the item is
    /// paused while stored.
    pub fn insert_into_container(&mut self, item: EntityHandle, owner: EntityHandle) -> Result<(), EntitiesError> {
        let current = self.get_item(item)?.owner;
        if current.is_some() {
            return Err(EntitiesError::ItemAlreadyOwned { item });
        }
        self.container_mut(owner)?.items.push(item);
        let item = self.get_item_mut(item)?;
        item.owner = Some(owner);
        item.paused = true;
        Ok(())
    }

    /// Takes the item from the equipment slot or the container holding it
    /// and clears its owner. The item is left nowhere, the caller places it.
    pub fn extract_from_owner(&mut self, item: EntityHandle) -> Result<EntityHandle, EntitiesError> {
        let owner = match self.get_item(item)?.owner {
            Some(owner) => owner,
            None => return Err(EntitiesError::ItemNotCarried { item }),
        };
        let mut extracted = false;
        if let Some(creature) = self.creatures.get_mut(&owner) {
            for slot in creature.equipment.iter_mut() {
                if *slot == Some(item) {
                    *slot = None;
                    extracted = true;
                }
            }
        }
        if !extracted {
            extracted = self.container_mut(owner)?.remove(item);
        }
        debug_assert!(extracted, "item {:?} not found in owner {:?}", item, owner);
        self.get_item_mut(item)?.owner = None;
        Ok(owner)
    }

    /// Loading only: places an item of the owner straight into an equipment slot.
    pub fn insert_into_slot(&mut self, creature: EntityHandle, slot: usize, item: EntityHandle) -> Result<(), EntitiesError> {
        let target = self.get_creature_mut(creature)?;
        match target.equipment.get_mut(slot) {
            Some(Some(_)) => return Err(EntitiesError::SlotOccupied { slot }),
            Some(current) => *current = Some(item),
            None => return Err(EntitiesError::InvalidSlot { slot }),
        }
        let item = self.get_item_mut(item)?;
        item.owner = Some(creature);
        item.paused = true;
        Ok(())
    }
}
