use crate::entities::{EntitiesDomain, EntityHandle, EntityKind, ItemContainer};

impl EntitiesDomain {
    pub fn container(&self, owner: EntityHandle) -> Option<&ItemContainer> {
        match owner.kind() {
            EntityKind::SceneObj => self.scene_objs.get(&owner)?.container.as_ref(),
            EntityKind::Player | EntityKind::Creature => {
                self.creatures.get(&owner).map(|creature| &creature.inventory)
            }
            _ => None,
        }
    }

    pub fn is_equipped(&self, item: EntityHandle) -> bool {
        let owner = match self.items.get(&item).and_then(|item| item.owner) {
            Some(owner) => owner,
            None => return false,
        };
        self.creatures
            .get(&owner)
            .map(|creature| creature.equipment.contains(&Some(item)))
            .unwrap_or(false)
    }

    pub fn equipped_items(&self, creature: EntityHandle) -> Vec<EntityHandle> {
        self.creatures
            .get(&creature)
            .map(|creature| creature.equipment.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    /// Inventory plus equipment of a creature, or contents of a scene object.
    pub fn carried_items(&self, owner: EntityHandle) -> Vec<EntityHandle> {
        let mut items: Vec<EntityHandle> = self
            .container(owner)
            .map(|container| container.items.clone())
            .unwrap_or_default();
        items.extend(self.equipped_items(owner));
        items
    }
}
