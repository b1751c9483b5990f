use crate::entities::{EntitiesDomain, EntityHandle, EntityKind};
use crate::lighting::LightingDomain;

impl LightingDomain {
    /// Items inside scene objects and in inventories are not displayed and
    /// shed no light, worn items do.
    pub fn can_affect_map(handle: EntityHandle, entities: &EntitiesDomain) -> bool {
        if handle.kind() != EntityKind::Item {
            return true;
        }
        let owner = match entities.items.get(&handle).and_then(|item| item.owner) {
            Some(owner) => owner,
            None => return true,
        };
        match owner.kind() {
            EntityKind::SceneObj => false,
            EntityKind::Player | EntityKind::Creature => entities.is_equipped(handle),
            _ => true,
        }
    }
}
