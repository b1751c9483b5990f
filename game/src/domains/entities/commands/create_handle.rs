use crate::entities::{EntitiesDomain, EntityHandle, EntityKind};
use crate::math::Random;

impl EntitiesDomain {
    /// Draws random discriminators until one is free for the kind.
    /// The kind bits keep every handle above zero.
    pub fn create_handle(&self, kind: EntityKind) -> EntityHandle {
        loop {
            let mut random = Random::new();
            let handle = EntityHandle::compose(kind, random.bits12());
            if !self.contains(handle) {
                return handle;
            }
        }
    }
}
