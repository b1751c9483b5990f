use crate::entities::{EntitiesDomain, EntityHandle};
use crate::lighting::{Light, LightingDomain};
use crate::tiles::TilesDomain;

impl LightingDomain {
    /// Zero switches the focus off. A new intensity first clears whatever the
    /// previous one contributed.
    pub fn set_light(
        &mut self,
        handle: EntityHandle,
        intensity: Light,
        tiles: &TilesDomain,
        entities: &EntitiesDomain,
    ) {
        if self.foci.contains_key(&handle) {
            self.remove_light(handle, false, tiles);
        }
        if intensity > 0 {
            self.propagate_focus(handle, intensity, false, true, tiles, entities);
        }
    }

    /// Recomputes a focus after its entity moved or changed owner.
    pub fn update_focus(&mut self, handle: EntityHandle, tiles: &TilesDomain, entities: &EntitiesDomain) {
        if let Some(focus) = self.foci.get(&handle) {
            let intensity = focus.intensity;
            self.propagate_focus(handle, intensity, true, false, tiles, entities);
        }
    }
}
