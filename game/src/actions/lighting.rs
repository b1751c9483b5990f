use crate::entities::{EntitiesError, EntityHandle};
use crate::lighting::{Light, LightingDomain};
use crate::tiles::TilePosition;
use crate::view::TileLight;
use crate::Area;

impl Area {
    /// Zero switches the light of the entity off.
    pub fn set_light(&mut self, handle: EntityHandle, intensity: Light) -> Result<(), EntitiesError> {
        if !self.entities.contains(handle) {
            return Err(EntitiesError::EntityNotFound { handle });
        }
        self.lighting
            .set_light(handle, intensity, &self.tiles, &self.entities);
        Ok(())
    }

    #[inline]
    pub fn light_of(&self, handle: EntityHandle) -> Light {
        self.lighting.focus_intensity(handle)
    }

    #[inline]
    pub fn get_light_at(&self, position: TilePosition) -> Light {
        self.lighting.get_light_at(&self.tiles, position)
    }

    #[inline]
    pub fn ambient_light(&self) -> Light {
        self.lighting.ambient
    }

    pub fn can_entity_focus_affect_map(&self, handle: EntityHandle) -> bool {
        LightingDomain::can_affect_map(handle, &self.entities)
    }

    pub fn tile_light(&self, position: TilePosition) -> TileLight {
        TileLight {
            vertices: self
                .lighting
                .tile_light(&self.tiles, position)
                .unwrap_or_default(),
            ambient: self.lighting.ambient,
        }
    }
}
