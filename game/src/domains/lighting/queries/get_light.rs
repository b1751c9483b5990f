use crate::entities::EntityHandle;
use crate::lighting::{Light, LightingDomain};
use crate::tiles::{TilePosition, TilesDomain};

impl LightingDomain {
    pub fn focus_intensity(&self, handle: EntityHandle) -> Light {
        self.foci
            .get(&handle)
            .map(|focus| focus.intensity)
            .unwrap_or(0)
    }

    /// Brightest corner of the tile, zero for unlit tiles.
    pub fn get_light_at(&self, tiles: &TilesDomain, position: TilePosition) -> Light {
        self.tile_light(tiles, position)
            .map(|vertices| vertices.into_iter().max().unwrap_or(0))
            .unwrap_or(0)
    }

    pub fn tile_light(&self, tiles: &TilesDomain, position: TilePosition) -> Option<[Light; 4]> {
        if !tiles.is_valid(position) {
            return None;
        }
        self.tiles
            .get(&tiles.to_index(position))
            .map(|info| info.intensities())
    }
}
