use log::debug;

use crate::entities::{EntitiesDomain, EntityHandle};
use crate::lighting::{falloff, Light, LightFocus, LightingDomain, TileLightInfo};
use crate::math::VectorMath;
use crate::tiles::{tile_corners, TilesDomain};

impl LightingDomain {
    /// Writes the contributions of the focus into every tile it may reach.
    /// A position update also revisits the tiles around the previously
    /// recorded position.
    pub fn propagate_focus(
        &mut self,
        handle: EntityHandle,
        intensity: Light,
        is_position_update: bool,
        is_new_focus: bool,
        tiles: &TilesDomain,
        entities: &EntitiesDomain,
    ) {
        let position = match entities.tile_of(handle) {
            Some(position) if tiles.is_valid(position) => position,
            _ => {
                debug!("Focus {:?} has no tile to shine from", handle);
                return;
            }
        };
        if is_new_focus {
            self.foci.insert(handle, LightFocus { intensity, position });
        }
        if !LightingDomain::can_affect_map(handle, entities) {
            return;
        }
        let mut region = LightingDomain::affected_region(tiles, position, intensity);
        if is_position_update {
            if let Some(focus) = self.foci.get(&handle) {
                let previous = LightingDomain::affected_region(tiles, focus.position, intensity);
                region = region.union(previous);
            }
        }
        let center = tiles.tile_center(position);
        for tile in region.positions() {
            let index = tiles.to_index(tile);
            let info = self
                .tiles
                .entry(index)
                .or_insert_with(|| TileLightInfo::new(tiles.tile_origin(tile)));
            let corners = tile_corners(info.origin);
            for (vertex, corner) in info.vertices.iter_mut().zip(corners) {
                vertex.apply(handle, falloff(intensity, corner.distance(center)));
            }
            if info.is_dark() {
                self.tiles.remove(&index);
            }
        }
        if is_position_update {
            if let Some(focus) = self.foci.get_mut(&handle) {
                focus.position = position;
            }
        }
    }
}
