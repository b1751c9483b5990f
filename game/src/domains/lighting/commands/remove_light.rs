use crate::entities::EntityHandle;
use crate::lighting::LightingDomain;
use crate::tiles::TilesDomain;

impl LightingDomain {
    /// Erases every contribution of the focus. A position update keeps the
    /// focus record so the light comes back once the entity is shown again.
    pub fn remove_light(&mut self, handle: EntityHandle, is_position_update: bool, tiles: &TilesDomain) {
        let focus = match self.foci.get(&handle) {
            Some(focus) => *focus,
            None => return,
        };
        let region = LightingDomain::affected_region(tiles, focus.position, focus.intensity);
        for position in region.positions() {
            let index = tiles.to_index(position);
            if let Some(info) = self.tiles.get_mut(&index) {
                for vertex in info.vertices.iter_mut() {
                    vertex.erase(handle);
                }
                if info.is_dark() {
                    self.tiles.remove(&index);
                }
            }
        }
        if !is_position_update {
            self.foci.remove(&handle);
        }
    }
}
