use super::insert::insert_sorted;
use crate::entities::{EntitiesDomain, EntityHandle};
use crate::tiles::{TilePosition, TilesDomain};

impl EntitiesDomain {
    /// Moves where the entity is drawn while it animates between tiles, its
    /// logical position stays the same.
    pub fn relocate_for_visuals(
        &mut self,
        tiles: &mut TilesDomain,
        handle: EntityHandle,
        original: TilePosition,
        visual: TilePosition,
    ) {
        if self.freeing || original == visual {
            return;
        }
        if !tiles.is_populated(visual) {
            return;
        }
        if let Ok(cell) = tiles.get_cell_mut(original) {
            cell.entities.retain(|other| *other != handle);
        }
        if let Ok(cell) = tiles.get_cell_mut(visual) {
            insert_sorted(&mut cell.entities, handle);
        }
        if self.position_of(handle) == Some(visual) {
            self.visuals.remove(&handle);
        } else {
            self.visuals.insert(handle, visual);
        }
    }
}
