use crate::entities::{EntitiesDomain, EntityHandle, EntityKind};
use crate::tiles::TilesDomain;

impl EntitiesDomain {
    /// The handle must be on the tile it is displayed at.
    pub fn remove_from_tile(&mut self, tiles: &mut TilesDomain, handle: EntityHandle) {
        let position = match self.displayed_position(handle) {
            Some(position) => position,
            None => {
                debug_assert!(false, "entity {:?} not found", handle);
                return;
            }
        };
        let cell = match tiles.get_cell_mut(position) {
            Ok(cell) => cell,
            Err(error) => {
                debug_assert!(false, "entity {:?} on bad tile, {:?}", handle, error);
                return;
            }
        };
        if handle.kind() == EntityKind::Roof {
            debug_assert_eq!(cell.roof, Some(handle));
            cell.roof = None;
        } else {
            let index = cell.entities.iter().position(|other| *other == handle);
            debug_assert!(
                index.is_some(),
                "entity {:?} missing on tile {:?}",
                handle,
                position
            );
            if let Some(index) = index {
                cell.entities.remove(index);
            }
        }
        self.visuals.remove(&handle);
    }
}
