use crate::entities::EntitiesDomain;
use crate::rooms::{RoomId, RoomsDomain, RoomsError};
use crate::tiles::TilesDomain;

impl RoomsDomain {
    /// Shows or hides every roof over the room.
    pub fn set_roof_visible(
        &mut self,
        id: RoomId,
        visible: bool,
        tiles: &TilesDomain,
        entities: &mut EntitiesDomain,
    ) -> Result<(), RoomsError> {
        let room = self.get_room_mut(id)?;
        if room.roof_visible == visible {
            return Ok(());
        }
        room.roof_visible = visible;
        for index in &room.tiles {
            let position = tiles.from_index(*index);
            let roof = match tiles.get_cell(position) {
                Ok(cell) => cell.roof,
                Err(_) => None,
            };
            if let Some(roof) = roof.and_then(|roof| entities.roofs.get_mut(&roof)) {
                roof.visible = visible;
            }
        }
        Ok(())
    }

    /// Takes the flag of every room from the roofs over it, rooms without
    /// roofs keep theirs.
    pub fn sync_roof_flags(&mut self, tiles: &TilesDomain, entities: &EntitiesDomain) {
        for room in self.rooms.iter_mut() {
            let visible = room
                .tiles
                .iter()
                .filter_map(|index| tiles.get_cell(tiles.from_index(*index)).ok())
                .filter_map(|cell| cell.roof)
                .filter_map(|roof| entities.roofs.get(&roof))
                .map(|roof| roof.visible)
                .next();
            if let Some(visible) = visible {
                room.roof_visible = visible;
            }
        }
    }
}
