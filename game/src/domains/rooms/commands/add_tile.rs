use crate::rooms::{RoomId, RoomsDomain, RoomsError};
use crate::tiles::TileIndex;

impl RoomsDomain {
    pub fn add_tile(&mut self, id: RoomId, tile: TileIndex) -> Result<(), RoomsError> {
        debug_assert!(
            self.rooms.iter().all(|room| room.id == id || !room.tiles.contains(&tile)),
            "tile {} already belongs to another room",
            tile
        );
        let room = self.get_room_mut(id)?;
        room.tiles.insert(tile);
        Ok(())
    }
}
