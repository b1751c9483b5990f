use crate::rooms::{Room, RoomId, RoomsDomain, RoomsError};
use crate::tiles::{TilePosition, TilesDomain};

impl RoomsDomain {
    pub fn room_at(&self, tiles: &TilesDomain, position: TilePosition) -> Option<RoomId> {
        if !tiles.is_valid(position) {
            return None;
        }
        let index = tiles.to_index(position);
        self.rooms
            .iter()
            .find(|room| room.tiles.contains(&index))
            .map(|room| room.id)
    }

    pub fn is_roof_visible(&self, id: RoomId) -> bool {
        self.get_room(id)
            .map(|room| room.roof_visible)
            .unwrap_or(true)
    }

    pub fn get_room(&self, id: RoomId) -> Result<&Room, RoomsError> {
        self.rooms
            .iter()
            .find(|room| room.id == id)
            .ok_or(RoomsError::RoomNotFound { id })
    }

    pub(crate) fn get_room_mut(&mut self, id: RoomId) -> Result<&mut Room, RoomsError> {
        self.rooms
            .iter_mut()
            .find(|room| room.id == id)
            .ok_or(RoomsError::RoomNotFound { id })
    }
}
