use std::collections::HashSet;

use crate::tiles::TileIndex;

/// Rooms are numbered from one, zero in area files means "no room".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(pub u8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub tiles: HashSet<TileIndex>,
    pub roof_visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomsError {
    RoomNotFound { id: RoomId },
}

#[derive(Default)]
pub struct RoomsDomain {
    pub rooms: Vec<Room>,
}

impl RoomsDomain {
    pub fn new(count: u8) -> Self {
        let rooms = (1..=count)
            .map(|id| Room {
                id: RoomId(id),
                tiles: HashSet::new(),
                roof_visible: true,
            })
            .collect();
        Self { rooms }
    }
}
