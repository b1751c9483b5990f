use crate::entities::{EntityHandle, EntityKinds};
use crate::rooms::{RoomId, RoomsError};
use crate::tiles::{AccessMask, TilePosition};
use crate::Area;

impl Area {
    /// Outside of the map every direction is blocked.
    pub fn tile_access(&self, position: TilePosition, excluded: EntityKinds) -> AccessMask {
        if !self.tiles.is_valid(position) {
            return AccessMask::CLOSED;
        }
        self.tiles
            .get_combined_access(position, excluded, &self.entities)
    }

    pub fn room_at(&self, position: TilePosition) -> Option<RoomId> {
        self.rooms.room_at(&self.tiles, position)
    }

    pub fn set_roof_visible(&mut self, room: RoomId, visible: bool) -> Result<(), RoomsError> {
        self.rooms
            .set_roof_visible(room, visible, &self.tiles, &mut self.entities)
    }

    pub fn is_roof_visible(&self, room: RoomId) -> bool {
        self.rooms.is_roof_visible(room)
    }

    pub fn handle_from_tag(&self, tag: &str) -> Option<EntityHandle> {
        self.tags.handle_of(tag)
    }

    pub fn tag_of(&self, handle: EntityHandle) -> Option<&str> {
        self.tags.tag_of(handle)
    }
}
