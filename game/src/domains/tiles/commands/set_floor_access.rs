use crate::tiles::{AccessMask, Direction, TilePosition, TilesDomain};

impl TilesDomain {
    /// Fully open masks are never stored, an absent entry reads as open.
    pub fn set_floor_access(&mut self, position: TilePosition, mask: AccessMask) {
        let index = self.to_index(position);
        if mask.is_open() {
            self.access.remove(&index);
        } else {
            self.access.insert(index, mask);
        }
    }

    pub fn toggle_direction(&mut self, position: TilePosition, direction: Direction, can_access: bool) {
        let mut mask = self.get_floor_access(position);
        mask.set(direction, !can_access);
        self.set_floor_access(position, mask);
    }
}

#[cfg(test)]
mod tests {
    use crate::tiles::{AccessMask, Cell, Direction, Floor, TilePosition, TilesDomain};

    fn tiles() -> TilesDomain {
        let mut tiles = TilesDomain::new(4, 4);
        for index in 0..16 {
            let position = tiles.from_index(index);
            tiles
                .populate_cell(position, Cell::new(Floor::new("grass"), 0))
                .unwrap();
        }
        tiles
    }

    #[test]
    fn test_floor_access_defaults_to_open() {
        let tiles = tiles();
        for index in 0..16 {
            let position = tiles.from_index(index);
            assert_eq!(tiles.get_floor_access(position), AccessMask::OPEN);
        }
        assert!(tiles.access.is_empty());
    }

    #[test]
    fn test_open_mask_is_not_stored() {
        let mut tiles = tiles();
        let position = TilePosition::new(2, 2);
        tiles.set_floor_access(position, AccessMask::OPEN);
        assert!(tiles.access.is_empty());
        tiles.set_floor_access(position, AccessMask(0b101));
        assert_eq!(tiles.access.len(), 1);
        assert_eq!(tiles.get_floor_access(position), AccessMask(0b101));
    }

    #[test]
    fn test_toggle_direction_flips_single_bit() {
        let mut tiles = tiles();
        let position = TilePosition::new(1, 3);
        tiles.toggle_direction(position, Direction::East, false);
        let mask = tiles.get_floor_access(position);
        assert!(mask.is_blocked(Direction::East));
        assert!(!mask.is_blocked(Direction::West));
        tiles.toggle_direction(position, Direction::East, true);
        assert_eq!(tiles.get_floor_access(position), AccessMask::OPEN);
        assert!(tiles.access.is_empty());
    }
}
