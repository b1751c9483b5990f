use crate::tiles::{Direction, TilePosition, TilesDomain};

/// Neighbour deltas of staggered isometric rows, indexed by `Direction`.
const EVEN_ROW_DELTAS: [[i32; 2]; 8] = [
    [0, -2],
    [0, -1],
    [1, 0],
    [0, 1],
    [0, 2],
    [-1, 1],
    [-1, 0],
    [-1, -1],
];

const ODD_ROW_DELTAS: [[i32; 2]; 8] = [
    [0, -2],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 2],
    [0, 1],
    [-1, 0],
    [0, -1],
];

impl TilesDomain {
    /// Neighbour inside map bounds, populated or not.
    pub fn neighbour(&self, position: TilePosition, direction: Direction) -> Option<TilePosition> {
        let deltas = if position.y % 2 == 0 {
            &EVEN_ROW_DELTAS
        } else {
            &ODD_ROW_DELTAS
        };
        let [dx, dy] = deltas[direction.index()];
        let x = position.x as i32 + dx;
        let y = position.y as i32 + dy;
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(TilePosition::new(x as u16, y as u16))
    }

    pub fn adjacent_tile(&self, position: TilePosition, direction: Direction) -> Option<TilePosition> {
        self.neighbour(position, direction)
            .filter(|neighbour| self.is_populated(*neighbour))
    }

    /// Exact direction for neighbours, compass approximation otherwise.
    pub fn direction_between(&self, from: TilePosition, to: TilePosition) -> Option<Direction> {
        if from == to {
            return None;
        }
        for direction in Direction::ALL {
            if self.neighbour(from, direction) == Some(to) {
                return Some(direction);
            }
        }
        let dx = to.x as i32 - from.x as i32;
        let dy = to.y as i32 - from.y as i32;
        let direction = match (dx.signum(), dy.signum()) {
            (0, -1) => Direction::North,
            (0, _) => Direction::South,
            (1, 0) => Direction::East,
            (_, 0) => Direction::West,
            (1, -1) => Direction::NorthEast,
            (1, _) => Direction::SouthEast,
            (_, -1) => Direction::NorthWest,
            _ => Direction::SouthWest,
        };
        Some(direction)
    }
}
