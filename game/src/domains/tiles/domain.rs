use std::collections::HashMap;
use std::fmt::{Debug, Formatter};
use std::ops::BitOr;

use crate::entities::EntityHandle;

/// Width of a tile in world units.
pub const TILE_WIDTH: f32 = 16.0;

/// Height of a tile in world units. Staggered rows overlap by half a tile on
/// screen, light falloff reach is counted in those half rows.
pub const TILE_HEIGHT: f32 = 8.0;

pub type TileIndex = usize;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, bincode::Encode, bincode::Decode,
)]
pub struct TilePosition {
    pub x: u16,
    pub y: u16,
}

impl TilePosition {
    #[inline]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, bincode::Encode, bincode::Decode)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Bit `n` set means movement towards `Direction::ALL[n]` is blocked.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, bincode::Encode, bincode::Decode)]
pub struct AccessMask(pub u8);

impl AccessMask {
    pub const OPEN: AccessMask = AccessMask(0);
    pub const CLOSED: AccessMask = AccessMask(0xff);

    pub fn from_flags(flags: [bool; 8]) -> Self {
        let mut mask = AccessMask::OPEN;
        for (direction, blocked) in Direction::ALL.into_iter().zip(flags) {
            mask.set(direction, blocked);
        }
        mask
    }

    pub fn flags(&self) -> [bool; 8] {
        Direction::ALL.map(|direction| self.is_blocked(direction))
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn is_blocked(&self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    #[inline]
    pub fn set(&mut self, direction: Direction, blocked: bool) {
        if blocked {
            self.0 |= 1 << direction.index();
        } else {
            self.0 &= !(1 << direction.index());
        }
    }
}

impl BitOr for AccessMask {
    type Output = AccessMask;

    fn bitor(self, other: Self) -> Self::Output {
        AccessMask(self.0 | other.0)
    }
}

impl Debug for AccessMask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessMask({:08b})", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloorKey(pub usize);

pub struct FloorKind {
    pub id: FloorKey,
    pub name: String,
    pub sprite: String,
}

#[derive(Debug, Clone, PartialEq, Eq, bincode::Encode, bincode::Decode)]
pub struct Floor {
    pub profile: String,
}

impl Floor {
    pub fn new(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub floor: Floor,
    pub elevation: u8,
    /// Sorted by entity kind, see [`crate::entities::EntityKind`].
    pub entities: Vec<EntityHandle>,
    pub roof: Option<EntityHandle>,
}

impl Cell {
    pub fn new(floor: Floor, elevation: u8) -> Self {
        Self {
            floor,
            elevation,
            entities: vec![],
            roof: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub min: TilePosition,
    pub max: TilePosition,
}

impl TileRegion {
    pub fn union(self, other: TileRegion) -> TileRegion {
        TileRegion {
            min: TilePosition::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: TilePosition::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    pub fn contains(&self, position: TilePosition) -> bool {
        position.x >= self.min.x
            && position.x <= self.max.x
            && position.y >= self.min.y
            && position.y <= self.max.y
    }

    /// Row-major walk over every tile of the region.
    pub fn positions(&self) -> impl Iterator<Item = TilePosition> {
        let [min_x, max_x] = [self.min.x, self.max.x];
        (self.min.y..=self.max.y)
            .flat_map(move |y| (min_x..=max_x).map(move |x| TilePosition::new(x, y)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TilesError {
    InvalidTile { position: TilePosition },
    TileNotPopulated { position: TilePosition },
}

#[derive(Default)]
pub struct TilesDomain {
    pub width: u16,
    pub height: u16,
    pub cells: Vec<Option<Cell>>,
    pub(crate) access: HashMap<TileIndex, AccessMask>,
}

impl TilesDomain {
    pub fn new(width: u16, height: u16) -> Self {
        let count = width as usize * height as usize;
        Self {
            width,
            height,
            cells: (0..count).map(|_| None).collect(),
            access: HashMap::new(),
        }
    }
}
