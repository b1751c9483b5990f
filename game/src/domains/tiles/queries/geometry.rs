use crate::math::VectorMath;
use crate::tiles::{TilePosition, TilesDomain, TILE_HEIGHT, TILE_WIDTH};

impl TilesDomain {
    /// World position of the tile's top left corner. Light is computed on an
    /// unstaggered grid, so neighbour tiles share their corners.
    pub fn tile_origin(&self, position: TilePosition) -> [f32; 2] {
        [
            position.x as f32 * TILE_WIDTH,
            position.y as f32 * TILE_HEIGHT,
        ]
    }

    pub fn tile_center(&self, position: TilePosition) -> [f32; 2] {
        self.tile_origin(position)
            .add([TILE_WIDTH / 2.0, TILE_HEIGHT / 2.0])
    }
}

/// Light vertices of a tile: origin, origin + width, origin + height,
/// origin + width + height.
pub fn tile_corners(origin: [f32; 2]) -> [[f32; 2]; 4] {
    [
        origin,
        origin.add([TILE_WIDTH, 0.0]),
        origin.add([0.0, TILE_HEIGHT]),
        origin.add([TILE_WIDTH, TILE_HEIGHT]),
    ]
}
