use crate::lighting::{Light, LightingDomain};
use crate::tiles::{TilePosition, TileRegion, TilesDomain, TILE_HEIGHT, TILE_WIDTH};

impl LightingDomain {
    /// Tiles a focus of the given intensity may reach, two and a half tiles of
    /// margin absorb rounding at the diagonals.
    pub fn affected_region(tiles: &TilesDomain, focus: TilePosition, intensity: Light) -> TileRegion {
        debug_assert!(tiles.width > 0 && tiles.height > 0);
        let delta_x = (intensity as f32 / TILE_WIDTH + 2.5) as i32;
        let delta_y = (intensity as f32 / (TILE_HEIGHT / 2.0) + 2.5) as i32;
        let clamp = |value: i32, size: u16| value.clamp(0, size as i32 - 1) as u16;
        TileRegion {
            min: TilePosition::new(
                clamp(focus.x as i32 - delta_x, tiles.width),
                clamp(focus.y as i32 - delta_y, tiles.height),
            ),
            max: TilePosition::new(
                clamp(focus.x as i32 + delta_x, tiles.width),
                clamp(focus.y as i32 + delta_y, tiles.height),
            ),
        }
    }
}
