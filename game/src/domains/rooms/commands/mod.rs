pub use add_tile::*;
pub use set_roof_visible::*;

mod add_tile;
mod set_roof_visible;
