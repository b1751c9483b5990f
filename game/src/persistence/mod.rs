pub use binary::*;
pub use dump::*;
pub use fs::*;
pub use header::*;
pub use save_game::MAX_AREAS;

mod binary;
mod dump;
mod fs;
mod header;
mod load_area;
mod save_area;
mod save_game;
