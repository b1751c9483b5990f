pub use containers::*;
pub use create_handle::*;
pub use destroy::*;
pub use equipment::*;
pub use insert::*;
pub use relocate::*;
pub use relocate_for_visuals::*;
pub use remove_from_tile::*;
pub use retain::*;

mod containers;
mod create_handle;
mod destroy;
mod equipment;
mod insert;
mod relocate;
mod relocate_for_visuals;
mod remove_from_tile;
mod retain;
