pub use addressing::*;
pub use adjacency::*;
pub use get_access::*;
pub use geometry::*;

mod addressing;
mod adjacency;
mod geometry;
mod get_access;
