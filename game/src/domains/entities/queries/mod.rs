pub use get_entity::*;
pub use obstacles::*;
pub use ownership::*;

mod get_entity;
mod obstacles;
mod ownership;
