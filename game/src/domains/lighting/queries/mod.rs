pub use affected_region::*;
pub use can_affect_map::*;
pub use get_light::*;

mod affected_region;
mod can_affect_map;
mod get_light;
