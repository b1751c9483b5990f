pub use propagate_focus::*;
pub use remove_light::*;
pub use set_light::*;

mod propagate_focus;
mod remove_light;
mod set_light;
