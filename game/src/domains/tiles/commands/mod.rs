pub use populate_cell::*;
pub use set_floor_access::*;

mod populate_cell;
mod set_floor_access;
