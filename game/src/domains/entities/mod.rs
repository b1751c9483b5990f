pub use commands::*;
pub use domain::*;
pub use kinds::*;
pub use queries::*;

mod commands;
mod domain;
mod kinds;
mod queries;
