pub use random::*;
pub use vector::*;

mod random;
mod vector;
