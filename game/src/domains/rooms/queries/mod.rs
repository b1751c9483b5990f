pub use room_at::*;

mod room_at;
