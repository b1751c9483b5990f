pub mod entities;
pub mod lighting;
pub mod rooms;
pub mod tags;
pub mod tiles;
