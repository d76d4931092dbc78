pub mod config;
pub mod games;
pub mod roms;
pub mod sizes;
pub mod systems;
