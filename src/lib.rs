pub mod config;
pub mod loader;
pub mod normalize;
pub mod table;
