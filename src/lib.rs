pub mod config;
pub mod mph;
pub mod sat_bands;
