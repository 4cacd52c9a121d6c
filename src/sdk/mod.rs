pub mod cities;
pub mod config;
pub mod encoder;
pub mod error;
pub mod extract;
pub mod regions;
pub mod util;
