pub mod config;

pub use config::{AppConfig, Overrides, PaletteConfig};
