pub mod palette_loader;

pub use palette_loader::load_palette;
