pub mod png_io;
pub mod quantize;

pub use png_io::{decode_rgba, encode_rgba, optimize_png, quantize_png, quantize_png_file, RgbaImage};
pub use quantize::{quantize_pixel, quantize_rgba, QuantizeStats};
