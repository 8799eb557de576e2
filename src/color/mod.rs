pub mod hex;
pub mod model;

pub use hex::{format_rgb_hex, parse_hex};
pub use model::Rgba;
