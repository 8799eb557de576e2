//! Solid-color swatch generation: hex color strings in, 128×128 PNG files out.
//!
//! A palette is an ordered list of [`ColorEntry`] values, bare hex strings
//! or name+hex pairs. [`generate_all`] parses each entry, fills a square
//! raster with the color, and persists it as `<name>.png` into a
//! pre-existing output directory, one entry at a time.

pub mod color;
pub mod engine;
pub mod error;
pub mod palette;
pub mod swatch;
pub mod types;

pub use engine::generate_all;
pub use error::SwatchError;
pub use types::{ColorEntry, SwatchFailure, SwatchReport};
