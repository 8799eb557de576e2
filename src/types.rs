use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgba};

/// One unit of input driving one swatch.
///
/// Deserializes from either a bare hex string or a `{"name": ..., "hex": ...}`
/// object, so a JSON palette can mix both forms in one array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorEntry {
    /// Explicitly named; the name becomes the output file stem.
    Named { name: String, hex: String },
    /// Unnamed; the file stem is the normalized uppercase hex code.
    Hex(String),
}

impl ColorEntry {
    /// Raw hex string as supplied by the caller.
    pub fn hex(&self) -> &str {
        match self {
            ColorEntry::Named { hex, .. } => hex,
            ColorEntry::Hex(hex) => hex,
        }
    }

    /// Parsed color. Opaque white when the hex string is invalid.
    pub fn color(&self) -> Rgba {
        color::parse_hex(self.hex())
    }

    /// Output file name without the `.png` extension.
    pub fn file_stem(&self) -> String {
        match self {
            ColorEntry::Named { name, .. } => name.clone(),
            ColorEntry::Hex(hex) => color::format_rgb_hex(&color::parse_hex(hex)),
        }
    }
}

/// Outcome of one batch run, split by per-entry result.
#[derive(Debug, Default)]
pub struct SwatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<SwatchFailure>,
}

/// A single entry that could not be persisted.
#[derive(Debug, Clone)]
pub struct SwatchFailure {
    pub file_stem: String,
    pub reason: String,
}
