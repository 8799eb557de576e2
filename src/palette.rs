use crate::types::ColorEntry;

/// The reference palette: 27 pairwise-distinct flat-UI colors.
pub const DEFAULT_SWATCHES: [&str; 27] = [
    "1abc9c", "16a085", "2ecc71", "27ae60", "3498db", "2980b9", "9b59b6",
    "8e44ad", "34495e", "2c3e50", "f1c40f", "f39c12", "e67e22", "d35400",
    "e74c3c", "c0392b", "ecf0f1", "bdc3c7", "95a5a6", "7f8c8d", "394c81",
    "bf263c", "f7ca18", "ebd6bc", "967adc", "ffb3a7", "000000",
];

/// The reference palette as unnamed entries.
pub fn default_entries() -> Vec<ColorEntry> {
    DEFAULT_SWATCHES
        .iter()
        .map(|hex| ColorEntry::Hex((*hex).to_string()))
        .collect()
}

/// Deserialize a palette from JSON: an array mixing bare hex strings and
/// `{"name": ..., "hex": ...}` objects.
pub fn parse_palette(json: &str) -> Result<Vec<ColorEntry>, serde_json::Error> {
    serde_json::from_str(json)
}
