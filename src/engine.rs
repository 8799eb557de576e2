use std::path::Path;

use crate::error::SwatchError;
use crate::swatch;
use crate::types::{ColorEntry, SwatchFailure, SwatchReport};

/// Render and persist every entry into `output_dir`, in order.
///
/// The directory must already exist; a missing directory fails the whole
/// batch up front, before anything is rendered. A per-entry write failure is
/// logged and recorded in the report, and the batch moves on to the next
/// entry; no abort, no retry. Entries that derive the same file name
/// overwrite each other, last write wins.
pub fn generate_all(
    entries: &[ColorEntry],
    output_dir: &Path,
) -> Result<SwatchReport, SwatchError> {
    if !output_dir.is_dir() {
        return Err(SwatchError::MissingOutputDir(output_dir.to_path_buf()));
    }

    let mut report = SwatchReport::default();
    for entry in entries {
        let color = entry.color();
        let file_stem = entry.file_stem();
        match swatch::write_swatch(&color, &file_stem, output_dir) {
            Ok(path) => report.written.push(path),
            Err(err) => {
                log::warn!("skipping {}: {}", file_stem, err);
                report.failed.push(SwatchFailure {
                    file_stem,
                    reason: err.to_string(),
                });
            }
        }
    }
    Ok(report)
}
