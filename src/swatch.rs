use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::color::Rgba;
use crate::error::SwatchError;

/// Output assets are fixed-size squares.
pub const SWATCH_SIZE: u32 = 128;

/// Rasterize one color as a `SWATCH_SIZE` × `SWATCH_SIZE` RGBA buffer.
/// Every pixel holds the same rounded 8-bit channel values, alpha included.
pub fn render_swatch(color: &Rgba) -> RgbaImage {
    RgbaImage::from_pixel(SWATCH_SIZE, SWATCH_SIZE, image::Rgba(color.to_rgba8()))
}

/// Render `color` and write it as PNG to `output_dir/<file_stem>.png`.
///
/// Overwrites an existing file of the same name. The directory itself is
/// never created here; a missing directory surfaces as a `Write` error.
pub fn write_swatch(
    color: &Rgba,
    file_stem: &str,
    output_dir: &Path,
) -> Result<PathBuf, SwatchError> {
    let path = output_dir.join(format!("{}.png", file_stem));
    render_swatch(color)
        .save(&path)
        .map_err(|source| SwatchError::Write {
            path: path.clone(),
            source,
        })?;
    log::debug!("wrote swatch {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_hex;

    #[test]
    fn rendered_buffer_is_uniform() {
        let swatch = render_swatch(&parse_hex("1abc9c"));
        assert_eq!(swatch.dimensions(), (SWATCH_SIZE, SWATCH_SIZE));
        assert!(swatch.pixels().all(|p| p.0 == [0x1a, 0xbc, 0x9c, 0xff]));
    }

    #[test]
    fn rendered_buffer_keeps_alpha() {
        // 0x80 alpha leads in the 8-digit form
        let swatch = render_swatch(&parse_hex("80336699"));
        assert!(swatch.pixels().all(|p| p.0 == [0x33, 0x66, 0x99, 0x80]));
    }

    #[test]
    fn written_file_decodes_to_uniform_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_swatch(&parse_hex("1abc9c"), "1ABC9C", dir.path()).unwrap();
        assert_eq!(path, dir.path().join("1ABC9C.png"));

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (SWATCH_SIZE, SWATCH_SIZE));
        assert!(decoded.pixels().all(|p| p.0 == [0x1a, 0xbc, 0x9c, 0xff]));
    }

    #[test]
    fn rewrite_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        write_swatch(&parse_hex("ff0000"), "swatch", dir.path()).unwrap();
        write_swatch(&parse_hex("0000ff"), "swatch", dir.path()).unwrap();

        let decoded = image::open(dir.path().join("swatch.png")).unwrap().to_rgba8();
        assert!(decoded.pixels().all(|p| p.0 == [0x00, 0x00, 0xff, 0xff]));
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("not-there");
        let err = write_swatch(&parse_hex("ff0000"), "swatch", &gone).unwrap_err();
        assert!(matches!(err, SwatchError::Write { .. }));
    }
}
