use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SwatchError {
    /// The output directory is a precondition; it is never created here.
    #[error("output directory {0:?} does not exist")]
    MissingOutputDir(PathBuf),

    #[error("failed to write swatch {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
