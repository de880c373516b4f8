use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Extract(#[from] tpl_extract_api::ExtractError),
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    FileOperation(#[from] tpl_extract_api::FileOperationError),
    #[error("Decoded raster does not match its {width}x{height} dimensions")]
    RasterSize { width: u32, height: u32 },
    #[error("Output names already taken by {}", .first.display())]
    OutputCollision { first: PathBuf },
    #[error("{}: {source}", .path.display())]
    InFile {
        path: PathBuf,
        #[source]
        source: Box<CliError>,
    },
}

impl CliError {
    /// Attaches the container path to an error.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::InFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
