//! Image list navigation and decoding for the annotation canvas.

mod list;
mod loader;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use list::ImageList;
pub use loader::{load_image, DecodedImage};

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("no images selected")]
    EmptySelection,
    #[error("no images with extensions {extensions:?} in {dir}")]
    NoImagesInDirectory {
        dir: PathBuf,
        extensions: Vec<String>,
    },
    #[error("failed to list directory: {dir}")]
    ReadDirectory { dir: PathBuf, source: io::Error },
    #[error("failed to decode image: {path}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("image too large to display: {width}x{height}")]
    TooLarge { width: u32, height: u32 },
}

pub type ImageResult<T> = std::result::Result<T, ImageError>;
