use std::path::PathBuf;

use thiserror::Error;

/// Why a single image could not be scored.
///
/// Terminal for that image: nothing about a malformed input is transient,
/// so callers should record it and move on rather than retry.
#[derive(Error, Debug)]
pub enum InvalidImageError {
    #[error("Empty image: {width}x{height}")]
    Empty { width: usize, height: usize },

    #[error("Image too small for a 3x3 gradient kernel: {width}x{height}")]
    TooSmall { width: usize, height: usize },

    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

#[derive(Error, Debug)]
pub enum SharpscoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot access directory {}: {source}", .path.display())]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidImage(#[from] InvalidImageError),

    #[error("Cannot write {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SharpscoreError>;
