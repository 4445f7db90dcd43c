//! Error types for loading sources, decoding entries and deleting files.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to open or list an image source. A failed load never replaces
/// the active source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("path does not exist: {0:?}")]
    NotFound(PathBuf),

    #[error("not a directory: {0:?}")]
    NotADirectory(PathBuf),

    #[error("{name} is not a supported image in {dir:?}")]
    EntryNotFound { dir: PathBuf, name: String },

    #[error("not a valid zip archive: {path:?}")]
    InvalidArchive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to read {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure to turn an entry into a bitmap.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("entry index {index} is out of range (entries: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("failed to read {name}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read archive member {name}")]
    Archive {
        name: String,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("failed to decode {name}")]
    Image {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("animation has no frames: {0}")]
    EmptyAnimation(String),
}

/// Failure to delete an entry. The entry list is left untouched.
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("cannot delete files from a zip archive")]
    UnsupportedOperation,

    #[error("entry index {index} is out of range (entries: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("could not delete {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
