use std::path::PathBuf;

use thiserror::Error;

use crate::{library::tags::TagError, storage::error::StorageError};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("the directory does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("error while scanning directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to read tags from {}: {source}", .path.display())]
    Extraction {
        path: PathBuf,
        #[source]
        source: TagError,
    },

    #[error("persistence error: {0}")]
    Persistence(#[from] StorageError),
}
