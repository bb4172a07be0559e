use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("filesystem error: {0}")]
    Fs(#[from] std::io::Error),

    #[error("batch insert wrote {inserted} of {expected} songs, rolled back")]
    IncompleteInsert { expected: usize, inserted: usize },
}
