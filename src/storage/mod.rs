use crate::{config::Database, storage::error::StorageError, storage::operations::SongStore};

pub mod db;
pub mod error;
pub mod operations;
pub(crate) mod schema;

/// Opens a fresh connection to the song store on every call.
///
/// The HTTP server holds one of these instead of a connection, so each
/// request gets its own connection and releases it before returning.
pub trait StoreConnector: Send + Sync {
    fn connect(&self) -> Result<SongStore, StorageError>;
}

impl StoreConnector for Database {
    fn connect(&self) -> Result<SongStore, StorageError> {
        SongStore::new(self)
    }
}
