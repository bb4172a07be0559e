use std::path::Path;

use rusqlite::Connection;

use crate::{
    config::Database,
    storage::{error::StorageError, schema},
};

fn open_from_file(path: &Path) -> Result<Connection, StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(Connection::open(path)?)
}

/// Opens the song database and applies the schema script.
///
/// Safe to call any number of times against the same file: the schema only
/// creates what is missing. Write-ahead logging lets the HTTP handlers read
/// while another connection writes.
pub fn open(config: &Database) -> Result<Connection, StorageError> {
    let db = open_from_file(&config.path)?;
    let mode: String =
        db.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    log::debug!("Opened {} (journal mode {mode})", config.path.display());
    schema::init(&db)?;
    Ok(db)
}
