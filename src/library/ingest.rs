use std::path::PathBuf;

use log::info;

use crate::{
    domain::song::Song,
    library::{error::LibraryError, tags::TagReader},
    storage::StoreConnector,
};

#[derive(Debug, PartialEq, Eq)]
pub struct IngestReport {
    /// files handed to the pipeline
    pub scanned: usize,
    /// rows written to the store
    pub inserted: usize,
}

/// Reads one song per path, in order. Stops at the first file that fails.
pub fn extract_all<R: TagReader + ?Sized>(
    reader: &R,
    paths: &[PathBuf],
) -> Result<Vec<Song>, LibraryError> {
    paths
        .iter()
        .map(|path| {
            reader
                .read_song(path)
                .map_err(|source| LibraryError::Extraction {
                    path: path.clone(),
                    source,
                })
        })
        .collect()
}

/// Extracts every song first, then stores them all as one batch.
///
/// The store is only opened once extraction has succeeded for every path, so
/// a bad file leaves the database untouched.
pub fn ingest<C, R>(connector: &C, reader: &R, paths: &[PathBuf]) -> Result<IngestReport, LibraryError>
where
    C: StoreConnector + ?Sized,
    R: TagReader + ?Sized,
{
    let songs = extract_all(reader, paths)?;

    let mut store = connector.connect()?;
    let inserted = store.insert_batch(&songs)?;
    info!("Inserted [={inserted}] records into the database");

    Ok(IngestReport {
        scanned: paths.len(),
        inserted,
    })
}
