use crate::{
    config,
    domain::song::Song,
    storage::{
        db,
        error::StorageError,
        schema::{columns, tables},
    },
};

use columns::*;
use rusqlite::params;
use tables::*;

/// Connection to the song database with the two operations the app needs
pub struct SongStore {
    pub(crate) db: rusqlite::Connection,
}

impl SongStore {
    /// when called, opens a data base connection
    pub fn new(db_config: &config::Database) -> Result<Self, StorageError> {
        let db = db::open(db_config)?;
        Ok(Self::from_existing_conn(db))
    }

    pub fn from_existing_conn(db: rusqlite::Connection) -> Self {
        Self { db }
    }

    /// Inserts all songs in one transaction and returns how many rows were written.
    ///
    /// Either every song is stored or none is.
    pub fn insert_batch(&mut self, songs: &[Song]) -> Result<usize, StorageError> {
        let tx = self.db.transaction()?;

        let inserted = {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {SONGS} ({ARTIST}, {YEAR}, {ALBUM}, {TITLE}) VALUES (?1, ?2, ?3, ?4)"
            ))?;

            let mut inserted = 0;
            for song in songs {
                inserted += stmt.execute(params![song.artist, song.year, song.album, song.title])?;
            }
            inserted
        };

        if inserted != songs.len() {
            // dropping tx rolls it back
            return Err(StorageError::IncompleteInsert {
                expected: songs.len(),
                inserted,
            });
        }

        tx.commit()?;
        Ok(inserted)
    }

    /// Returns every stored song, in whatever order the database yields them
    pub fn query_all(&self) -> Result<Vec<Song>, StorageError> {
        let mut stmt = self
            .db
            .prepare(&format!("SELECT {YEAR}, {ARTIST}, {ALBUM}, {TITLE} FROM {SONGS}"))?;

        let songs = stmt
            .query_map([], |row| {
                Ok(Song {
                    year: row.get(0)?,
                    artist: row.get(1)?,
                    album: row.get(2)?,
                    title: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(songs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::schema;
    use rusqlite::Connection;
    use tempfile::tempdir;

    fn setup_store() -> anyhow::Result<SongStore> {
        let conn = Connection::open_in_memory()?;
        schema::init(&conn)?;
        Ok(SongStore::from_existing_conn(conn))
    }

    fn queen() -> Song {
        Song::new(
            "Queen",
            "1975",
            "A Night at the Opera",
            "Bohemian Rhapsody",
        )
    }

    #[test]
    fn test_round_trip_keeps_all_fields() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        let inserted = store.insert_batch(&[queen()])?;
        assert_eq!(inserted, 1);

        let songs = store.query_all()?;
        assert_eq!(songs, vec![queen()]);

        Ok(())
    }

    #[test]
    fn test_absent_fields_round_trip_as_none() -> anyhow::Result<()> {
        let mut store = setup_store()?;
        let song = Song {
            title: Some("Untitled".to_string()),
            ..Default::default()
        };

        store.insert_batch(std::slice::from_ref(&song))?;

        assert_eq!(store.query_all()?, vec![song]);
        Ok(())
    }

    #[test]
    fn test_insert_empty_batch() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        assert_eq!(store.insert_batch(&[])?, 0);
        assert!(store.query_all()?.is_empty());

        Ok(())
    }

    #[test]
    fn test_repeated_inserts_append_duplicates() -> anyhow::Result<()> {
        let mut store = setup_store()?;

        store.insert_batch(&[queen()])?;
        store.insert_batch(&[queen()])?;

        assert_eq!(store.query_all()?, vec![queen(), queen()]);
        Ok(())
    }

    #[test]
    fn test_query_returns_superset_across_connections() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let config = config::Database {
            path: dir.path().join("songs.db"),
        };

        let earlier = Song::new("Earlier", "1970", "Old", "Run");
        SongStore::new(&config)?.insert_batch(std::slice::from_ref(&earlier))?;

        let batch = vec![
            queen(),
            Song::new("Miles Davis", "1959", "Kind of Blue", "So What"),
        ];
        let inserted = SongStore::new(&config)?.insert_batch(&batch)?;
        assert_eq!(inserted, 2);

        let stored = SongStore::new(&config)?.query_all()?;
        assert_eq!(stored.len(), 3);
        for song in batch.iter().chain(std::iter::once(&earlier)) {
            assert!(stored.contains(song), "missing {song:?}");
        }

        Ok(())
    }

    #[test]
    fn test_failed_batch_rolls_back() -> anyhow::Result<()> {
        let mut store = setup_store()?;
        store.db.execute_batch(&format!(
            "CREATE TRIGGER reject_bad BEFORE INSERT ON {SONGS}
             WHEN NEW.{TITLE} = 'bad'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;"
        ))?;

        let batch = vec![queen(), Song::new("X", "2000", "Y", "bad")];
        let result = store.insert_batch(&batch);

        assert!(matches!(result, Err(StorageError::Database(_))));
        assert!(store.query_all()?.is_empty());

        Ok(())
    }
}
