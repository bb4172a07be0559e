use rusqlite::Connection;

pub mod tables {
    pub const SONGS: &str = "songs";

    pub const ALL_TABLES: &[&str] = &[SONGS];
}

pub mod columns {
    pub const ARTIST: &str = "artist";
    pub const YEAR: &str = "year";
    pub const ALBUM: &str = "album";
    pub const TITLE: &str = "title";
}

pub use columns::*;
pub use tables::*;

fn schema() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {SONGS} (
    {ARTIST} TEXT,
    {YEAR} TEXT,
    {ALBUM} TEXT,
    {TITLE} TEXT
);"
    )
}

pub fn init(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(&schema())
}
