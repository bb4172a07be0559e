/// A song as read from the metadata tag of one audio file.
///
/// Every field is kept exactly as the tag stores it. `year` is the raw tag
/// text, so values like `1975-11-21` survive unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Song {
    pub artist: Option<String>,
    pub year: Option<String>,
    pub album: Option<String>,
    pub title: Option<String>,
}

impl Song {
    pub fn new(artist: &str, year: &str, album: &str, title: &str) -> Self {
        Self {
            artist: Some(artist.to_string()),
            year: Some(year.to_string()),
            album: Some(album.to_string()),
            title: Some(title.to_string()),
        }
    }
}
