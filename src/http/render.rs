//! HTML pages served by the listing

use crate::domain::song::Song;

const HEADER_ROW: &str = "<tr><th>Year</th><th>Artist</th><th>Album</th><th>Title</th></tr>";

fn cell(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Renders every song as a row of one table.
///
/// Values are written as stored, without HTML escaping.
pub fn song_table(songs: &[Song]) -> String {
    let mut rows = String::new();
    for song in songs {
        rows.push_str(&format!(
            "<tr class=\"table\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            cell(&song.year),
            cell(&song.artist),
            cell(&song.album),
            cell(&song.title),
        ));
    }

    format!("<html><h1>Your Songs</h1><table>{HEADER_ROW}{rows}</table></html>")
}

pub fn error_page(status: u16, reason: &str) -> String {
    format!("<html><h1>Your Songs</h1><p>Error {status}: {reason}</p></html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_only_header() {
        let html = song_table(&[]);

        assert_eq!(
            html,
            format!("<html><h1>Your Songs</h1><table>{HEADER_ROW}</table></html>")
        );
    }

    #[test]
    fn cells_follow_year_artist_album_title_order() {
        let song = Song::new("Queen", "1975", "A Night at the Opera", "Bohemian Rhapsody");

        let html = song_table(&[song]);

        assert!(html.contains(
            "<tr class=\"table\"><td>1975</td><td>Queen</td>\
             <td>A Night at the Opera</td><td>Bohemian Rhapsody</td></tr>"
        ));
    }

    #[test]
    fn absent_fields_render_as_empty_cells() {
        let song = Song {
            title: Some("Intro".to_string()),
            ..Default::default()
        };

        let html = song_table(&[song]);

        assert!(html.contains("<td></td><td></td><td></td><td>Intro</td>"));
    }

    #[test]
    fn values_are_not_escaped() {
        let song = Song::new("<b>Bold</b>", "1999", "A & B", "T");

        let html = song_table(&[song]);

        assert!(html.contains("<td><b>Bold</b></td>"));
        assert!(html.contains("<td>A & B</td>"));
    }
}
