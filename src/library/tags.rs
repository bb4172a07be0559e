use std::path::Path;

use lofty::config::{ParseOptions, ParsingMode};
use lofty::error::LoftyError;
use lofty::file::TaggedFileExt;
use lofty::prelude::*;
use lofty::probe::Probe;
use lofty::tag::TagType;
use id3::TagLike as _;
use thiserror::Error;

use crate::domain::song::Song;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("could not decode file: {0}")]
    Decode(#[from] LoftyError),

    #[error("file carries no metadata tag")]
    MissingTag,
}

/// Reads the song fields out of an audio file's metadata tag
pub trait TagReader {
    fn read_song(&self, path: &Path) -> Result<Song, TagError>;
}

/// Year text of the ID3v2 recording-time frame exactly as written.
///
/// lofty parses TDRC into a timestamp and drops values like `Unknown` or `75`,
/// so the frame is read again with the id3 crate, which keeps text frames as text.
fn raw_id3_year(path: &Path) -> Option<String> {
    let tag = match id3::Tag::read_from_path(path) {
        Ok(tag) => tag,
        Err(e) => {
            log::debug!("Could not read ID3 tag from {}: {}", path.display(), e);
            return None;
        }
    };

    ["TDRC", "TYER"]
        .iter()
        .find_map(|id| tag.get(id).and_then(|frame| frame.content().text()))
        .map(|text| text.to_string())
}

/// [`TagReader`] backed by lofty, covering ID3v2 and the other tag formats it knows
pub struct LoftyTagReader;

impl TagReader for LoftyTagReader {
    fn read_song(&self, path: &Path) -> Result<Song, TagError> {
        // relaxed: a malformed frame is skipped instead of failing the whole file
        let options = ParseOptions::new().parsing_mode(ParsingMode::Relaxed);
        let tagged_file = Probe::open(path)?
            .options(options)
            .guess_file_type()
            .map_err(LoftyError::from)?
            .read()?;

        // Try primary tag, then fall back
        let tag = tagged_file
            .primary_tag()
            .or_else(|| tagged_file.first_tag())
            .ok_or(TagError::MissingTag)?;

        let raw_year = match tag.tag_type() {
            TagType::Id3v2 => raw_id3_year(path),
            _ => None,
        };

        Ok(Song {
            artist: tag.artist().map(|s| s.to_string()),
            year: raw_year
                .or_else(|| tag.get_string(&ItemKey::RecordingDate).map(|s| s.to_string()))
                .or_else(|| tag.year().map(|y| y.to_string())),
            album: tag.album().map(|s| s.to_string()),
            title: tag.title().map(|s| s.to_string()),
        })
    }
}
