//! Turning a directory of audio files into stored songs

pub mod error;
pub mod ingest;
pub mod scanner;
pub mod tags;
