use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: Database,
    pub library_source: LibrarySource,
    pub http: HttpConfig,
    pub browser: BrowserConfig,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&contents).with_context(|| "Failed to parse config TOML")
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub bind_addr: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Location of the song database file
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Database {
    pub path: PathBuf,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            path: PathBuf::from("songs.db"),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LibrarySource {
    /// File name suffix a file must end with to be scanned. Case-sensitive.
    pub suffix: String,
    pub follow_symlinks: bool,
}

impl Default for LibrarySource {
    fn default() -> Self {
        Self {
            suffix: ".mp3".to_string(),
            follow_symlinks: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct BrowserConfig {
    /// Open the song listing in a browser once the server is up
    pub open: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self { open: true }
    }
}
