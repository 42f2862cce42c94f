use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/medialib/config.toml` or `~/.config/medialib/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MEDIALIB__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directories to load, one library tree each.
    pub roots: Vec<PathBuf>,
    /// Extensions of playable files, without the dot. `""` matches files with
    /// no extension.
    pub media_extensions: Vec<String>,
    /// Extensions of playlist files. Must not overlap `media_extensions`.
    pub playlist_extensions: Vec<String>,
    /// Whether to follow symlinks while loading.
    pub follow_links: bool,
    /// Whether to load hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Deepest allowed directory nesting below a root.
    pub max_depth: usize,
    /// Read playlist contents (m3u, m3u8, pls) instead of treating each
    /// playlist as a reference to itself.
    pub parse_playlists: bool,
    /// Title media files from their tags rather than their file names.
    pub metadata_titles: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            media_extensions: ["mp3", "flac", "ogg", "opus", "wav", "m4a"]
                .map(String::from)
                .to_vec(),
            playlist_extensions: ["m3u", "m3u8", "pls"].map(String::from).to_vec(),
            follow_links: true,
            include_hidden: true,
            max_depth: crate::library::DEFAULT_MAX_DEPTH,
            parse_playlists: true,
            metadata_titles: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `tracing` filter directive, e.g. `"info"` or `"medialib=debug"`.
    /// `RUST_LOG` takes precedence when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}
