//! Playlist file parsing.
//!
//! Each supported format has a [`PlaylistParser`]; a [`ParserRegistry`] maps
//! playlist extensions to parsers. Playlist extensions with no registered
//! parser are loaded without reading the file, referring only to themselves.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::library::PlaylistItem;

mod m3u;
mod pls;

pub use m3u::M3uParser;
pub use pls::PlsParser;

#[cfg(test)]
mod tests;

/// The result of parsing one playlist file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPlaylist {
    /// Title declared inside the file, overriding the filename.
    pub title: Option<String>,
    pub items: Vec<PlaylistItem>,
}

/// A parser for one playlist format.
pub trait PlaylistParser: Send + Sync {
    /// Parse `contents`, the text of the playlist at `path`.
    ///
    /// Relative references are resolved against the directory holding `path`.
    /// Lines that cannot be understood are skipped rather than reported.
    fn parse(&self, path: &Path, contents: &str) -> ParsedPlaylist;
}

/// Playlist parsers keyed by extension (without the leading dot).
#[derive(Clone, Default)]
pub struct ParserRegistry {
    parsers: BTreeMap<String, Arc<dyn PlaylistParser>>,
}

impl ParserRegistry {
    /// Parsers for `m3u`, `m3u8` and `pls`.
    pub fn standard() -> Self {
        let mut reg = Self::default();
        reg.register("m3u", M3uParser);
        reg.register("m3u8", M3uParser);
        reg.register("pls", PlsParser);
        reg
    }

    /// Use `parser` for files with extension `ext`, replacing any previous one.
    pub fn register(&mut self, ext: impl Into<String>, parser: impl PlaylistParser + 'static) {
        self.parsers.insert(ext.into(), Arc::new(parser));
    }

    pub fn get(&self, ext: &str) -> Option<&dyn PlaylistParser> {
        self.parsers.get(ext).map(|p| p.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.parsers.keys()).finish()
    }
}

/// Turn a playlist reference into a path.
///
/// `file://` prefixes are stripped and relative references are joined onto
/// `base`. Remote URLs are not local files and yield `None`.
pub(crate) fn resolve_reference(base: &Path, reference: &str) -> Option<PathBuf> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    let reference = match reference.strip_prefix("file://") {
        Some(local) => local,
        None if reference.contains("://") => return None,
        None => reference,
    };

    let path = Path::new(reference);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base.join(path))
    }
}

/// The directory relative playlist references are resolved against.
pub(crate) fn base_dir(playlist: &Path) -> &Path {
    playlist.parent().unwrap_or_else(|| Path::new(""))
}
