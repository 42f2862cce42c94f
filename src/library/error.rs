//! Errors raised while opening a library.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure to open a library tree.
///
/// Every error that leaves a directory is wrapped in [`LibraryError::InLibrary`]
/// naming that directory, so the rendered message reads as a breadcrumb trail
/// from the root down to the directory that failed:
///
/// ```text
/// open library /music: open library /music/Album: library is empty
/// ```
#[derive(Debug, Error)]
pub enum LibraryError {
    /// No media extensions were configured.
    #[error("empty extension set: at least one media extension must be specified")]
    EmptyExtensionSet,

    /// A playlist extension is also listed as a media extension.
    #[error("playlist extension {0:?}: playlist extension set may not overlap media file extension set")]
    ExtensionsOverlap(String),

    /// The directory could not be listed (missing, unreadable, not a directory).
    #[error("{0}")]
    Open(#[source] io::Error),

    /// The directory has no entries at all.
    #[error("library is empty")]
    EmptyLibrary,

    /// Subdirectories nest deeper than the configured limit.
    #[error("traversal limit exceeded: more than {max_depth} nested directories")]
    TraversalLimitExceeded { max_depth: usize },

    /// A directory resolves to one of its own ancestors (symlink loop).
    #[error("directory cycle: {} is already being loaded", .0.display())]
    DirectoryCycle(PathBuf),

    /// A playlist file could not be read.
    #[error("playlist {}: {source}", path.display())]
    Playlist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An error raised while loading the directory at `path`.
    #[error("open library {}: {source}", path.display())]
    InLibrary {
        path: PathBuf,
        #[source]
        source: Box<LibraryError>,
    },
}

/// Classification of a [`LibraryError`] with the breadcrumb layers removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyExtensionSet,
    ExtensionsOverlap,
    Open,
    EmptyLibrary,
    TraversalLimitExceeded,
    DirectoryCycle,
    Playlist,
}

impl LibraryError {
    pub(crate) fn in_library(path: &Path, source: LibraryError) -> Self {
        Self::InLibrary {
            path: path.to_path_buf(),
            source: Box::new(source),
        }
    }

    /// The innermost error, past every `InLibrary` layer.
    pub fn root_cause(&self) -> &LibraryError {
        let mut err = self;
        while let Self::InLibrary { source, .. } = err {
            err = source;
        }
        err
    }

    /// What went wrong, regardless of how deep in the tree it happened.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyExtensionSet => ErrorKind::EmptyExtensionSet,
            Self::ExtensionsOverlap(_) => ErrorKind::ExtensionsOverlap,
            Self::Open(_) => ErrorKind::Open,
            Self::EmptyLibrary => ErrorKind::EmptyLibrary,
            Self::TraversalLimitExceeded { .. } => ErrorKind::TraversalLimitExceeded,
            Self::DirectoryCycle(_) => ErrorKind::DirectoryCycle,
            Self::Playlist { .. } => ErrorKind::Playlist,
            Self::InLibrary { source, .. } => source.kind(),
        }
    }

    /// The deepest directory named in the breadcrumb trail, i.e. the one whose
    /// loading failed.
    pub fn failed_path(&self) -> Option<&Path> {
        let mut err = self;
        let mut path = None;
        while let Self::InLibrary { path: p, source } = err {
            path = Some(p.as_path());
            err = source;
        }
        path
    }
}
