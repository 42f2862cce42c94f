use std::path::{Path, PathBuf};

/// Something that can be queued for playback: a single media file, a
/// playlist, or a whole directory.
pub trait Playable {
    /// Paths of the media files this item refers to.
    ///
    /// One path for a media file, the referenced paths for a playlist, and the
    /// direct media files (never playlists) for a library.
    fn files(&self) -> Vec<&Path>;

    fn title(&self) -> &str;

    /// Items nested within this one that can also be played on their own.
    /// Always empty for files.
    fn nested(&self) -> &[Library];
}

/// A single media file found in a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub title: String,
}

/// One line of a playlist: the referenced path plus the title the playlist
/// gives it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistItem {
    pub path: PathBuf,
    pub title: Option<String>,
}

/// A playlist file found in a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistFile {
    /// Location of the playlist file itself.
    pub path: PathBuf,
    pub title: String,
    pub items: Vec<PlaylistItem>,
}

impl PlaylistFile {
    /// A playlist whose contents were not read: it refers only to itself.
    pub fn unparsed(path: PathBuf, title: String) -> Self {
        let items = vec![PlaylistItem {
            path: path.clone(),
            title: None,
        }];
        Self { path, title, items }
    }
}

/// A leaf of a library directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Media(MediaFile),
    Playlist(PlaylistFile),
}

impl Entry {
    pub fn is_playlist(&self) -> bool {
        matches!(self, Entry::Playlist(_))
    }
}

impl Playable for MediaFile {
    fn files(&self) -> Vec<&Path> {
        vec![self.path.as_path()]
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn nested(&self) -> &[Library] {
        &[]
    }
}

impl Playable for PlaylistFile {
    fn files(&self) -> Vec<&Path> {
        self.items.iter().map(|i| i.path.as_path()).collect()
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn nested(&self) -> &[Library] {
        &[]
    }
}

impl Playable for Entry {
    fn files(&self) -> Vec<&Path> {
        match self {
            Entry::Media(m) => m.files(),
            Entry::Playlist(p) => p.files(),
        }
    }

    fn title(&self) -> &str {
        match self {
            Entry::Media(m) => m.title(),
            Entry::Playlist(p) => p.title(),
        }
    }

    fn nested(&self) -> &[Library] {
        &[]
    }
}

/// A directory of playable media, loaded once and never refreshed.
///
/// Each subdirectory becomes a nested `Library` owned by its parent; there are
/// no back-references. Build one with [`Library::open`] or
/// [`OpenOptions::open`](super::OpenOptions::open).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    pub(crate) root: PathBuf,
    pub(crate) title: String,
    pub(crate) entries: Vec<Entry>,
    pub(crate) nested: Vec<Library>,
}

impl Library {
    pub(crate) fn empty(root: PathBuf) -> Self {
        let title = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root.display().to_string());
        Self {
            root,
            title,
            entries: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// The directory this node was loaded from, as it was given.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of the media files directly inside this directory.
    ///
    /// Playlists are left out so that queueing a directory never queues the
    /// playlist files themselves.
    pub fn files(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter_map(|e| match e {
                Entry::Media(m) => Some(m.path.as_path()),
                Entry::Playlist(_) => None,
            })
            .collect()
    }

    /// The base name of the root directory.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Libraries for the immediate subdirectories.
    pub fn nested(&self) -> &[Library] {
        &self.nested
    }

    /// Media files and playlists directly inside this directory, in listing
    /// order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Every library in this tree, depth first, starting with `self`.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Media files in this directory and every directory below it.
    pub fn all_files(&self) -> Vec<&Path> {
        self.walk().flat_map(Library::files).collect()
    }

    /// Look up a nested library by a `/`-separated path of titles relative to
    /// this one. An empty path returns `self`.
    pub fn find(&self, titles: &str) -> Option<&Library> {
        titles
            .split('/')
            .filter(|t| !t.is_empty())
            .try_fold(self, |lib, title| lib.nested.iter().find(|n| n.title == title))
    }
}

impl Playable for Library {
    fn files(&self) -> Vec<&Path> {
        Library::files(self)
    }

    fn title(&self) -> &str {
        Library::title(self)
    }

    fn nested(&self) -> &[Library] {
        Library::nested(self)
    }
}

/// Depth-first iterator returned by [`Library::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a Library>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a Library;

    fn next(&mut self) -> Option<Self::Item> {
        let lib = self.stack.pop()?;
        self.stack.extend(lib.nested.iter().rev());
        Some(lib)
    }
}
