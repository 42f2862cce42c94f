use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use lofty::prelude::*;
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

use crate::playlist::ParserRegistry;

use super::error::LibraryError;
use super::extensions::{EntryKind, ExtensionSets, extension_of, stem_of};
use super::model::{Entry, Library, MediaFile, PlaylistFile};

/// Nesting limit used unless configured otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// How a library tree is loaded from disk.
#[derive(Debug, Clone)]
pub struct OpenOptions {
    /// Follow symbolic links to files and directories.
    pub follow_links: bool,
    /// Load dotfiles and dot-directories.
    pub include_hidden: bool,
    /// Deepest allowed subdirectory nesting below the root; `None` for no limit.
    pub max_depth: Option<usize>,
    /// Title media files from their tags instead of their file names.
    pub metadata_titles: bool,
    /// Parsers for playlist contents. Playlists whose extension has no parser
    /// refer only to themselves.
    pub playlists: ParserRegistry,
}

impl Default for OpenOptions {
    fn default() -> Self {
        Self {
            follow_links: true,
            include_hidden: true,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            metadata_titles: false,
            playlists: ParserRegistry::default(),
        }
    }
}

impl Library {
    /// Load the library rooted at `root` with default options.
    ///
    /// `media` lists the extensions (without the dot) of playable files, and
    /// must not be empty; `playlist` lists playlist extensions and must not
    /// share any entry with `media`. The empty string matches files with no
    /// extension. Both lists are checked before the disk is touched.
    pub fn open<M, P>(
        root: impl AsRef<Path>,
        media: &[M],
        playlist: &[P],
    ) -> Result<Self, LibraryError>
    where
        M: AsRef<str>,
        P: AsRef<str>,
    {
        let root = root.as_ref();
        let sets = ExtensionSets::new(media, playlist)
            .map_err(|e| LibraryError::in_library(root, e))?;
        OpenOptions::default().open(root, &sets)
    }
}

impl OpenOptions {
    /// Load the whole tree under `root`.
    ///
    /// Either every directory loads or the first failure is returned, wrapped
    /// once per directory between `root` and the one that failed.
    pub fn open(
        &self,
        root: impl AsRef<Path>,
        sets: &ExtensionSets,
    ) -> Result<Library, LibraryError> {
        let mut loader = Loader {
            opts: self,
            sets,
            ancestors: HashSet::new(),
        };
        loader.load(root.as_ref(), 0)
    }
}

struct Loader<'a> {
    opts: &'a OpenOptions,
    sets: &'a ExtensionSets,
    /// Canonical paths of the directories currently being loaded.
    ancestors: HashSet<PathBuf>,
}

impl Loader<'_> {
    fn load(&mut self, dir: &Path, depth: usize) -> Result<Library, LibraryError> {
        self.load_guarded(dir, depth)
            .map_err(|e| LibraryError::in_library(dir, e))
    }

    fn load_guarded(&mut self, dir: &Path, depth: usize) -> Result<Library, LibraryError> {
        if let Some(max_depth) = self.opts.max_depth {
            if depth > max_depth {
                return Err(LibraryError::TraversalLimitExceeded { max_depth });
            }
        }

        let meta = fs::metadata(dir).map_err(LibraryError::Open)?;
        if !meta.is_dir() {
            return Err(LibraryError::Open(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", dir.display()),
            )));
        }

        let canonical = fs::canonicalize(dir).map_err(LibraryError::Open)?;
        if !self.ancestors.insert(canonical.clone()) {
            return Err(LibraryError::DirectoryCycle(canonical));
        }
        let result = self.load_entries(dir, depth);
        self.ancestors.remove(&canonical);
        result
    }

    fn load_entries(&mut self, dir: &Path, depth: usize) -> Result<Library, LibraryError> {
        let (listing, seen) = self.list(dir)?;
        if seen == 0 {
            return Err(LibraryError::EmptyLibrary);
        }

        debug!(dir = %dir.display(), entries = seen, "loading library directory");

        let mut lib = Library::empty(dir.to_path_buf());
        for entry in listing {
            let name = entry.file_name().to_string_lossy();
            if !self.opts.include_hidden && name.starts_with('.') {
                trace!(path = %entry.path().display(), "skipping hidden entry");
                continue;
            }

            if entry.file_type().is_dir() {
                let nested = self.load(entry.path(), depth + 1)?;
                lib.nested.push(nested);
                continue;
            }

            let ext = extension_of(&name);
            match self.sets.classify(ext) {
                Some(EntryKind::Media) => {
                    let title = self.media_title(entry.path(), &name);
                    lib.entries.push(Entry::Media(MediaFile {
                        path: entry.path().to_path_buf(),
                        title,
                    }));
                }
                Some(EntryKind::Playlist) => {
                    let playlist = self.load_playlist(entry.path(), &name, ext)?;
                    lib.entries.push(Entry::Playlist(playlist));
                }
                None => trace!(path = %entry.path().display(), "skipping unrecognised file"),
            }
        }

        Ok(lib)
    }

    /// The immediate children of `dir` in the order the OS returns them, plus
    /// how many entries the directory holds including skipped broken links.
    fn list(&self, dir: &Path) -> Result<(Vec<DirEntry>, usize), LibraryError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(self.opts.follow_links);

        let mut listing = Vec::new();
        let mut seen = 0;
        for entry in walker {
            match entry {
                Ok(e) => {
                    seen += 1;
                    listing.push(e);
                }
                Err(err) if is_dangling_link(&err) => {
                    seen += 1;
                    warn!(path = ?err.path(), "skipping broken symbolic link");
                }
                Err(err) if err.loop_ancestor().is_some() => {
                    let ancestor = err.loop_ancestor().unwrap_or(dir);
                    return Err(LibraryError::DirectoryCycle(ancestor.to_path_buf()));
                }
                Err(err) => return Err(LibraryError::Open(err.into())),
            }
        }
        Ok((listing, seen))
    }

    fn media_title(&self, path: &Path, file_name: &str) -> String {
        if self.opts.metadata_titles {
            match tag_title(path) {
                Ok(Some(title)) => return title,
                Ok(None) => {}
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to read tags, using file name as title")
                }
            }
        }
        file_name.to_string()
    }

    fn load_playlist(
        &self,
        path: &Path,
        file_name: &str,
        ext: &str,
    ) -> Result<PlaylistFile, LibraryError> {
        let title = stem_of(file_name).to_string();

        let Some(parser) = self.opts.playlists.get(ext) else {
            return Ok(PlaylistFile::unparsed(path.to_path_buf(), title));
        };

        let bytes = fs::read(path).map_err(|source| LibraryError::Playlist {
            path: path.to_path_buf(),
            source,
        })?;
        let parsed = parser.parse(path, &String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), items = parsed.items.len(), "parsed playlist");

        Ok(PlaylistFile {
            path: path.to_path_buf(),
            title: parsed.title.unwrap_or(title),
            items: parsed.items,
        })
    }
}

/// A link whose target is gone is noise in a media directory, not a reason to
/// reject the whole library.
fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() > 0
        && err
            .path()
            .and_then(|p| fs::symlink_metadata(p).ok())
            .is_some_and(|m| m.file_type().is_symlink())
        && err
            .io_error()
            .is_some_and(|e| e.kind() == io::ErrorKind::NotFound)
}

/// The title tag of a media file, if it has a non-blank one.
fn tag_title(path: &Path) -> Result<Option<String>, lofty::error::LoftyError> {
    let tagged = lofty::read_from_path(path)?;
    let title = tagged
        .primary_tag()
        .or_else(|| tagged.first_tag())
        .and_then(|tag| tag.title())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());
    Ok(title)
}
