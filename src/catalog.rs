//! The set of libraries a service plays from.
//!
//! A [`Catalog`] is opened once at startup from [`LibrarySettings`] and handed
//! to whatever serves playback requests. It owns every loaded tree, and its
//! lifetime is that of its owner: there is no global library state.

use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::config::LibrarySettings;
use crate::library::{ExtensionSets, Library, LibraryError, OpenOptions};
use crate::playlist::ParserRegistry;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no library roots configured")]
    NoRoots,

    #[error(transparent)]
    Library(#[from] LibraryError),
}

/// Every configured library, loaded and ready to browse.
#[derive(Debug, Clone)]
pub struct Catalog {
    libraries: Vec<Library>,
}

impl From<&LibrarySettings> for OpenOptions {
    fn from(settings: &LibrarySettings) -> Self {
        Self {
            follow_links: settings.follow_links,
            include_hidden: settings.include_hidden,
            max_depth: Some(settings.max_depth),
            metadata_titles: settings.metadata_titles,
            playlists: if settings.parse_playlists {
                ParserRegistry::standard()
            } else {
                ParserRegistry::default()
            },
        }
    }
}

impl Catalog {
    /// Open every root in `settings.roots`, in order.
    ///
    /// The first root that fails to load aborts the whole catalog.
    pub fn open(settings: &LibrarySettings) -> Result<Self, CatalogError> {
        let sets = ExtensionSets::new(
            settings.media_extensions.as_slice(),
            settings.playlist_extensions.as_slice(),
        )?;
        Self::open_roots(&settings.roots, &sets, &OpenOptions::from(settings))
    }

    pub fn open_roots(
        roots: &[PathBuf],
        sets: &ExtensionSets,
        opts: &OpenOptions,
    ) -> Result<Self, CatalogError> {
        if roots.is_empty() {
            return Err(CatalogError::NoRoots);
        }

        let mut libraries = Vec::with_capacity(roots.len());
        for root in roots {
            let lib = opts.open(root, sets)?;
            info!(
                root = %root.display(),
                directories = lib.walk().count(),
                files = lib.all_files().len(),
                "opened library"
            );
            libraries.push(lib);
        }

        Ok(Self { libraries })
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Resolve `Title/Nested/Title` to a library: the first segment picks a
    /// root library by title, the rest walks its nested libraries.
    pub fn find(&self, path: &str) -> Option<&Library> {
        let path = path.trim_matches('/');
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        self.libraries
            .iter()
            .filter(|lib| lib.title() == head)
            .find_map(|lib| lib.find(rest))
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ErrorKind;
    use std::fs;
    use tempfile::tempdir;

    fn settings(roots: Vec<PathBuf>) -> LibrarySettings {
        LibrarySettings {
            roots,
            ..LibrarySettings::default()
        }
    }

    #[test]
    fn opens_every_root_in_order() {
        let a = tempdir().unwrap();
        let b = tempdir().unwrap();
        fs::write(a.path().join("one.mp3"), b"x").unwrap();
        fs::create_dir_all(b.path().join("Album")).unwrap();
        fs::write(b.path().join("Album").join("two.flac"), b"x").unwrap();

        let catalog =
            Catalog::open(&settings(vec![a.path().to_path_buf(), b.path().to_path_buf()])).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.libraries()[0].root(), a.path());
        assert_eq!(catalog.libraries()[1].root(), b.path());

        let b_title = catalog.libraries()[1].title().to_string();
        let album = catalog.find(&format!("{b_title}/Album")).unwrap();
        assert_eq!(album.files().len(), 1);
        assert!(catalog.find("nope").is_none());
    }

    #[test]
    fn no_roots_is_an_error() {
        let err = Catalog::open(&settings(Vec::new())).unwrap_err();
        assert!(matches!(err, CatalogError::NoRoots));
    }

    #[test]
    fn first_failing_root_aborts() {
        let good = tempdir().unwrap();
        fs::write(good.path().join("one.mp3"), b"x").unwrap();
        let empty = tempdir().unwrap();

        let err = Catalog::open(&settings(vec![
            good.path().to_path_buf(),
            empty.path().to_path_buf(),
        ]))
        .unwrap_err();
        let CatalogError::Library(err) = err else {
            panic!("expected a library error");
        };
        assert_eq!(err.kind(), ErrorKind::EmptyLibrary);
    }

    #[test]
    fn configured_max_depth_bounds_the_walk() {
        let dir = tempdir().unwrap();
        let deep = dir.path().join("a").join("b");
        fs::create_dir_all(&deep).unwrap();
        fs::write(deep.join("one.mp3"), b"x").unwrap();

        let mut s = settings(vec![dir.path().to_path_buf()]);
        assert_eq!(OpenOptions::from(&s).max_depth, Some(s.max_depth));

        s.max_depth = 1;
        let CatalogError::Library(err) = Catalog::open(&s).unwrap_err() else {
            panic!("expected a library error");
        };
        assert_eq!(err.kind(), ErrorKind::TraversalLimitExceeded);

        s.max_depth = 2;
        assert_eq!(Catalog::open(&s).unwrap().libraries()[0].all_files().len(), 1);
    }

    #[test]
    fn settings_control_playlist_parsing() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.mp3"), b"x").unwrap();
        fs::write(dir.path().join("list.m3u"), "a.mp3\na.mp3\n").unwrap();

        let mut s = settings(vec![dir.path().to_path_buf()]);
        let parsed = Catalog::open(&s).unwrap();
        let playlist_files = |c: &Catalog| {
            c.libraries()[0]
                .entries()
                .iter()
                .find(|e| e.is_playlist())
                .map(|e| crate::library::Playable::files(e).len())
        };
        assert_eq!(playlist_files(&parsed), Some(2));

        s.parse_playlists = false;
        let stubbed = Catalog::open(&s).unwrap();
        assert_eq!(playlist_files(&stubbed), Some(1));
    }
}
