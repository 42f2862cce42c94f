use std::collections::HashSet;

use super::error::LibraryError;

/// How a file is treated once its extension is known.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Media,
    Playlist,
}

/// Disjoint lookup sets for media and playlist extensions.
///
/// Extensions are stored without the leading dot and compared verbatim. The
/// empty string matches files whose name has no `.` at all.
#[derive(Debug, Clone)]
pub struct ExtensionSets {
    media: HashSet<String>,
    playlist: HashSet<String>,
}

impl ExtensionSets {
    /// Build the lookup sets, rejecting an empty media list and any extension
    /// that appears in both lists.
    pub fn new<M, P>(media: &[M], playlist: &[P]) -> Result<Self, LibraryError>
    where
        M: AsRef<str>,
        P: AsRef<str>,
    {
        if media.is_empty() {
            return Err(LibraryError::EmptyExtensionSet);
        }

        let media: HashSet<String> = media.iter().map(|e| e.as_ref().to_string()).collect();

        let mut pl = HashSet::with_capacity(playlist.len());
        for e in playlist {
            let e = e.as_ref();
            if media.contains(e) {
                return Err(LibraryError::ExtensionsOverlap(e.to_string()));
            }
            pl.insert(e.to_string());
        }

        Ok(Self {
            media,
            playlist: pl,
        })
    }

    pub fn classify(&self, ext: &str) -> Option<EntryKind> {
        if self.media.contains(ext) {
            Some(EntryKind::Media)
        } else if self.playlist.contains(ext) {
            Some(EntryKind::Playlist)
        } else {
            None
        }
    }

    pub fn is_media(&self, ext: &str) -> bool {
        self.media.contains(ext)
    }

    pub fn is_playlist(&self, ext: &str) -> bool {
        self.playlist.contains(ext)
    }
}

/// The extension of `file_name`: everything after the first `.`, or `""` when
/// the name has no dot.
///
/// `song.final.mp3` therefore has the extension `final.mp3`.
pub fn extension_of(file_name: &str) -> &str {
    file_name.split_once('.').map(|(_, ext)| ext).unwrap_or("")
}

/// The part of `file_name` before the first `.`, falling back to the whole name
/// for dotfiles such as `.m3u`.
pub(crate) fn stem_of(file_name: &str) -> &str {
    match file_name.split_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        Some(_) => file_name,
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::ErrorKind;

    #[test]
    fn extension_of_uses_text_after_first_dot() {
        assert_eq!(extension_of("a.mp3"), "mp3");
        assert_eq!(extension_of("song.final.mp3"), "final.mp3");
        assert_eq!(extension_of("radio"), "");
        assert_eq!(extension_of(".hidden"), "hidden");
        assert_eq!(extension_of("trailing."), "");
    }

    #[test]
    fn stem_of_falls_back_to_full_name() {
        assert_eq!(stem_of("mix.m3u"), "mix");
        assert_eq!(stem_of("radio"), "radio");
        assert_eq!(stem_of(".m3u"), ".m3u");
    }

    #[test]
    fn empty_media_list_is_rejected() {
        let none: [&str; 0] = [];
        let err = ExtensionSets::new(&none, &["m3u"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyExtensionSet);
    }

    #[test]
    fn overlapping_lists_are_rejected_naming_the_extension() {
        let err = ExtensionSets::new(&["mp3", "ogg"], &["m3u", "ogg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExtensionsOverlap);
        assert!(err.to_string().contains("\"ogg\""));
    }

    #[test]
    fn empty_playlist_list_means_no_playlists() {
        let none: [&str; 0] = [];
        let sets = ExtensionSets::new(&["mp3"], &none).unwrap();
        assert_eq!(sets.classify("mp3"), Some(EntryKind::Media));
        assert_eq!(sets.classify("m3u"), None);
    }

    #[test]
    fn empty_string_matches_extensionless_names() {
        let sets = ExtensionSets::new(&["", "flac"], &["pls"]).unwrap();
        assert!(sets.is_media(extension_of("radio")));
        assert!(sets.is_playlist(extension_of("stations.pls")));
        assert_eq!(sets.classify(extension_of("cover.png")), None);
    }

    #[test]
    fn lookups_are_case_sensitive() {
        let sets = ExtensionSets::new(&["mp3"], &["m3u"]).unwrap();
        assert_eq!(sets.classify("MP3"), None);
    }
}
