use std::fmt;

use super::model::{Entry, Library};

/// Debug dump of the tree.
///
/// Nested directories come first, each as a `[dir] -----<title>-----` line
/// followed by its own dump and a blank line. Entries follow: playlists as
/// `[playlist] <title>`, media files as the bare title. Not a stable format.
impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in &self.nested {
            writeln!(f, "[dir] -----{}-----", dir.title())?;
            writeln!(f, "{dir}")?;
        }

        for entry in &self.entries {
            match entry {
                Entry::Playlist(p) => writeln!(f, "[playlist] {}", p.title)?,
                Entry::Media(m) => writeln!(f, "{}", m.title)?,
            }
        }

        Ok(())
    }
}
