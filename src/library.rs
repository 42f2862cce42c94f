//! In-memory trees of media libraries.
//!
//! A [`Library`] is one directory: the media files and playlists directly
//! inside it, plus a nested `Library` per subdirectory. The whole tree is read
//! once when it is opened and never touches the disk again, so a loaded tree
//! can be shared freely between readers.
//!
//! Files are classified purely by extension (the text after the first `.` of
//! the file name) against an [`ExtensionSets`]; anything that is neither media
//! nor playlist is ignored.

mod display;
mod error;
mod extensions;
mod model;
mod scan;

pub use error::{ErrorKind, LibraryError};
pub use extensions::{EntryKind, ExtensionSets, extension_of};
pub use model::*;
pub use scan::{DEFAULT_MAX_DEPTH, OpenOptions};
