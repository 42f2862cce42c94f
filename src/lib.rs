//! Browsable, in-memory trees of on-disk media libraries.
//!
//! Open a directory with [`Library::open`] (or [`OpenOptions`] for more
//! control) and browse the result through [`Playable`] without going back to
//! disk. A [`Catalog`] holds the libraries of every configured root.

pub mod catalog;
pub mod config;
pub mod library;
pub mod playlist;

pub use catalog::{Catalog, CatalogError};
pub use library::{
    Entry, ErrorKind, ExtensionSets, Library, LibraryError, MediaFile, OpenOptions, Playable,
    PlaylistFile,
};
