//! Settings schema and loader.
//!
//! Settings decide which library roots are opened and how they are loaded;
//! see [`Settings`] for where they are read from.

mod load;
mod schema;

pub use load::SettingsError;
pub use schema::*;
