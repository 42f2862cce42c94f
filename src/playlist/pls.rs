use std::collections::BTreeMap;
use std::path::Path;

use tracing::trace;

use super::{ParsedPlaylist, PlaylistParser, base_dir, resolve_reference};
use crate::library::PlaylistItem;

/// INI-style PLS playlists (`File1=`, `Title1=`, ...).
///
/// Entries are ordered by their number, not by where they appear in the file.
/// A `Title` with no matching `File` is ignored.
#[derive(Debug, Copy, Clone, Default)]
pub struct PlsParser;

#[derive(Default)]
struct Slot<'a> {
    file: Option<&'a str>,
    title: Option<&'a str>,
}

impl PlaylistParser for PlsParser {
    fn parse(&self, path: &Path, contents: &str) -> ParsedPlaylist {
        let base = base_dir(path);
        let mut slots: BTreeMap<u32, Slot<'_>> = BTreeMap::new();

        for line in contents.lines() {
            let Some((key, value)) = line.trim().split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if let Some(n) = numbered(key, "file") {
                slots.entry(n).or_default().file = Some(value);
            } else if let Some(n) = numbered(key, "title") {
                slots.entry(n).or_default().title = Some(value);
            }
        }

        let items = slots
            .into_values()
            .filter_map(|slot| {
                let file = slot.file?;
                let Some(p) = resolve_reference(base, file) else {
                    trace!(playlist = %path.display(), entry = file, "skipping non-local playlist entry");
                    return None;
                };
                Some(PlaylistItem {
                    path: p,
                    title: slot.title.filter(|t| !t.is_empty()).map(str::to_string),
                })
            })
            .collect();

        ParsedPlaylist { title: None, items }
    }
}

/// Parse keys like `File12` into `12`, matching the prefix case-insensitively.
fn numbered(key: &str, prefix: &str) -> Option<u32> {
    if key.len() <= prefix.len() || !key.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, tail) = key.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(prefix) {
        return None;
    }
    tail.parse().ok()
}
