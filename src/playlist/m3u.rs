use std::path::Path;

use tracing::trace;

use super::{ParsedPlaylist, PlaylistParser, base_dir, resolve_reference};
use crate::library::PlaylistItem;

/// Plain and extended M3U (`.m3u`, `.m3u8`).
///
/// Understands `#EXTINF:<seconds>,<title>` for per-entry titles and
/// `#PLAYLIST:<title>` for the playlist title. Every other `#` line is a
/// comment.
#[derive(Debug, Copy, Clone, Default)]
pub struct M3uParser;

impl PlaylistParser for M3uParser {
    fn parse(&self, path: &Path, contents: &str) -> ParsedPlaylist {
        let base = base_dir(path);
        let mut out = ParsedPlaylist::default();
        let mut pending_title: Option<String> = None;

        // A UTF-8 BOM is common in .m3u8 files written on Windows.
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(info) = line.strip_prefix("#EXTINF:") {
                pending_title = info
                    .split_once(',')
                    .map(|(_, t)| t.trim())
                    .filter(|t| !t.is_empty())
                    .map(str::to_string);
                continue;
            }
            if let Some(title) = line.strip_prefix("#PLAYLIST:") {
                let title = title.trim();
                if !title.is_empty() {
                    out.title = Some(title.to_string());
                }
                continue;
            }
            if line.starts_with('#') {
                continue;
            }

            match resolve_reference(base, line) {
                Some(p) => out.items.push(PlaylistItem {
                    path: p,
                    title: pending_title.take(),
                }),
                None => {
                    trace!(playlist = %path.display(), entry = line, "skipping non-local playlist entry");
                    pending_title = None;
                }
            }
        }

        out
    }
}
