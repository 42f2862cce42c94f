use super::*;
use std::path::{Path, PathBuf};

fn paths(parsed: &ParsedPlaylist) -> Vec<PathBuf> {
    parsed.items.iter().map(|i| i.path.clone()).collect()
}

#[test]
fn m3u_resolves_relative_entries_against_playlist_dir() {
    let parsed = M3uParser.parse(
        Path::new("/music/album/list.m3u"),
        "01 intro.mp3\n\n/abs/other.mp3\nsub/02.ogg\n",
    );
    assert_eq!(
        paths(&parsed),
        vec![
            PathBuf::from("/music/album/01 intro.mp3"),
            PathBuf::from("/abs/other.mp3"),
            PathBuf::from("/music/album/sub/02.ogg"),
        ]
    );
    assert_eq!(parsed.title, None);
}

#[test]
fn m3u_extended_titles_apply_to_the_next_entry_only() {
    let parsed = M3uParser.parse(
        Path::new("/m/l.m3u8"),
        "\u{feff}#EXTM3U\n#PLAYLIST:Road Trip\n#EXTINF:123,Artist - Song\nsong.mp3\nplain.mp3\n",
    );
    assert_eq!(parsed.title.as_deref(), Some("Road Trip"));
    assert_eq!(parsed.items.len(), 2);
    assert_eq!(parsed.items[0].title.as_deref(), Some("Artist - Song"));
    assert_eq!(parsed.items[1].title, None);
}

#[test]
fn m3u_skips_remote_urls_and_strips_file_scheme() {
    let parsed = M3uParser.parse(
        Path::new("/m/l.m3u"),
        "#EXTINF:-1,Stream\nhttp://radio.example/stream\nfile:///m/local.flac\n",
    );
    assert_eq!(paths(&parsed), vec![PathBuf::from("/m/local.flac")]);
    // The stream's title must not leak onto the following entry.
    assert_eq!(parsed.items[0].title, None);
}

#[test]
fn pls_orders_by_entry_number_and_pairs_titles() {
    let parsed = PlsParser.parse(
        Path::new("/m/set.pls"),
        "[playlist]\nFile2=b.mp3\nTitle2=Second\nFile1=a.mp3\nTitle9=orphan\nNumberOfEntries=2\nVersion=2\n",
    );
    assert_eq!(
        paths(&parsed),
        vec![PathBuf::from("/m/a.mp3"), PathBuf::from("/m/b.mp3")]
    );
    assert_eq!(parsed.items[0].title, None);
    assert_eq!(parsed.items[1].title.as_deref(), Some("Second"));
}

#[test]
fn registry_standard_covers_common_formats() {
    let reg = ParserRegistry::standard();
    assert!(reg.get("m3u").is_some());
    assert!(reg.get("m3u8").is_some());
    assert!(reg.get("pls").is_some());
    assert!(reg.get("xspf").is_none());
    assert!(ParserRegistry::default().is_empty());
}

#[test]
fn registry_accepts_custom_parsers() {
    struct Single;
    impl PlaylistParser for Single {
        fn parse(&self, path: &Path, _contents: &str) -> ParsedPlaylist {
            ParsedPlaylist {
                title: Some("custom".into()),
                items: vec![crate::library::PlaylistItem {
                    path: path.to_path_buf(),
                    title: None,
                }],
            }
        }
    }

    let mut reg = ParserRegistry::default();
    reg.register("lst", Single);
    let parsed = reg.get("lst").unwrap().parse(Path::new("/x.lst"), "");
    assert_eq!(parsed.title.as_deref(), Some("custom"));
    assert_eq!(format!("{reg:?}"), "{\"lst\"}");
}
