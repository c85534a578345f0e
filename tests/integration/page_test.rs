//! Integration tests for page manifests

use std::fs;

use segplay::page::Page;
use segplay::segment::PlayerConfig;
use tempfile::TempDir;

const TOML_MANIFEST: &str = r#"
title = "Lecture clips"

[[player]]
video_id = "intro"
start_time = 30
end_time = 90

[[player]]
video_id = "outro"
start_time = 120

[[player]]
video_id = "broken"
start_time = 60
end_time = 10
"#;

#[test]
fn toml_manifest_loads_every_placement() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.toml");
    fs::write(&path, TOML_MANIFEST).unwrap();

    let page = Page::load(&path).unwrap();
    assert_eq!(page.title.as_deref(), Some("Lecture clips"));
    assert_eq!(page.players.len(), 3);
    assert_eq!(page.players[1].end_secs(), None);
}

#[test]
fn manifest_placements_validate_individually() {
    let page = Page::from_toml_str(TOML_MANIFEST).unwrap();
    let results: Vec<bool> = page
        .players
        .iter()
        .map(|p| PlayerConfig::new(&p.video_id, p.start_secs(), p.end_secs()).is_ok())
        .collect();
    assert_eq!(results, vec![true, true, false]);
}

#[test]
fn json_manifest_is_detected_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("page.json");
    fs::write(
        &path,
        r#"{"player": [{"video_id": "abc", "start_time": 5, "end_time": 15, "duration": 40.0}]}"#,
    )
    .unwrap();

    let page = Page::load(&path).unwrap();
    assert!(page.title.is_none());
    assert_eq!(page.players[0].video_id, "abc");
    assert_eq!(page.players[0].start_secs(), 5.0);
    assert_eq!(page.players[0].duration, Some(40.0));
}

#[test]
fn missing_manifest_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    let err = Page::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.toml"));
}

#[test]
fn malformed_manifest_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[[player]\nvideo_id = ").unwrap();
    assert!(Page::load(&path).is_err());
}
