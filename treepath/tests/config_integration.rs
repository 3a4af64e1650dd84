//! Layout file integration tests.

mod common;

use std::env;
use std::fs;

use common::{segment, stream, video, HLS_YAML};
use serial_test::serial;
use tempfile::TempDir;
use treepath::config::{LayoutLoader, LAYOUT_FILE_NAME, MODE_ENV};
use treepath::{Error, RelativePathMode};

fn without_mode_env<T>(f: impl FnOnce() -> T) -> T {
    let saved = env::var(MODE_ENV).ok();
    env::remove_var(MODE_ENV);
    let out = f();
    if let Some(v) = saved {
        env::set_var(MODE_ENV, v);
    }
    out
}

#[test]
#[serial]
fn test_load_discovered_layout() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(LAYOUT_FILE_NAME), HLS_YAML).unwrap();
    let nested = temp_dir.path().join("site").join("assets");
    fs::create_dir_all(&nested).unwrap();

    let layout = without_mode_env(|| LayoutLoader::load(None, &nested)).unwrap();
    assert_eq!(layout.mode(), RelativePathMode::Url);
    assert_eq!(
        layout.path("manifest", &video(5)).unwrap(),
        "videos/5/master.m3u8"
    );
}

#[test]
#[serial]
fn test_load_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hls.yaml");
    fs::write(&path, HLS_YAML).unwrap();

    let layout = without_mode_env(|| LayoutLoader::load(Some(&path), temp_dir.path())).unwrap();
    assert_eq!(
        layout.path("variantStream.segment", &segment(1, 2, 3)).unwrap(),
        "videos/1/stream_2/segment_3.ts"
    );
    assert_eq!(
        layout
            .relative(("manifest", &video(1)), ("variantStream.playlist", &stream(1, 2)))
            .unwrap(),
        "stream_2/playlist.m3u8"
    );
}

#[test]
#[serial]
fn test_mode_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(LAYOUT_FILE_NAME);
    fs::write(&path, HLS_YAML).unwrap();

    let saved = env::var(MODE_ENV).ok();
    env::set_var(MODE_ENV, "fs");
    let layout = LayoutLoader::load(Some(&path), temp_dir.path());
    env::set_var(MODE_ENV, "bogus");
    let invalid = LayoutLoader::load(Some(&path), temp_dir.path());
    match saved {
        Some(v) => env::set_var(MODE_ENV, v),
        None => env::remove_var(MODE_ENV),
    }

    let layout = layout.unwrap();
    assert_eq!(layout.mode(), RelativePathMode::Fs);
    assert_eq!(
        layout
            .relative(("manifest", &video(1)), ("variantStream.playlist", &stream(1, 2)))
            .unwrap(),
        "../stream_2/playlist.m3u8"
    );
    assert!(matches!(invalid.unwrap_err(), Error::Validation { .. }));
}

#[test]
fn test_missing_explicit_path() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.yaml");
    let err = LayoutLoader::load(Some(&path), temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::LayoutNotFound { .. }));
}

#[test]
fn test_malformed_layout() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(LAYOUT_FILE_NAME);
    fs::write(&path, "root:\n  path: out\n  children: [a, b]\n").unwrap();

    let err = LayoutLoader::load_file(&path).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_invalid_template_in_file() {
    let config = LayoutLoader::load_str("root:\n  path: \"videos/{video id}\"\n").unwrap();
    assert!(config.into_layout().unwrap_err().is_construction_error());
}

#[test]
fn test_yaml_round_trip_preserves_layout() {
    let config = LayoutLoader::load_str(HLS_YAML).unwrap();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let reparsed = LayoutLoader::load_str(&yaml).unwrap();
    assert_eq!(reparsed, config);

    let a = config.into_layout().unwrap();
    let b = reparsed.into_layout().unwrap();
    assert_eq!(a.schema(), b.schema());
}
