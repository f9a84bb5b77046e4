use super::Config;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_empty_file_gives_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.file_extensions, vec!["md", "mdx"]);
    assert_eq!(config.renderer().max_depth, 5);
}

#[test]
fn test_partial_file_overrides() {
    let config = Config::parse("max_depth = 3\nband_bottom = 0.5\nmin_level = 2\n").unwrap();
    assert_eq!(config.max_depth, 3);
    assert_eq!(config.outline_options().min_level, 2);
    assert_eq!(config.outline_options().max_level, 6);
    let band = config.band().unwrap();
    assert!((band.bottom() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_band_rejected() {
    let config = Config::parse("band_top = 0.6\nband_bottom = 0.6\n").unwrap();
    assert!(config.band().is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("marginalia.toml");
    fs::write(&path, "file_extensions = [\"markdown\"]\n").unwrap();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.file_extensions, vec!["markdown"]);
    assert!(Config::load_from(&dir.path().join("absent.toml")).is_err());
}
