//! Tests for the config module

use super::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[test]
fn test_missing_site_config_is_default() {
    let dir = tempdir().unwrap();
    let config = load_site_config(&dir.path().join("site.yaml")).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_empty_site_config_is_default() {
    let config = parse_site_config("", Path::new("site.yaml")).unwrap();
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn test_recognized_keys_and_extra() {
    let yaml = r#"
title: My Blog
ignore-patterns: ["*.swp", "drafts/old"]
markdown-extensions: [tables, toc]
markdown-extensions-configurations:
  toc:
    separator: "_"
copy-paths: [assets, favicon.ico]
"#;
    let config = parse_site_config(yaml, Path::new("site.yaml")).unwrap();

    assert_eq!(config.ignore_patterns, vec!["*.swp", "drafts/old"]);
    assert_eq!(config.markdown_extensions, vec!["tables", "toc"]);
    assert!(config
        .markdown_extensions_configurations
        .get("toc")
        .is_some());
    assert_eq!(config.copy_paths, vec!["assets", "favicon.ico"]);
    assert_eq!(
        config.extra.get("title").and_then(|v| v.as_str()),
        Some("My Blog")
    );
    assert!(config.extra.get("copy-paths").is_none());
}

#[test]
fn test_malformed_site_config_is_invalid() {
    let err = parse_site_config("copy-paths: {not: a list}", Path::new("site.yaml")).unwrap_err();
    assert!(matches!(err, crate::BloggerError::InvalidConfig { .. }));

    let err = parse_site_config("- just\n- a list", Path::new("site.yaml")).unwrap_err();
    assert!(matches!(err, crate::BloggerError::InvalidConfig { .. }));
}

#[test]
fn test_site_config_reloads_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("site.yaml");
    fs::write(&path, "copy-paths: [a]").unwrap();
    assert_eq!(load_site_config(&path).unwrap().copy_paths, vec!["a"]);

    fs::write(&path, "copy-paths: [a, b]").unwrap();
    assert_eq!(load_site_config(&path).unwrap().copy_paths, vec!["a", "b"]);
}

#[test]
fn test_invalid_ignore_glob_is_config_error() {
    let config = SiteConfig {
        ignore_patterns: vec!["a/**/[".to_string()],
        ..SiteConfig::default()
    };
    let result = config.ignore_matcher(Path::new("/site"), Path::new("/site/site.yaml"));
    assert!(matches!(
        result,
        Err(crate::BloggerError::InvalidConfig { .. })
    ));
}

#[test]
fn test_layout_paths() {
    let layout = ProjectLayout::with_out_dir("/blog", "/tmp/out");
    assert_eq!(layout.templates, Path::new("/blog/templates"));
    assert_eq!(layout.posts, Path::new("/blog/posts"));
    assert_eq!(layout.drafts, Path::new("/blog/drafts"));
    assert_eq!(layout.site_config, Path::new("/blog/site.yaml"));
    assert!(!layout.out_dir_in_project());

    let inside = ProjectLayout::with_out_dir("/blog", "/blog/_site");
    assert!(inside.out_dir_in_project());
}

#[test]
fn test_extension_manifest_lookup() {
    let dir = tempdir().unwrap();
    let layout = ProjectLayout::with_out_dir(dir.path(), dir.path().join("out"));
    assert_eq!(layout.extension_manifest(), None);

    fs::create_dir(dir.path().join("extensions")).unwrap();
    fs::write(dir.path().join("extensions/extensions.toml"), "").unwrap();
    assert_eq!(
        layout.extension_manifest(),
        Some(dir.path().join("extensions/extensions.toml"))
    );

    fs::write(dir.path().join("extensions.toml"), "").unwrap();
    assert_eq!(
        layout.extension_manifest(),
        Some(dir.path().join("extensions.toml"))
    );
}

#[test]
fn test_watch_options_defaults() {
    let options = WatchOptions::default();
    assert_eq!(options.port, DEFAULT_PORT);
    assert_eq!(options.interval, DEFAULT_POLL_INTERVAL);
    assert!(options.serve);
    assert!(!options.compile.include_drafts);
}
