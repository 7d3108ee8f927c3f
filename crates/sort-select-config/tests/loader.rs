use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use sort_select_config::{
    Config, ConfigError, ConfigSourceKind, LoadOptions, CONFIG_FILE_NAME, DEFAULT_SEQUENCE,
};
use tempfile::TempDir;

fn write_file(path: impl AsRef<Path>, contents: &str) {
    fs::write(path, contents).expect("write config");
}

fn canonical(path: impl AsRef<Path>) -> PathBuf {
    fs::canonicalize(path).expect("canonicalize path")
}

#[test]
fn loads_defaults_when_no_files_present() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());

    let config = Config::load(LoadOptions::default().with_working_dir(working_dir.clone()))
        .expect("load defaults");

    assert_eq!(config.sink.path, working_dir.join("data.txt"));
    assert!(!config.sink.persist);
    assert_eq!(config.sequence.values, DEFAULT_SEQUENCE.to_vec());
    assert_eq!(config.sources.working_directory, working_dir);
    assert_eq!(config.sources.layers.len(), 1);
    assert_eq!(config.sources.layers[0].kind, ConfigSourceKind::Default);
}

#[test]
fn local_file_overrides_defaults() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    write_file(
        working_dir.join(CONFIG_FILE_NAME),
        r#"
        [sink]
        path = "out/sorted.txt"

        [sequence]
        values = [3, -1, 2]
        "#,
    );

    let config = Config::load(LoadOptions::default().with_working_dir(working_dir.clone()))
        .expect("load local");

    assert_eq!(config.sink.path, working_dir.join("out/sorted.txt"));
    assert!(!config.sink.persist);
    assert_eq!(config.sequence.values, vec![3, -1, 2]);
    assert_eq!(config.sources.layers.len(), 2);
    assert_eq!(config.sources.layers[1].kind, ConfigSourceKind::Local);
}

#[test]
fn override_takes_precedence_and_resolves_relative_to_its_directory() {
    let temp = TempDir::new().expect("tempdir");
    let working_dir = canonical(temp.path());
    let elsewhere = working_dir.join("profiles");
    fs::create_dir(&elsewhere).expect("create profiles dir");

    write_file(
        working_dir.join(CONFIG_FILE_NAME),
        r#"
        [sink]
        path = "local.txt"
        persist = false

        [sequence]
        values = [1, 2]
        "#,
    );
    write_file(
        elsewhere.join("ci.toml"),
        r#"
        [sink]
        path = "ci.txt"
        persist = true
        "#,
    );

    let config = Config::load(
        LoadOptions::default()
            .with_working_dir(working_dir.clone())
            .with_override_path("profiles/ci.toml"),
    )
    .expect("load override");

    assert_eq!(config.sink.path, elsewhere.join("ci.txt"));
    assert!(config.sink.persist);
    assert_eq!(config.sequence.values, vec![1, 2]);
    let kinds: Vec<_> = config.sources.layers.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ConfigSourceKind::Default,
            ConfigSourceKind::Local,
            ConfigSourceKind::Override
        ]
    );
}

#[test]
fn missing_override_is_reported() {
    let temp = TempDir::new().expect("tempdir");

    let err = Config::load(
        LoadOptions::default()
            .with_working_dir(temp.path())
            .with_override_path("nope.toml"),
    )
    .unwrap_err();

    assert!(matches!(err, ConfigError::OverrideNotFound { .. }));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let temp = TempDir::new().expect("tempdir");
    write_file(temp.path().join(CONFIG_FILE_NAME), "[sink\npath = 3");

    let err = Config::load(LoadOptions::default().with_working_dir(temp.path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = TempDir::new().expect("tempdir");
    write_file(
        temp.path().join(CONFIG_FILE_NAME),
        "[sink]\nformat = \"csv\"\n",
    );

    let err = Config::load(LoadOptions::default().with_working_dir(temp.path())).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn empty_sink_path_fails_validation() {
    let temp = TempDir::new().expect("tempdir");
    write_file(temp.path().join(CONFIG_FILE_NAME), "[sink]\npath = \"\"\n");

    let err = Config::load(LoadOptions::default().with_working_dir(temp.path())).unwrap_err();

    match err {
        ConfigError::Validation { layer, .. } => assert_eq!(layer.kind, ConfigSourceKind::Local),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_working_directory_is_reported() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("gone");

    let err = Config::load(LoadOptions::default().with_working_dir(missing)).unwrap_err();

    assert!(matches!(err, ConfigError::WorkingDirectory { .. }));
}
