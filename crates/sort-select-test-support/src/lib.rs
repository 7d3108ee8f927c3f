//! Shared test harness utilities for sort-select crates.

use std::fs;
use std::path::Path;

use sort_select_config::{Config, LoadOptions, CONFIG_FILE_NAME};
use tempfile::TempDir;

/// The sequence every scenario starts from.
pub const FIXTURE: [i32; 5] = [8, 2, 7, 11, 9];

/// `FIXTURE` in sorted order.
pub const SORTED_FIXTURE: [i32; 5] = [2, 7, 8, 9, 11];

/// Scratch directory used as the working directory of a run.
pub fn workspace() -> TempDir {
    TempDir::new().expect("create scratch workspace")
}

/// Writes a `.sort-select.toml` into `dir`.
pub fn write_config(dir: &Path, contents: &str) {
    fs::write(dir.join(CONFIG_FILE_NAME), contents).expect("write config");
}

/// Loads configuration rooted at `dir`.
pub fn test_config(dir: &Path) -> Config {
    Config::load(LoadOptions::default().with_working_dir(dir)).expect("load test config")
}

/// Renders sorted values the way the diagnostics channel prints them.
pub fn sorted_report(values: &[i32]) -> String {
    let mut out = String::from("Sorted array:\n");
    for value in values {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}
