//! Configuration primitives and loader for sort-select.
//!
//! Layers are applied in increasing precedence:
//! built-in defaults → `.sort-select.toml` in the working directory →
//! explicit override file. Command-line flags are applied by the caller.

use std::env;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = ".sort-select.toml";
pub const DEFAULT_SINK_PATH: &str = "data.txt";
pub const DEFAULT_SEQUENCE: [i32; 5] = [8, 2, 7, 11, 9];

/// Complete configuration resolved from defaults and on-disk overrides.
#[derive(Clone, Debug)]
pub struct Config {
    pub sink: SinkSettings,
    pub sequence: SequenceSettings,
    pub sources: ConfigSources,
}

/// Where the output sink lives and whether it receives the sorted values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SinkSettings {
    pub path: PathBuf,
    pub persist: bool,
}

/// The in-memory sequence sorted by each commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSettings {
    pub values: Vec<i32>,
}

/// Provenance information for resolved configuration.
#[derive(Clone, Debug)]
pub struct ConfigSources {
    pub working_directory: PathBuf,
    pub layers: Vec<ConfigSource>,
}

/// Specific layer of configuration (default/local/override).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigSource {
    pub kind: ConfigSourceKind,
    pub path: Option<PathBuf>,
    pub base_dir: PathBuf,
}

impl ConfigSource {
    fn default(base_dir: PathBuf) -> Self {
        ConfigSource {
            kind: ConfigSourceKind::Default,
            path: None,
            base_dir,
        }
    }

    fn for_file(kind: ConfigSourceKind, path: PathBuf) -> Self {
        let base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        ConfigSource {
            kind,
            path: Some(path),
            base_dir,
        }
    }

    pub fn describe(&self) -> String {
        match (&self.kind, &self.path) {
            (ConfigSourceKind::Default, _) => "built-in defaults".to_owned(),
            (kind, Some(path)) => format!("{} at {}", kind, path.display()),
            (kind, None) => kind.to_string(),
        }
    }
}

/// Kinds of configuration sources, ordered from lowest to highest precedence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigSourceKind {
    Default,
    Local,
    Override,
}

impl fmt::Display for ConfigSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ConfigSourceKind::Default => "defaults",
            ConfigSourceKind::Local => "local config",
            ConfigSourceKind::Override => "override config",
        };
        f.write_str(label)
    }
}

/// Loader options, typically supplied by the CLI layer.
#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub override_path: Option<PathBuf>,
    pub working_dir: Option<PathBuf>,
}

impl LoadOptions {
    pub fn with_override_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    pub fn with_working_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(path.into());
        self
    }
}

/// Errors surfaced while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to resolve working directory {}: {source}", .attempted.display())]
    WorkingDirectory {
        attempted: PathBuf,
        source: io::Error,
    },
    #[error("override config {} not found", .path.display())]
    OverrideNotFound { path: PathBuf },
    #[error("failed to read config {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("configuration validation failed: {message} ({})", .layer.describe())]
    Validation { message: String, layer: ConfigSource },
}

impl Config {
    /// Loads configuration using the precedence rules and returns typed settings.
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let working_dir = resolve_working_dir(options.working_dir)?;
        let override_path = options
            .override_path
            .map(|path| make_absolute(&path, &working_dir));

        if let Some(path) = &override_path {
            if !path.exists() {
                return Err(ConfigError::OverrideNotFound { path: path.clone() });
            }
        }

        let default_source = ConfigSource::default(working_dir.clone());
        let mut merged = PartialConfig::defaults(default_source.clone());
        let mut source_layers = vec![default_source];

        let local_config_path = working_dir.join(CONFIG_FILE_NAME);
        if local_config_path.exists() && Some(&local_config_path) != override_path.as_ref() {
            let source = ConfigSource::for_file(ConfigSourceKind::Local, local_config_path.clone());
            merged.merge(load_layer(&local_config_path, source.clone())?);
            source_layers.push(source);
        }

        if let Some(path) = override_path {
            let source = ConfigSource::for_file(ConfigSourceKind::Override, path.clone());
            merged.merge(load_layer(&path, source.clone())?);
            source_layers.push(source);
        }

        for layer in &source_layers {
            log::debug!("applied {}", layer.describe());
        }

        let (sink, sequence) = merged.finalize()?;
        Ok(Config {
            sink,
            sequence,
            sources: ConfigSources {
                working_directory: working_dir,
                layers: source_layers,
            },
        })
    }
}

fn resolve_working_dir(override_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    match override_dir {
        Some(path) => fs::canonicalize(&path).map_err(|source| ConfigError::WorkingDirectory {
            attempted: path,
            source,
        }),
        None => env::current_dir().map_err(|source| ConfigError::WorkingDirectory {
            attempted: PathBuf::from("."),
            source,
        }),
    }
}

fn make_absolute(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn load_layer(path: &Path, source: ConfigSource) -> Result<PartialConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.into(),
        source,
    })?;
    let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.into(),
        source,
    })?;
    Ok(raw.into_partial(source))
}

/// Value paired with the layer that supplied it.
#[derive(Clone, Debug)]
struct Located<T> {
    value: T,
    source: ConfigSource,
}

impl<T> Located<T> {
    fn new(value: T, source: ConfigSource) -> Self {
        Located { value, source }
    }
}

#[derive(Clone, Debug, Default)]
struct PartialConfig {
    sink_path: Option<Located<PathBuf>>,
    persist: Option<bool>,
    values: Option<Vec<i32>>,
}

impl PartialConfig {
    fn defaults(source: ConfigSource) -> Self {
        PartialConfig {
            sink_path: Some(Located::new(PathBuf::from(DEFAULT_SINK_PATH), source)),
            persist: Some(false),
            values: Some(DEFAULT_SEQUENCE.to_vec()),
        }
    }

    fn merge(&mut self, other: PartialConfig) {
        if other.sink_path.is_some() {
            self.sink_path = other.sink_path;
        }
        if other.persist.is_some() {
            self.persist = other.persist;
        }
        if other.values.is_some() {
            self.values = other.values;
        }
    }

    fn finalize(self) -> Result<(SinkSettings, SequenceSettings), ConfigError> {
        let path = match self.sink_path {
            Some(located) if located.value.as_os_str().is_empty() => {
                return Err(ConfigError::Validation {
                    message: "sink.path must not be empty".to_owned(),
                    layer: located.source,
                });
            }
            Some(located) => make_absolute(&located.value, &located.source.base_dir),
            None => PathBuf::from(DEFAULT_SINK_PATH),
        };

        let sink = SinkSettings {
            path,
            persist: self.persist.unwrap_or(false),
        };
        let sequence = SequenceSettings {
            values: self.values.unwrap_or_else(|| DEFAULT_SEQUENCE.to_vec()),
        };
        Ok((sink, sequence))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    sink: Option<RawSink>,
    #[serde(default)]
    sequence: Option<RawSequence>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSink {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    persist: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSequence {
    #[serde(default)]
    values: Option<Vec<i32>>,
}

impl RawConfig {
    fn into_partial(self, source: ConfigSource) -> PartialConfig {
        let (sink_path, persist) = match self.sink {
            Some(sink) => (
                sink.path.map(|path| Located::new(path, source.clone())),
                sink.persist,
            ),
            None => (None, None),
        };
        PartialConfig {
            sink_path,
            persist,
            values: self.sequence.and_then(|sequence| sequence.values),
        }
    }
}
