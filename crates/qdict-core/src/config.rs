//! Configuration types for qdict.
//!
//! [`Config::load`] reads `~/.config/qdict/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::search::{EmptyQueryPolicy, SearchOptions};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[dictionary]
path        = "dict.json"
key_field   = "origin_name"
value_field = "trans_name"

[search]
empty_query = "match_all"
max_results = 0
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/qdict/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dictionary: DictionaryConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[dictionary]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DictionaryConfig {
    /// Dictionary file. Relative paths resolve against the directory holding
    /// the executable.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Object field whose value becomes the term.
    #[serde(default = "default_key_field")]
    pub key_field: String,
    /// Object field shown as the meaning of the term.
    #[serde(default = "default_value_field")]
    pub value_field: String,
}

fn default_path() -> PathBuf { PathBuf::from("dict.json") }
fn default_key_field() -> String { "origin_name".to_string() }
fn default_value_field() -> String { "trans_name".to_string() }

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            key_field: default_key_field(),
            value_field: default_value_field(),
        }
    }
}

impl DictionaryConfig {
    /// The dictionary path, joined onto `base` when relative.
    pub fn resolve_path(&self, base: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            base.join(&self.path)
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default)]
    pub empty_query: EmptyQueryPolicy,
    /// 0 means unlimited.
    #[serde(default)]
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            empty_query: EmptyQueryPolicy::default(),
            max_results: 0,
        }
    }
}

impl SearchConfig {
    pub fn options(&self) -> SearchOptions {
        let options = SearchOptions::default().empty_query(self.empty_query);
        match self.max_results {
            0 => options,
            n => options.limit(n),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/qdict/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())
                .with_context(|| format!("writing default config to {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote default config");
        }

        Self::load_from(&path)
    }

    /// Load a specific file, layered on top of the built-in defaults. A
    /// missing file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()
            .with_context(|| format!("reading config {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("qdict")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
