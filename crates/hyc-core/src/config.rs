//! Configuration types for hyc.
//!
//! [`Settings::load`] layers the built-in defaults, the user file at
//! `~/.config/hyc/config.toml` (if present) and an explicit `--config` file.
//! [`Settings::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).
//!
//! Settings hold raw, unvalidated values. [`FilterConfig`] is the validated
//! form consumed by the filtering stage.

use crate::error::ClusterError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[filter]
min_depth = 1
min_size  = 1
# max_size is unbounded unless set

[input]
mode = "whitespace"
case = "preserve"

[expansion]
include_own_senses = false

[report]
format = "text"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application settings.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub filter: FilterSettings,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub expansion: ExpansionConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// `[filter]` section. Signed so that negative values reach validation and
/// are reported by parameter name.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    #[serde(default = "default_min_depth")]
    pub min_depth: i64,
    #[serde(default = "default_min_size")]
    pub min_size: i64,
    #[serde(default)]
    pub max_size: Option<i64>,
}

fn default_min_depth() -> i64 { 1 }
fn default_min_size() -> i64 { 1 }

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            min_depth: default_min_depth(),
            min_size: default_min_size(),
            max_size: None,
        }
    }
}

/// How raw input text is split into words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Every whitespace-separated token is a word.
    #[default]
    Whitespace,
    /// Every non-blank line is one word or phrase.
    Line,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseFolding {
    #[default]
    Preserve,
    Lower,
}

/// `[input]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct InputConfig {
    #[serde(default)]
    pub mode: InputMode,
    #[serde(default)]
    pub case: CaseFolding,
}

/// `[expansion]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ExpansionConfig {
    /// Treat each sense of a word as a cluster candidate alongside its
    /// ancestors.
    #[serde(default)]
    pub include_own_senses: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// `[report]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Settings {
    /// Load the user config file and then `explicit` (if given), layered on
    /// top of the built-in defaults. A missing user file is fine; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_layers(&config_path(), explicit)
    }

    /// `load` with the user file location given explicitly.
    fn load_layers(user: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(user).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder.build()?.try_deserialize().map_err(Into::into)
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

    pub fn filter_config(&self) -> Result<FilterConfig, ClusterError> {
        FilterConfig::try_from(&self.filter)
    }
}

// ---------------------------------------------------------------------------
// Validated filter parameters
// ---------------------------------------------------------------------------

/// Validated filter parameters.
///
/// A cluster survives filtering iff `depth >= min_depth` and
/// `min_size <= |members| <= max_size`. `max_size = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterConfig {
    pub min_depth: u32,
    pub min_size: usize,
    pub max_size: Option<usize>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_depth: 1,
            min_size: 1,
            max_size: None,
        }
    }
}

impl FilterConfig {
    pub fn new(
        min_depth: u32,
        min_size: usize,
        max_size: Option<usize>,
    ) -> Result<Self, ClusterError> {
        let cfg = Self {
            min_depth,
            min_size,
            max_size,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ClusterError> {
        if self.min_size < 1 {
            return Err(ClusterError::invalid("min_size", "must be at least 1"));
        }
        if let Some(max) = self.max_size {
            if self.min_size > max {
                return Err(ClusterError::invalid(
                    "max_size",
                    format!("{max} is smaller than min_size {}", self.min_size),
                ));
            }
        }
        Ok(())
    }

    /// Size half of the retention predicate.
    pub fn admits_size(&self, size: usize) -> bool {
        size >= self.min_size && self.max_size.is_none_or(|max| size <= max)
    }

    pub fn admits_depth(&self, depth: u32) -> bool {
        depth >= self.min_depth
    }
}

impl TryFrom<&FilterSettings> for FilterConfig {
    type Error = ClusterError;

    fn try_from(raw: &FilterSettings) -> Result<Self, Self::Error> {
        let min_depth = u32::try_from(raw.min_depth).map_err(|_| {
            ClusterError::invalid("min_depth", format!("{} is not a non-negative depth", raw.min_depth))
        })?;
        let min_size = usize::try_from(raw.min_size)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| {
                ClusterError::invalid("min_size", format!("{} is not a positive size", raw.min_size))
            })?;
        let max_size = raw
            .max_size
            .map(|max| {
                usize::try_from(max)
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or_else(|| {
                        ClusterError::invalid("max_size", format!("{max} is not a positive size"))
                    })
            })
            .transpose()?;

        FilterConfig::new(min_depth, min_size, max_size)
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
        .join("hyc")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
