//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ArborResult;
use crate::tree::{NodeInspector, StoreOptions, HELP_MSG, SYNTHETIC_ID_PREFIX};

use super::loader::{self, ConfigWarning};

/// Synthetic id configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdsConfig {
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

fn default_prefix() -> String {
    SYNTHETIC_ID_PREFIX.to_string()
}

/// Filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Open every path to a match after filtering
    #[serde(default = "default_true")]
    pub expand_matches: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expand_matches: true,
        }
    }
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Inspector JSON indent width
    #[serde(default = "default_indent")]
    pub indent: usize,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Show node ids next to labels
    #[serde(default)]
    pub show_ids: bool,

    #[serde(default = "default_help_message")]
    pub help_message: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            unicode: true,
            show_ids: false,
            help_message: default_help_message(),
        }
    }
}

fn default_indent() -> usize {
    4
}

fn default_help_message() -> String {
    HELP_MSG.to_string()
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ids: IdsConfig,

    #[serde(default)]
    pub filter: FilterConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArborResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArborResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (ARBOR_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Store options derived from this config
    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            id_prefix: self.ids.prefix.clone(),
            expand_matches: self.filter.expand_matches,
        }
    }

    /// Inspector derived from this config
    pub fn inspector(&self) -> NodeInspector {
        NodeInspector::new(self.ids.prefix.clone())
            .with_indent(self.display.indent)
            .with_help_message(self.display.help_message.clone())
    }
}
