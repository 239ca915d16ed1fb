//! Configuration module for Arbor
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARBOR_*)
//! 3. Project config (./.arbor.toml)
//! 4. User config (~/.config/arbor/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{candidate_paths, parse_with_warnings, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{Config, DisplayConfig, FilterConfig, IdsConfig};
