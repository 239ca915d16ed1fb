//! Command implementations
//!
//! Every command loads the config and a dataset the same way, so those
//! steps live here.

pub mod browse;
pub mod inspect;
pub mod show;

use std::path::Path;

use anyhow::Result;
use arbor::config::candidate_paths;
use arbor::{load_dataset, sample_dataset, Config, TreeStateStore};

use crate::ui::output::print_config_warnings;
use crate::ui::widgets::tree_view::Decorators;

/// Output settings resolved from CLI flags and the terminal
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub supports_unicode: bool,
    pub supports_color: bool,
    pub show_ids: bool,
    pub is_tty: bool,
}

impl OutputOptions {
    pub fn decorators(&self, config: &Config) -> Decorators {
        let deco = Decorators::from_config(&config.display, self.supports_unicode);
        let show_ids = deco.show_ids || self.show_ids;
        deco.with_show_ids(show_ids)
    }

    /// Unicode for panels and icons, honoring `display.unicode`
    pub fn unicode(&self, config: &Config) -> bool {
        self.supports_unicode && config.display.unicode
    }
}

/// Load the explicit config file, or the first project/user config found.
/// Unknown keys are reported on stderr unless JSON output is on.
pub fn load_config(explicit: Option<&Path>, out: &OutputOptions) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().ok();
            candidate_paths(cwd.as_deref())
                .into_iter()
                .find(|p| p.is_file())
        }
    };

    let config = match path {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(&path)?;
            tracing::debug!(path = %path.display(), warnings = warnings.len(), "loaded config");
            if !out.json && !warnings.is_empty() {
                print_config_warnings(&path, &warnings, out.supports_unicode);
            }
            config
        }
        None => Config::default(),
    };

    Ok(config.with_env_overrides())
}

/// Build a store from a dataset file, or from the bundled sample tree
pub fn open_store(file: Option<&Path>, config: &Config) -> Result<TreeStateStore> {
    let roots = match file {
        Some(path) => load_dataset(path)?,
        None => {
            tracing::debug!("no dataset given, using the sample tree");
            sample_dataset()?
        }
    };
    Ok(TreeStateStore::new(roots, config.store_options()))
}
