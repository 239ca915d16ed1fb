//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArborError, ArborResult};

use super::types::Config;

/// Project-level config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = ".arbor.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse config text; `path` is only used for error and warning context.
pub fn parse_with_warnings(content: &str, path: &Path) -> ArborResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArborError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    // Every id would count as synthetic and be stripped by the inspector.
    if config.ids.prefix.is_empty() {
        return Err(ArborError::InvalidConfig {
            file: path.to_path_buf(),
            message: "ids.prefix must not be empty".to_string(),
        });
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Config files in lookup order: project first, then user
pub fn candidate_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(dir) = user_config_dir() {
        paths.push(dir.join("arbor/config.toml"));
    }
    paths
}

/// Apply environment variable overrides (ARBOR_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

fn with_env_overrides_from(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    // ARBOR_ID_PREFIX
    if let Some(prefix) = get_env("ARBOR_ID_PREFIX") {
        if !prefix.is_empty() {
            config.ids.prefix = prefix;
        }
    }

    // ARBOR_EXPAND_MATCHES
    if let Some(val) = get_env("ARBOR_EXPAND_MATCHES") {
        config.filter.expand_matches = parse_flag(&val);
    }

    // ARBOR_SHOW_IDS
    if let Some(val) = get_env("ARBOR_SHOW_IDS") {
        config.display.show_ids = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    val.to_lowercase() != "false" && val != "0"
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "ids",
        "prefix",
        "filter",
        "expand_matches",
        "display",
        "indent",
        "unicode",
        "show_ids",
        "help_message",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

#[cfg(test)]
pub(super) fn env_overrides_for_test(
    config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    with_env_overrides_from(config, get_env)
}

#[cfg(test)]
pub(super) fn suggest_key_for_test(unknown: &str) -> Option<String> {
    suggest_key(unknown)
}
