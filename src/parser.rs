//! Dataset loading
//!
//! Datasets are read from JSON, YAML or TOML, picked by file extension.
//! JSON and YAML accept a lone root node or a sequence of roots. TOML has no
//! top-level arrays, so a forest is written as `[[nodes]]` tables.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ArborError, ArborResult};
use crate::models::{Dataset, TreeNode};

/// The classic demo tree, used when no dataset file is given
pub const SAMPLE_DATASET: &str = include_str!("../demos/data.json");

/// Supported dataset encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
    Toml,
}

impl DatasetFormat {
    /// Pick a format from the file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TomlDataset {
    Forest { nodes: Vec<TreeNode> },
    Single(Box<TreeNode>),
}

/// Read and parse a dataset file into a sequence of roots
pub fn load_dataset(path: &Path) -> ArborResult<Vec<TreeNode>> {
    let format = DatasetFormat::from_path(path).ok_or_else(|| ArborError::UnsupportedFormat {
        file: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path)?;
    let roots = parse_dataset(&content, format, path)?;
    tracing::debug!(path = %path.display(), roots = roots.len(), "loaded dataset");
    Ok(roots)
}

/// Parse dataset text. `path` is only used for error context.
pub fn parse_dataset(content: &str, format: DatasetFormat, path: &Path) -> ArborResult<Vec<TreeNode>> {
    let invalid = |message: String| ArborError::InvalidDataset {
        file: path.to_path_buf(),
        message,
    };

    let roots = match format {
        DatasetFormat::Json => serde_json::from_str::<Dataset>(content)
            .map_err(|e| invalid(e.to_string()))?
            .into_roots(),
        DatasetFormat::Yaml => serde_yaml_ng::from_str::<Dataset>(content)
            .map_err(|e| invalid(e.to_string()))?
            .into_roots(),
        DatasetFormat::Toml => match toml::from_str::<TomlDataset>(content)
            .map_err(|e| invalid(e.to_string()))?
        {
            TomlDataset::Forest { nodes } => nodes,
            TomlDataset::Single(root) => vec![*root],
        },
    };

    if roots.is_empty() {
        return Err(ArborError::EmptyDataset {
            file: path.to_path_buf(),
        });
    }
    Ok(roots)
}

/// The embedded sample dataset
pub fn sample_dataset() -> ArborResult<Vec<TreeNode>> {
    parse_dataset(SAMPLE_DATASET, DatasetFormat::Json, Path::new("<sample>"))
}
