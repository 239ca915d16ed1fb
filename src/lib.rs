//! Arbor - tree-view state core
//!
//! Arbor loads a hierarchical dataset, gives every node an id, and manages
//! the interactive state a tree view needs: single selection, one open
//! branch per level, and filtering by name. The selected node can be
//! rendered back in its source shape for an inspector panel.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod tree;

// Re-exports for convenience
pub use config::Config;
pub use error::{ArborError, ArborResult};
pub use models::{Dataset, TreeNode};
pub use parser::{load_dataset, sample_dataset};
pub use tree::{
    assign_ids, expand_filtered_nodes, filter_tree, on_toggle, prepare_for_display,
    NodeInspector, StoreChange, StoreObserver, StoreOptions, TreeStateStore,
};
