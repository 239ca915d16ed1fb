//! Tree state management
//!
//! # Module Structure
//!
//! - `ids` - synthetic id assignment for nodes that arrive without one
//! - `index` - id to index-path / parent lookup
//! - `toggle` - selection and single-branch expansion
//! - `filter` - name filtering and expansion of matching paths
//! - `inspector` - display transform for the selected node
//! - `store` - owns the forest, the filtered view and the selection

mod filter;
mod ids;
mod index;
mod inspector;
mod store;
mod toggle;

pub use filter::{
    count_matches, expand_filtered_nodes, filter_tree, name_matches, normalize_query,
};
pub use ids::{assign_ids, is_synthetic_id, IdAssigner, SYNTHETIC_ID_PREFIX};
pub use index::{node_at, node_at_mut, TreeIndex};
pub use inspector::{prepare_for_display, NodeInspector, HELP_MSG};
pub use store::{StoreChange, StoreObserver, StoreOptions, TreeStateStore};
pub use toggle::{on_toggle, ToggleOutcome};
