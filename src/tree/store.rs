//! Tree state store.
//!
//! Owns the source forest, the optional filtered view, and the selection
//! cursor. Every mutation goes through `&mut self`, so callers never hold a
//! reference that can go stale behind the store's back.

use serde::Serialize;

use crate::models::{forest_count, TreeNode};

use super::filter::{count_matches, expand_filtered_nodes, filter_tree, normalize_query};
use super::ids::{assign_ids, SYNTHETIC_ID_PREFIX};
use super::index::TreeIndex;
use super::inspector::NodeInspector;
use super::toggle::{on_toggle, ToggleOutcome};

/// A change the store just applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "change", rename_all = "snake_case")]
pub enum StoreChange {
    Loaded {
        nodes: usize,
        assigned_ids: usize,
    },
    Toggled {
        id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        toggled: Option<bool>,
        collapsed: Vec<String>,
    },
    /// A toggle targeted an id that is not in the current tree
    Deselected {
        id: String,
    },
    Filtered {
        query: String,
        matches: usize,
    },
    FilterCleared,
}

/// Receives every change after it is applied
pub trait StoreObserver {
    fn on_change(&mut self, change: &StoreChange);
}

impl<F: FnMut(&StoreChange)> StoreObserver for F {
    fn on_change(&mut self, change: &StoreChange) {
        self(change)
    }
}

/// Store behavior knobs
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Prefix for synthetic ids
    pub id_prefix: String,
    /// Open every path to a match after filtering
    pub expand_matches: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            id_prefix: SYNTHETIC_ID_PREFIX.to_string(),
            expand_matches: true,
        }
    }
}

#[derive(Debug, Clone)]
struct FilteredView {
    query: String,
    roots: Vec<TreeNode>,
    index: TreeIndex,
}

pub struct TreeStateStore {
    source: Vec<TreeNode>,
    source_index: TreeIndex,
    filtered: Option<FilteredView>,
    cursor: Option<String>,
    options: StoreOptions,
    assigned_ids: usize,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl std::fmt::Debug for TreeStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeStateStore")
            .field("nodes", &forest_count(&self.source))
            .field("query", &self.query())
            .field("cursor", &self.cursor)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TreeStateStore {
    /// Take ownership of a raw forest: fill in ids, keep at most one active
    /// node, and index it.
    pub fn new(mut roots: Vec<TreeNode>, options: StoreOptions) -> Self {
        let assigned_ids = assign_ids(&mut roots, &options.id_prefix);
        let cursor = settle_active(&mut roots);
        let source_index = TreeIndex::build(&roots);

        tracing::debug!(nodes = source_index.len(), assigned_ids, "loaded tree");
        Self {
            source: roots,
            source_index,
            filtered: None,
            cursor,
            options,
            assigned_ids,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It first receives `Loaded` for the load that
    /// built this store, then every later change.
    pub fn subscribe(&mut self, mut observer: impl StoreObserver + 'static) {
        observer.on_change(&StoreChange::Loaded {
            nodes: forest_count(&self.source),
            assigned_ids: self.assigned_ids,
        });
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self, change: StoreChange) {
        for observer in &mut self.observers {
            observer.on_change(&change);
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// The forest currently on display (filtered view if a filter is set)
    pub fn tree(&self) -> &[TreeNode] {
        match &self.filtered {
            Some(view) => &view.roots,
            None => &self.source,
        }
    }

    /// The unfiltered forest
    pub fn source(&self) -> &[TreeNode] {
        &self.source
    }

    fn current_index(&self) -> &TreeIndex {
        match &self.filtered {
            Some(view) => &view.index,
            None => &self.source_index,
        }
    }

    /// Active filter query, if any
    pub fn query(&self) -> Option<&str> {
        self.filtered.as_ref().map(|v| v.query.as_str())
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered.is_some()
    }

    /// Id of the current selection
    pub fn selected_id(&self) -> Option<&str> {
        self.cursor.as_deref()
    }

    /// The selected node. Looked up in the visible tree first, then in the
    /// source, so a selection hidden by a filter is still inspectable.
    pub fn selected(&self) -> Option<&TreeNode> {
        let id = self.cursor.as_deref()?;
        self.get(id).or_else(|| self.source_index.get(&self.source, id))
    }

    /// Look up a node in the visible tree
    pub fn get(&self, id: &str) -> Option<&TreeNode> {
        self.current_index().get(self.tree(), id)
    }

    /// Parent of a node in the visible tree
    pub fn parent_of(&self, id: &str) -> Option<&TreeNode> {
        let parent = self.current_index().parent_of(id)?;
        self.get(parent)
    }

    /// Apply a user toggle on the visible tree.
    ///
    /// The selection is mirrored into the source forest so it survives
    /// clearing the filter; expansion state is not.
    pub fn toggle(&mut self, id: &str, toggled: bool) -> Option<ToggleOutcome> {
        let previous = self.cursor.take();

        let outcome = match &mut self.filtered {
            Some(view) => {
                let outcome =
                    on_toggle(&mut view.roots, &view.index, previous.as_deref(), id, toggled);
                let selected = outcome.as_ref().map(|o| o.id.as_str());
                sync_selection(&mut self.source, &self.source_index, previous.as_deref(), selected);
                outcome
            }
            None => on_toggle(
                &mut self.source,
                &self.source_index,
                previous.as_deref(),
                id,
                toggled,
            ),
        };

        match &outcome {
            Some(done) => {
                tracing::debug!(id, toggled = ?done.toggled, collapsed = done.collapsed.len(), "toggled node");
                self.cursor = Some(done.id.clone());
                self.notify(StoreChange::Toggled {
                    id: done.id.clone(),
                    toggled: done.toggled,
                    collapsed: done.collapsed.clone(),
                });
            }
            None => {
                tracing::debug!(id, "toggle target not in tree");
                self.notify(StoreChange::Deselected { id: id.to_string() });
            }
        }
        outcome
    }

    /// Toggle to the opposite of the node's current expansion state
    pub fn toggle_flip(&mut self, id: &str) -> Option<ToggleOutcome> {
        let next = !self.get(id).is_some_and(|n| n.toggled);
        self.toggle(id, next)
    }

    /// Replace the view with a filtered copy; a blank query clears the filter.
    /// Returns the number of nodes whose own name matched.
    pub fn set_filter(&mut self, raw_query: &str) -> usize {
        let Some(query) = normalize_query(raw_query) else {
            self.clear_filter();
            return 0;
        };

        let mut roots = filter_tree(&self.source, query);
        if self.options.expand_matches {
            roots = expand_filtered_nodes(roots, query);
        }
        let matches = count_matches(&roots, query);
        let index = TreeIndex::build(&roots);

        self.filtered = Some(FilteredView {
            query: query.to_string(),
            roots,
            index,
        });
        self.notify(StoreChange::Filtered {
            query: query.to_string(),
            matches,
        });
        matches
    }

    /// Drop the filtered view and go back to the source forest
    pub fn clear_filter(&mut self) {
        if self.filtered.take().is_some() {
            self.notify(StoreChange::FilterCleared);
        }
    }

    /// Inspector output for the current selection
    pub fn inspect(&self, inspector: &NodeInspector) -> crate::error::ArborResult<String> {
        inspector.render(self.selected())
    }

    /// Give back the source forest
    pub fn into_source(self) -> Vec<TreeNode> {
        self.source
    }
}

/// Keep only the first active node in pre-order and return its id
fn settle_active(roots: &mut [TreeNode]) -> Option<String> {
    let mut cursor: Option<String> = None;
    for root in roots.iter_mut() {
        root.walk_mut(&mut |n| {
            if !n.active {
                return;
            }
            if cursor.is_none() {
                cursor = n.id.clone();
            } else {
                n.active = false;
            }
        });
    }
    cursor
}

fn sync_selection(
    roots: &mut [TreeNode],
    index: &TreeIndex,
    previous: Option<&str>,
    selected: Option<&str>,
) {
    if let Some(prev) = previous.and_then(|p| index.get_mut(roots, p)) {
        prev.active = false;
    }
    if let Some(node) = selected.and_then(|id| index.get_mut(roots, id)) {
        node.active = true;
    }
}
