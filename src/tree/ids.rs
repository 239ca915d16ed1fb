//! Synthetic id assignment.
//!
//! Every node under management needs an id so toggles and selections can
//! find it again. Nodes that arrive without one get `prefix + counter`.

use std::collections::HashSet;

use crate::models::TreeNode;

/// Reserved prefix marking ids generated by [`IdAssigner`]
pub const SYNTHETIC_ID_PREFIX: &str = "<>__id";

/// Check whether an id was generated with the given prefix
pub fn is_synthetic_id(id: &str, prefix: &str) -> bool {
    id.starts_with(prefix)
}

/// Hands out `prefix + counter` ids in pre-order.
///
/// The counter is monotonic for the lifetime of the assigner and is never
/// reset between subtrees. Values already used by a user-supplied id are
/// skipped, so ids are unique within one assignment pass.
#[derive(Debug, Clone)]
pub struct IdAssigner {
    prefix: String,
    counter: usize,
    issued: usize,
    taken: HashSet<String>,
}

impl Default for IdAssigner {
    fn default() -> Self {
        Self::new(SYNTHETIC_ID_PREFIX)
    }
}

impl IdAssigner {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
            issued: 0,
            taken: HashSet::new(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.issued
    }

    fn next_id(&mut self) -> String {
        loop {
            let id = format!("{}{}", self.prefix, self.counter);
            self.counter += 1;
            if !self.taken.contains(&id) {
                self.issued += 1;
                return id;
            }
        }
    }

    /// Fill in missing ids across a forest, returning how many were assigned.
    ///
    /// A lone root can be passed with `std::slice::from_mut`.
    pub fn assign(&mut self, roots: &mut [TreeNode]) -> usize {
        let taken = &mut self.taken;
        for root in roots.iter() {
            root.walk(&mut |node| {
                if let Some(id) = node.id().filter(|id| !id.is_empty()) {
                    taken.insert(id.to_string());
                }
            });
        }

        let before = self.issued;
        for root in roots {
            self.assign_node(root);
        }
        self.issued - before
    }

    fn assign_node(&mut self, node: &mut TreeNode) {
        // An empty id is as useless as none for lookups.
        if let None | Some("") = node.id.as_deref() {
            node.id = Some(self.next_id());
        }
        for child in node.children_mut() {
            self.assign_node(child);
        }
    }
}

/// One-shot assignment with a fresh counter starting at 0
pub fn assign_ids(roots: &mut [TreeNode], prefix: &str) -> usize {
    let assigned = IdAssigner::new(prefix).assign(roots);
    tracing::debug!(assigned, prefix, "assigned synthetic ids");
    assigned
}
