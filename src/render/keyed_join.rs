use std::hash::Hash;

use indexmap::IndexMap;

use crate::render::NodeId;

/// Reconciliation outcome for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinDiff<K> {
    /// Desired key without a node yet.
    Enter(K),
    /// Desired key already bound to a node.
    Update(K, NodeId),
    /// Bound key no longer desired.
    Exit(K, NodeId),
}

/// Keyed node set reconciled against the desired key list of each render.
///
/// Keys keep their binding order, so sibling order follows first entry.
#[derive(Debug, Clone)]
pub struct KeyedJoin<K> {
    nodes: IndexMap<K, NodeId>,
}

impl<K> Default for KeyedJoin<K> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> KeyedJoin<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exits first (in binding order), then enters and updates in `desired` order.
    #[must_use]
    pub fn diff(&self, desired: &[K]) -> Vec<JoinDiff<K>> {
        let mut diffs: Vec<JoinDiff<K>> = self
            .nodes
            .iter()
            .filter(|(key, _)| !desired.contains(key))
            .map(|(key, node)| JoinDiff::Exit(*key, *node))
            .collect();

        diffs.extend(desired.iter().map(|key| match self.nodes.get(key) {
            Some(node) => JoinDiff::Update(*key, *node),
            None => JoinDiff::Enter(*key),
        }));
        diffs
    }

    pub fn bind(&mut self, key: K, node: NodeId) {
        self.nodes.insert(key, node);
    }

    pub fn unbind(&mut self, key: K) -> Option<NodeId> {
        self.nodes.shift_remove(&key)
    }

    #[must_use]
    pub fn get(&self, key: K) -> Option<NodeId> {
        self.nodes.get(&key).copied()
    }

    /// Key bound to `node`, if any.
    #[must_use]
    pub fn key_of(&self, node: NodeId) -> Option<K> {
        self.nodes
            .iter()
            .find(|(_, bound)| **bound == node)
            .map(|(key, _)| *key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, NodeId)> + '_ {
        self.nodes.iter().map(|(key, node)| (*key, *node))
    }

    /// Unbinds everything and returns the released nodes.
    pub fn drain(&mut self) -> Vec<NodeId> {
        self.nodes.drain(..).map(|(_, node)| node).collect()
    }
}
