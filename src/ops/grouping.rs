//! Selector-based grouping and flattening of nested group structures.

use crate::Dataset;
use std::hash::Hash;

impl<T: Clone> Dataset<T> {
    /// Partition records into groups keyed by the selector's output.
    ///
    /// The selector may derive a normalized key (e.g. an uppercased field);
    /// distinct keys compare by exact equality of the derived value. Groups
    /// appear in first-seen order, members keep source order unmodified, and
    /// every input record lands in exactly one group.
    pub fn group_by<K, F>(&self, key_fn: F) -> Dataset<(K, Vec<T>)>
    where
        K: Clone + Eq + Hash,
        F: Fn(&T) -> K,
    {
        self.clone().key_by(key_fn).group_by_key()
    }
}

impl<K: Clone, U: Clone, W: Clone> Dataset<(K, Vec<(U, Vec<W>)>)> {
    /// Flatten one nesting level of grouped group-join results.
    ///
    /// For each outer group, concatenates the nested `Vec<W>` sequences of
    /// all members in member order, each member's sequence kept intact. This
    /// turns "countries -> manufacturers -> cars" into "countries -> cars"
    /// when the nested structure is consumed flat.
    pub fn flatten_members(self) -> Dataset<(K, Vec<W>)> {
        self.map(|(k, members)| {
            let flat: Vec<W> = members
                .iter()
                .flat_map(|(_, ws)| ws.iter().cloned())
                .collect();
            (k.clone(), flat)
        })
    }
}
