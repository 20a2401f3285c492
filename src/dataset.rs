//! The core `Dataset<T>` collection type and its transformation methods.
//!
//! A [`Dataset`] wraps a fully materialized `Vec<T>`. Every operator executes
//! eagerly and returns a new `Dataset`; nothing here is lazy or shared, so a
//! chain of calls reads like a pipeline but each step is an ordinary function
//! over an in-memory vector. Element order is always deterministic: it is the
//! source order until a `sorted_*` call imposes a different one.

use crate::combiners::CombineFn;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// An ordered, in-memory collection of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    pub(crate) rows: Vec<T>,
}

/// Wrap an existing vector as a [`Dataset`].
pub fn from_vec<T>(rows: Vec<T>) -> Dataset<T> {
    Dataset { rows }
}

impl<T> From<Vec<T>> for Dataset<T> {
    fn from(rows: Vec<T>) -> Self {
        Dataset { rows }
    }
}

impl<T> Dataset<T> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.rows
    }

    /// Consume the dataset, yielding the backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.rows
    }
}

/// ---- Element-wise transforms ----
impl<T> Dataset<T> {
    /// Transform each element, preserving order.
    pub fn map<O, F>(self, f: F) -> Dataset<O>
    where
        F: Fn(&T) -> O,
    {
        Dataset {
            rows: self.rows.iter().map(f).collect(),
        }
    }

    /// Keep only elements matching the predicate, preserving order.
    pub fn filter<F>(self, pred: F) -> Dataset<T>
    where
        F: Fn(&T) -> bool,
    {
        Dataset {
            rows: self.rows.into_iter().filter(|t| pred(t)).collect(),
        }
    }

    /// Transform each element into zero or more outputs, concatenated in order.
    pub fn flat_map<O, F>(self, f: F) -> Dataset<O>
    where
        F: Fn(&T) -> Vec<O>,
    {
        let mut out = Vec::new();
        for t in &self.rows {
            out.extend(f(t));
        }
        Dataset { rows: out }
    }
}

/// ---- Ordering layer ----
///
/// All sorts are backed by `Vec::sort_by`, which is stable: elements that
/// compare equal on every supplied key retain their pre-sort relative order.
/// Multi-key orderings are expressed with `cmp(..).then_with(..)` chains in
/// the comparator, each key with its own direction.
impl<T> Dataset<T> {
    /// Stable sort by an explicit comparator.
    pub fn sorted_by<F>(mut self, cmp: F) -> Dataset<T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.rows.sort_by(|a, b| cmp(a, b));
        self
    }

    /// Stable ascending sort by a derived key.
    pub fn sorted_by_key<K, F>(mut self, key: F) -> Dataset<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.rows.sort_by_key(|t| key(t));
        self
    }

    /// Stable descending sort by a derived key.
    pub fn sorted_by_key_desc<K, F>(mut self, key: F) -> Dataset<T>
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.rows.sort_by(|a, b| key(b).cmp(&key(a)));
        self
    }
}

/// ---- Keyed ops ----
impl<T: Clone> Dataset<T> {
    /// Derive a key per element and produce `(K, T)` pairs.
    pub fn key_by<K, F>(self, key_fn: F) -> Dataset<(K, T)>
    where
        F: Fn(&T) -> K,
    {
        self.map(move |t| (key_fn(t), t.clone()))
    }
}

impl<K: Clone, V: Clone> Dataset<(K, V)> {
    /// Transform values while preserving keys.
    pub fn map_values<O, F>(self, f: F) -> Dataset<(K, O)>
    where
        F: Fn(&V) -> O,
    {
        self.map(move |kv: &(K, V)| (kv.0.clone(), f(&kv.1)))
    }
}

impl<K: Clone + Eq + Hash, V: Clone> Dataset<(K, V)> {
    /// Group values by key: `(K, V)` -> `(K, Vec<V>)`.
    ///
    /// Groups appear in first-seen key order and members retain source
    /// order, so the output is deterministic without any follow-up sort.
    pub fn group_by_key(self) -> Dataset<(K, Vec<V>)> {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut groups: Vec<(K, Vec<V>)> = Vec::new();
        for (k, v) in self.rows {
            match index.get(&k) {
                Some(&i) => groups[i].1.push(v),
                None => {
                    index.insert(k.clone(), groups.len());
                    groups.push((k, vec![v]));
                }
            }
        }
        Dataset { rows: groups }
    }

    /// Fold values per key through a combiner: `(K, V)` -> `(K, O)`.
    ///
    /// Each key's accumulator is created on the first value observed for
    /// that key, fed every subsequent value via `add_input`, and finished
    /// exactly once after the whole input has been consumed. An accumulator
    /// therefore always sees at least one input before `finish` runs.
    /// Output pairs appear in first-seen key order.
    pub fn combine_values<C, A, O>(self, comb: C) -> Dataset<(K, O)>
    where
        C: CombineFn<V, A, O>,
    {
        let mut index: HashMap<K, usize> = HashMap::new();
        let mut accs: Vec<(K, A)> = Vec::new();
        for (k, v) in self.rows {
            match index.get(&k) {
                Some(&i) => comb.add_input(&mut accs[i].1, v),
                None => {
                    let mut acc = comb.create();
                    comb.add_input(&mut acc, v);
                    index.insert(k.clone(), accs.len());
                    accs.push((k, acc));
                }
            }
        }
        Dataset {
            rows: accs
                .into_iter()
                .map(|(k, acc)| (k, comb.finish(acc)))
                .collect(),
        }
    }
}

impl<T> IntoIterator for Dataset<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
