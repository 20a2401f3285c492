//! Key-based join operators.
//!
//! Both joins take a key extractor per side rather than requiring pre-keyed
//! `(K, V)` pairs, so composite keys are just extractors returning a key
//! struct (e.g. [`MakeYear`](crate::MakeYear)). Keys compare by exact
//! equality of the extracted value; there is no normalization.
//!
//! Emission order is deterministic: left/outer records in source order, and
//! within one left record its matches in right-side source order. Callers
//! that want a different order apply a `sorted_*` step afterwards.

use crate::Dataset;
use std::collections::HashMap;
use std::hash::Hash;

/// Bucket the right side by extracted key, preserving source order within
/// each bucket.
fn bucket_by_key<R, K, F>(rows: &[R], key_fn: F) -> HashMap<K, Vec<&R>>
where
    K: Eq + Hash,
    F: Fn(&R) -> K,
{
    let mut buckets: HashMap<K, Vec<&R>> = HashMap::new();
    for r in rows {
        buckets.entry(key_fn(r)).or_default().push(r);
    }
    buckets
}

impl<T: Clone> Dataset<T> {
    /// Inner equi-join against `right` on extracted keys.
    ///
    /// For every left record, emits one `project(left, right)` output per
    /// right record whose key equals the left's. Left records with no match
    /// are dropped.
    pub fn join_on<R, K, O, LF, RF, P>(
        &self,
        right: &Dataset<R>,
        left_key: LF,
        right_key: RF,
        project: P,
    ) -> Dataset<O>
    where
        R: Clone,
        K: Eq + Hash,
        LF: Fn(&T) -> K,
        RF: Fn(&R) -> K,
        P: Fn(&T, &R) -> O,
    {
        let buckets = bucket_by_key(right.as_slice(), right_key);
        let mut out = Vec::new();
        for l in self.iter() {
            if let Some(matches) = buckets.get(&left_key(l)) {
                for &r in matches {
                    out.push(project(l, r));
                }
            }
        }
        crate::from_vec(out)
    }

    /// Group-join against `inner` on extracted keys.
    ///
    /// Emits exactly one output per outer record, paired with the
    /// possibly-empty vector of all matching inner records. Unlike
    /// [`join_on`](Dataset::join_on), zero-match outers are retained; this
    /// is how a manufacturer with no cars still appears in results.
    pub fn group_join<R, K, OF, IF>(
        &self,
        inner: &Dataset<R>,
        outer_key: OF,
        inner_key: IF,
    ) -> Dataset<(T, Vec<R>)>
    where
        R: Clone,
        K: Eq + Hash,
        OF: Fn(&T) -> K,
        IF: Fn(&R) -> K,
    {
        let buckets = bucket_by_key(inner.as_slice(), inner_key);
        let mut out = Vec::with_capacity(self.len());
        for o in self.iter() {
            let members = match buckets.get(&outer_key(o)) {
                Some(matches) => matches.iter().map(|r| (*r).clone()).collect(),
                None => Vec::new(),
            };
            out.push((o.clone(), members));
        }
        crate::from_vec(out)
    }
}
