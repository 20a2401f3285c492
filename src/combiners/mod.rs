//! Per-group aggregation via the [`CombineFn`] protocol.
//!
//! A combiner folds every value of a group through an accumulator in two
//! phases: `create` plus repeated `add_input` first, then a single `finish`
//! that derives the output. Derived quantities (like an average) exist only
//! on the output type, so they cannot be observed mid-fold. `merge` combines
//! two partial accumulators; nothing in this crate runs folds concurrently,
//! but merge is what would make per-group folds safe to split across
//! workers.
//!
//! Built-ins:
//! - [`Count`] -- number of values.
//! - [`Sum<T>`] -- sum of values.
//! - [`Min<T>`] / [`Max<T>`] -- extrema (require `Ord`).
//! - [`FuelStats`] -- max/min/avg of an integer metric in one pass.

mod basic;
mod statistical;

pub use basic::{Count, Max, Min, Sum};
pub use statistical::{FuelStats, FuelSummary};

/// A two-phase fold over the values of one group.
///
/// `V` is the input value type, `A` the accumulator, `O` the finished
/// output. Implementations must be pure: the same inputs in the same order
/// always produce the same output.
pub trait CombineFn<V, A, O>: Send + Sync + 'static {
    /// Fresh accumulator for a new group.
    fn create(&self) -> A;
    /// Fold one value into the accumulator.
    fn add_input(&self, acc: &mut A, v: V);
    /// Merge another partial accumulator into `acc`.
    fn merge(&self, acc: &mut A, other: A);
    /// Finalize the accumulator into the group's output. Called exactly
    /// once, after all inputs for the group have been added.
    fn finish(&self, acc: A) -> O;
}
