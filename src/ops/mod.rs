//! Relational operators over [`Dataset`](crate::Dataset): equi-join,
//! group-join, and selector-based grouping.

mod grouping;
mod joins;
