//! # fuelflow
//!
//! Relational-style queries over two flat tabular datasets: vehicles and
//! their manufacturers. The crate loads both CSV files fully into memory,
//! then derives views with eager relational operators: equi-join (including
//! composite-key join), left-outer-style group-join, grouping with derived
//! keys, multi-level grouping, and per-group aggregation.
//!
//! ## Core concepts
//!
//! ### Dataset
//!
//! A [`Dataset<T>`] is an ordered, fully materialized collection. Every
//! operator executes immediately and returns a new `Dataset`; there is no
//! deferred execution, no shared mutable state, and no concurrency. Chains
//! still read like pipelines:
//!
//! ```
//! use fuelflow::{from_vec, testing::fixtures::sample_cars};
//!
//! let by_make = from_vec(sample_cars())
//!     .group_by(|c| c.manufacturer.to_uppercase())
//!     .sorted_by(|a, b| a.0.cmp(&b.0));
//! assert!(!by_make.is_empty());
//! ```
//!
//! ### Relational operators
//!
//! - [`join_on`](Dataset::join_on) -- inner equi-join with a key extractor
//!   per side; composite keys are extractors returning [`MakeYear`].
//! - [`group_join`](Dataset::group_join) -- every outer record retained with
//!   the (possibly empty) vector of matching inner records.
//! - [`group_by`](Dataset::group_by) / [`group_by_key`](Dataset::group_by_key)
//!   -- partition by a derived key, first-seen group order.
//! - [`combine_values`](Dataset::combine_values) -- per-group aggregation
//!   through a [`CombineFn`] accumulator.
//!
//! ### Ordering
//!
//! Every query fixes its output order as a final, stable multi-key sort
//! ([`sorted_by`](Dataset::sorted_by) with `cmp(..).then_with(..)` chains);
//! ties keep their pre-sort relative order.
//!
//! ### Queries
//!
//! The [`queries`] module composes the operators into the canonical derived
//! views (car listings, cars by make, makes with their cars, cars by
//! country both flat and nested, fuel summary per make), and [`report`]
//! renders the aggregation view with fixed-convention numeric formatting.
//!
//! ## I/O
//!
//! [`io::csv`] reads the two files with serde-backed positional decoding,
//! quoting disabled, and invariant numeric parsing. Malformed rows and
//! unreadable files fail the whole read with `anyhow` context; there is no
//! partial-record recovery.

pub mod combiners;
pub mod dataset;
pub mod io;
pub mod ops;
pub mod queries;
pub mod record;
pub mod report;
pub mod testing;

pub use combiners::{CombineFn, Count, FuelStats, FuelSummary, Max, Min, Sum};
pub use dataset::{Dataset, from_vec};
pub use io::csv::{read_cars, read_manufacturers, read_rows};
pub use queries::{
    CarListing, MakeSummary, car_listings, cars_by_country, cars_by_country_nested, cars_by_make,
    fuel_summary_by_make, makes_with_cars,
};
pub use record::{Car, MakeYear, Manufacturer};
pub use report::{render_car_groups, render_fuel_report, top_by_combined};
