//! Testing utilities: pre-built datasets and collection assertions.
//!
//! Everything here is plain data and plain panicking assertions, usable from
//! both unit and integration tests:
//!
//! - [`fixtures`]: sample car/manufacturer records and raw CSV text mirroring
//!   the real input files, including the edge cases the operators must
//!   handle (same-name manufacturers across years, a make with no cars,
//!   mixed-case spellings).
//! - [`assertions`]: ordered and unordered collection comparisons with
//!   diff-style failure messages.

pub mod assertions;
pub mod fixtures;

pub use assertions::{assert_collections_equal, assert_collections_unordered_equal};
pub use fixtures::{fuel_csv_text, manufacturers_csv_text, sample_cars, sample_manufacturers};
