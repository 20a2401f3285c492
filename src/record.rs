//! Record types for the two source datasets, plus the composite join key.
//!
//! Records are plain serde-derived structs so the CSV reader can deserialize
//! them positionally (headers-off mode maps columns by position; see
//! [`crate::io::csv`]). They are immutable once parsed — every operator in
//! this crate clones rather than mutates.

use serde::{Deserialize, Serialize};

/// One vehicle row from the fuel-economy file.
///
/// Column order: year, manufacturer, name, displacement, cylinders, city,
/// highway, combined. `city`/`highway`/`combined` are MPG figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub year: i32,
    pub manufacturer: String,
    pub name: String,
    pub displacement: f64,
    pub cylinders: u32,
    pub city: i32,
    pub highway: i32,
    pub combined: i32,
}

/// One manufacturer row. Column order: name, headquarters, year.
///
/// A manufacturer appears once per model year; its headquarters can change
/// between years, which is why the natural key against [`Car`] is the
/// composite `(name, year)` pair, not the name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Manufacturer {
    pub name: String,
    pub headquarters: String,
    pub year: i32,
}

/// Composite join key: manufacturer name plus model year.
///
/// An explicit struct rather than an ad-hoc tuple so the equality semantics
/// of the car/manufacturer join are exact and intentional. Name comparison
/// is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MakeYear {
    pub name: String,
    pub year: i32,
}

impl Car {
    /// The composite key this car joins on.
    pub fn make_year(&self) -> MakeYear {
        MakeYear {
            name: self.manufacturer.clone(),
            year: self.year,
        }
    }
}

impl Manufacturer {
    /// The composite key this manufacturer row joins on.
    pub fn make_year(&self) -> MakeYear {
        MakeYear {
            name: self.name.clone(),
            year: self.year,
        }
    }
}
