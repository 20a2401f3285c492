//! The canonical derived views over the two loaded datasets.
//!
//! Each query is a pure, one-shot function from materialized slices to an
//! ordered result vector: operators build fresh intermediates, and the final
//! `sorted_*` step fixes the output order without affecting membership.
//! Nothing is retained between invocations.
//!
//! Key-comparison semantics differ per view on purpose, mirroring the
//! datasets' conventions: join keys (composite or name-only) compare
//! case-sensitively, while [`cars_by_make`] groups on an uppercased name.

use crate::combiners::FuelStats;
use crate::dataset::{Dataset, from_vec};
use crate::record::{Car, Manufacturer};

/// A joined car row projected for listing: where it's built, what it's
/// called, and its combined MPG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarListing {
    pub headquarters: String,
    pub name: String,
    pub combined: i32,
}

/// Per-manufacturer aggregate of the combined metric.
#[derive(Debug, Clone, PartialEq)]
pub struct MakeSummary {
    pub name: String,
    pub max: i32,
    pub min: i32,
    pub avg: f64,
}

/// Inner-join cars to manufacturers on the composite `(name, year)` key.
///
/// A car only matches the manufacturer row sharing both name and model
/// year; two rows for the same name in different years are never conflated.
/// Cars without a matching manufacturer are dropped. Ordered by combined
/// MPG descending, car name ascending.
pub fn car_listings(cars: &[Car], manufacturers: &[Manufacturer]) -> Vec<CarListing> {
    from_vec(cars.to_vec())
        .join_on(
            &from_vec(manufacturers.to_vec()),
            Car::make_year,
            Manufacturer::make_year,
            |c, m| CarListing {
                headquarters: m.headquarters.clone(),
                name: c.name.clone(),
                combined: c.combined,
            },
        )
        .sorted_by(|a, b| {
            b.combined
                .cmp(&a.combined)
                .then_with(|| a.name.cmp(&b.name))
        })
        .into_vec()
}

/// Group cars by uppercased manufacturer name, groups ordered by key.
///
/// The uppercasing folds differently-cased spellings of one make into a
/// single group; this is the only view that normalizes the name.
pub fn cars_by_make(cars: &[Car]) -> Vec<(String, Vec<Car>)> {
    from_vec(cars.to_vec())
        .group_by(|c| c.manufacturer.to_uppercase())
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .into_vec()
}

/// Group-join manufacturers to their cars on name, ordered by manufacturer
/// name.
///
/// Every manufacturer row appears exactly once, paired with all cars of
/// that make; a manufacturer with no cars keeps an empty vector.
pub fn makes_with_cars(
    manufacturers: &[Manufacturer],
    cars: &[Car],
) -> Vec<(Manufacturer, Vec<Car>)> {
    from_vec(manufacturers.to_vec())
        .group_join(
            &from_vec(cars.to_vec()),
            |m| m.name.clone(),
            |c| c.manufacturer.clone(),
        )
        .sorted_by(|a, b| a.0.name.cmp(&b.0.name))
        .into_vec()
}

/// Join cars to manufacturers on name, then group the joined pairs by
/// headquarters country, groups ordered by country.
///
/// This is the flat construction of the country view; see
/// [`cars_by_country_nested`] for the equivalent nested construction.
pub fn cars_by_country(
    cars: &[Car],
    manufacturers: &[Manufacturer],
) -> Vec<(String, Vec<(Car, Manufacturer)>)> {
    from_vec(cars.to_vec())
        .join_on(
            &from_vec(manufacturers.to_vec()),
            |c| c.manufacturer.clone(),
            |m| m.name.clone(),
            |c, m| (c.clone(), m.clone()),
        )
        .group_by(|(_, m)| m.headquarters.clone())
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .into_vec()
}

/// Nested construction of the country view: group-join manufacturers to
/// cars, group those results by headquarters, then flatten each country's
/// nested car sequences in manufacturer order.
///
/// Yields the same per-country car sets as [`cars_by_country`] (member
/// order may differ between the two constructions).
pub fn cars_by_country_nested(
    manufacturers: &[Manufacturer],
    cars: &[Car],
) -> Vec<(String, Vec<Car>)> {
    let nested: Dataset<(Manufacturer, Vec<Car>)> = from_vec(manufacturers.to_vec())
        .group_join(
            &from_vec(cars.to_vec()),
            |m| m.name.clone(),
            |c| c.manufacturer.clone(),
        )
        .sorted_by(|a, b| a.0.name.cmp(&b.0.name));

    nested
        .group_by(|(m, _)| m.headquarters.clone())
        .sorted_by(|a, b| a.0.cmp(&b.0))
        .flatten_members()
        .into_vec()
}

/// Aggregate the combined metric per manufacturer name (case-sensitive),
/// ordered by max descending.
///
/// Each group is folded through [`FuelStats`]: max, min, and the
/// full-precision average of combined MPG.
pub fn fuel_summary_by_make(cars: &[Car]) -> Vec<MakeSummary> {
    from_vec(cars.to_vec())
        .key_by(|c| c.manufacturer.clone())
        .map_values(|c| c.combined)
        .combine_values(FuelStats)
        .map(|(name, s)| MakeSummary {
            name: name.clone(),
            max: s.max,
            min: s.min,
            avg: s.avg,
        })
        .sorted_by_key_desc(|r| r.max)
        .into_vec()
}
