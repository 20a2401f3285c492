//! Console rendering of query results.
//!
//! Numeric formatting is fixed-convention (decimal point, two fractional
//! digits, right-aligned field) and never consults the host locale, so the
//! same data always renders to the same bytes.

use crate::queries::MakeSummary;
use crate::record::Car;

/// Render per-make fuel statistics, one block per manufacturer.
///
/// The average prints with exactly two decimal places, right-aligned to a
/// field of at least five characters.
pub fn render_fuel_report(rows: &[MakeSummary]) -> String {
    let mut out = String::new();
    for r in rows {
        out.push_str(&format!("{}\n", r.name));
        out.push_str(&format!("\t Max: {}\n", r.max));
        out.push_str(&format!("\t Min: {}\n", r.min));
        out.push_str(&format!("\t Avg: {:>5.2}\n", r.avg));
    }
    out
}

/// The `n` cars with the highest combined MPG, descending.
///
/// The sort is stable, so cars tied on combined keep their source order.
pub fn top_by_combined(cars: &[Car], n: usize) -> Vec<Car> {
    let mut sorted = cars.to_vec();
    sorted.sort_by(|a, b| b.combined.cmp(&a.combined));
    sorted.truncate(n);
    sorted
}

/// Render grouped cars as a key header plus the top `n` members per group
/// by combined MPG.
pub fn render_car_groups(groups: &[(String, Vec<Car>)], n: usize) -> String {
    let mut out = String::new();
    for (key, cars) in groups {
        out.push_str(&format!("{key}\n"));
        for car in top_by_combined(cars, n) {
            out.push_str(&format!("\t{} : {}\n", car.name, car.combined));
        }
    }
    out
}
