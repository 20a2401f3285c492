//! CSV decoding for the source datasets.
//!
//! This module provides:
//! - **Typed file ingestion** with Serde: [`read_rows`]
//! - **Dataset-specific readers**: [`read_cars`] and [`read_manufacturers`]
//!
//! # Design notes
//! - All typed reads are Serde-backed (`DeserializeOwned`); with headers off,
//!   struct fields map to columns positionally.
//! - Quoting is **disabled**. The source files are plain comma-splittable
//!   text, and the original data-quality assumption (a quote character is
//!   literal data, an embedded comma breaks the row) is reproduced on
//!   purpose rather than papered over with RFC-4180 handling.
//! - Numeric parsing uses Rust's `FromStr` semantics: a fixed decimal-point
//!   convention, independent of the host locale.
//! - Any row with a missing or non-numeric required column fails the whole
//!   read; there is no row-skipping or partial-record recovery.

use crate::record::{Car, Manufacturer};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a CSV file into a typed `Vec<T>`.
///
/// * If `skip_header` is `true`, the first line is discarded before parsing.
/// * Lines of length <= 1 (blank or trailing junk) are discarded.
/// * Remaining lines split on commas only and deserialize positionally.
/// * Errors are annotated with the file path and the 1-based line number in
///   the source file (header and discarded lines included in the count).
///
/// # Errors
/// Returns an error if the file cannot be read or if any surviving row
/// fails to deserialize into `T`.
pub fn read_rows<T: DeserializeOwned>(path: impl AsRef<Path>, skip_header: bool) -> Result<Vec<T>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("open {}", path.display()))?;

    let mut data = String::with_capacity(raw.len());
    let mut line_numbers = Vec::new();
    for (n, line) in raw.lines().enumerate().skip(usize::from(skip_header)) {
        if line.len() <= 1 {
            continue;
        }
        data.push_str(line);
        data.push('\n');
        line_numbers.push(n + 1);
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .from_reader(data.as_bytes());
    let mut out = Vec::<T>::new();
    for (i, rec) in rdr.deserialize::<T>().enumerate() {
        // With quoting off a record never spans lines, so record i comes
        // from the i-th surviving source line.
        let line = line_numbers.get(i).copied().unwrap_or(i + 1);
        let v = rec.with_context(|| format!("parse CSV line #{} in {}", line, path.display()))?;
        out.push(v);
    }
    Ok(out)
}

/// Read the vehicle file. The first line is a header and is skipped.
///
/// Column order: year, manufacturer, name, displacement, cylinders, city,
/// highway, combined.
///
/// # Errors
/// See [`read_rows`].
pub fn read_cars(path: impl AsRef<Path>) -> Result<Vec<Car>> {
    read_rows(path, true)
}

/// Read the manufacturer file. There is no header line.
///
/// Column order: name, headquarters, year.
///
/// # Errors
/// See [`read_rows`].
pub fn read_manufacturers(path: impl AsRef<Path>) -> Result<Vec<Manufacturer>> {
    read_rows(path, false)
}
