//! Statistical combiner for fuel-economy metrics: [`FuelStats`].

use crate::combiners::CombineFn;

/// Running state for one group's metric: count, sum, and extrema.
///
/// Extrema start at the metric domain's sentinels so the first `add_input`
/// always replaces them. The average is deliberately absent here; it is
/// derived once, by [`FuelStats::finish`], on the output type.
#[derive(Clone, Copy, Debug)]
pub struct FuelStatsAcc {
    pub count: u32,
    pub total: i64,
    pub max: i32,
    pub min: i32,
}

impl Default for FuelStatsAcc {
    fn default() -> Self {
        FuelStatsAcc {
            count: 0,
            total: 0,
            max: i32::MIN,
            min: i32::MAX,
        }
    }
}

/// Finished per-group statistics over an integer metric.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuelSummary {
    pub max: i32,
    pub min: i32,
    /// Full-precision mean (`total / count` as `f64`, not integer division).
    pub avg: f64,
}

/// Max, min, and average of an `i32` metric in a single pass.
///
/// Must only be finished after at least one input; `combine_values` upholds
/// this by creating accumulators lazily, on a group's first value.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuelStats;

impl CombineFn<i32, FuelStatsAcc, FuelSummary> for FuelStats {
    fn create(&self) -> FuelStatsAcc {
        FuelStatsAcc::default()
    }

    fn add_input(&self, acc: &mut FuelStatsAcc, v: i32) {
        acc.count += 1;
        acc.total += i64::from(v);
        acc.max = acc.max.max(v);
        acc.min = acc.min.min(v);
    }

    fn merge(&self, acc: &mut FuelStatsAcc, other: FuelStatsAcc) {
        acc.count += other.count;
        acc.total += other.total;
        acc.max = acc.max.max(other.max);
        acc.min = acc.min.min(other.min);
    }

    fn finish(&self, acc: FuelStatsAcc) -> FuelSummary {
        FuelSummary {
            max: acc.max,
            min: acc.min,
            avg: acc.total as f64 / f64::from(acc.count),
        }
    }
}
