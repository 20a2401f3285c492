//! Loads the two datasets and prints the fuel-economy report: per-make
//! combined-MPG statistics, then each country's top cars.

use anyhow::Result;
use fuelflow::{
    cars_by_country_nested, fuel_summary_by_make, read_cars, read_manufacturers,
    render_car_groups, render_fuel_report,
};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let fuel_path = args.next().unwrap_or_else(|| "fuel.csv".to_string());
    let makers_path = args
        .next()
        .unwrap_or_else(|| "manufacturers.csv".to_string());

    let cars = read_cars(&fuel_path)?;
    let manufacturers = read_manufacturers(&makers_path)?;

    print!("{}", render_fuel_report(&fuel_summary_by_make(&cars)));

    let by_country = cars_by_country_nested(&manufacturers, &cars);
    print!("{}", render_car_groups(&by_country, 3));

    Ok(())
}
