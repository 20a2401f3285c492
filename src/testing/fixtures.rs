//! Pre-built sample datasets for tests.

use crate::record::{Car, Manufacturer};

fn car(
    year: i32,
    manufacturer: &str,
    name: &str,
    displacement: f64,
    cylinders: u32,
    city: i32,
    highway: i32,
    combined: i32,
) -> Car {
    Car {
        year,
        manufacturer: manufacturer.to_string(),
        name: name.to_string(),
        displacement,
        cylinders,
        city,
        highway,
        combined,
    }
}

/// Sample vehicle records.
///
/// Deliberate edge cases: a mixed-case make ("HONDA") that only the
/// uppercasing group view folds into "Honda" and that matches no
/// manufacturer row, and two Volkswagen model years whose manufacturer rows
/// differ in headquarters.
pub fn sample_cars() -> Vec<Car> {
    vec![
        car(2020, "Honda", "Civic", 2.0, 4, 28, 37, 32),
        car(2020, "Honda", "Accord", 1.5, 4, 25, 34, 28),
        car(2019, "Ford", "Fusion", 2.5, 4, 21, 31, 25),
        car(2019, "Ford", "Escape", 1.5, 3, 26, 31, 28),
        car(2020, "BMW", "330i", 2.0, 4, 26, 36, 30),
        car(2019, "Volkswagen", "Jetta", 1.4, 4, 30, 40, 34),
        car(2020, "Volkswagen", "Golf", 1.4, 4, 29, 36, 32),
        car(2020, "HONDA", "Insight", 1.5, 4, 51, 45, 48),
    ]
}

/// Sample manufacturer records.
///
/// Volkswagen appears for two model years with different headquarters, and
/// Tesla has no cars at all.
pub fn sample_manufacturers() -> Vec<Manufacturer> {
    let m = |name: &str, headquarters: &str, year: i32| Manufacturer {
        name: name.to_string(),
        headquarters: headquarters.to_string(),
        year,
    };
    vec![
        m("Honda", "Japan", 2020),
        m("Ford", "USA", 2019),
        m("BMW", "Germany", 2020),
        m("Volkswagen", "Germany", 2019),
        m("Volkswagen", "USA", 2020),
        m("Tesla", "USA", 2020),
    ]
}

/// Raw vehicle CSV matching [`sample_cars`], with a header line and a stray
/// blank line the decoder must skip.
pub fn fuel_csv_text() -> String {
    [
        "year,manufacturer,name,displacement,cylinders,city,highway,combined",
        "2020,Honda,Civic,2.0,4,28,37,32",
        "2020,Honda,Accord,1.5,4,25,34,28",
        "2019,Ford,Fusion,2.5,4,21,31,25",
        "2019,Ford,Escape,1.5,3,26,31,28",
        "2020,BMW,330i,2.0,4,26,36,30",
        "2019,Volkswagen,Jetta,1.4,4,30,40,34",
        "2020,Volkswagen,Golf,1.4,4,29,36,32",
        "",
        "2020,HONDA,Insight,1.5,4,51,45,48",
        "",
    ]
    .join("\n")
}

/// Raw manufacturer CSV matching [`sample_manufacturers`]; no header line.
pub fn manufacturers_csv_text() -> String {
    [
        "Honda,Japan,2020",
        "Ford,USA,2019",
        "BMW,Germany,2020",
        "Volkswagen,Germany,2019",
        "Volkswagen,USA,2020",
        "Tesla,USA,2020",
        "",
    ]
    .join("\n")
}
