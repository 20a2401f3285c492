use fuelflow::testing::fixtures::{sample_cars, sample_manufacturers};
use fuelflow::{Car, MakeYear, Manufacturer, from_vec};

#[test]
fn inner_join_keys_are_exactly_equal() {
    let cars = from_vec(sample_cars());
    let manufacturers = from_vec(sample_manufacturers());

    let pairs = cars.join_on(
        &manufacturers,
        Car::make_year,
        Manufacturer::make_year,
        |c, m| (c.make_year(), m.make_year()),
    );

    assert!(!pairs.is_empty());
    for (left_key, right_key) in pairs.iter() {
        assert_eq!(left_key, right_key);
    }
}

#[test]
fn inner_join_drops_unmatched_left_records() {
    let cars = from_vec(sample_cars());
    let manufacturers = from_vec(sample_manufacturers());

    // "HONDA" (uppercase) has no manufacturer row; it must not survive.
    let names: Vec<String> = cars
        .join_on(
            &manufacturers,
            Car::make_year,
            Manufacturer::make_year,
            |c, _| c.manufacturer.clone(),
        )
        .into_vec();
    assert!(!names.iter().any(|n| n == "HONDA"));
    // Every other sample car matches exactly one manufacturer row.
    assert_eq!(names.len(), sample_cars().len() - 1);
}

#[test]
fn composite_key_does_not_conflate_years() {
    // Same manufacturer name, two years, headquarters moved in between.
    let manufacturers = from_vec(vec![
        Manufacturer {
            name: "Volkswagen".into(),
            headquarters: "Germany".into(),
            year: 2019,
        },
        Manufacturer {
            name: "Volkswagen".into(),
            headquarters: "USA".into(),
            year: 2020,
        },
    ]);
    let cars = from_vec(vec![Car {
        year: 2020,
        manufacturer: "Volkswagen".into(),
        name: "Golf".into(),
        displacement: 1.4,
        cylinders: 4,
        city: 29,
        highway: 36,
        combined: 32,
    }]);

    let joined: Vec<(String, i32)> = cars
        .join_on(
            &manufacturers,
            Car::make_year,
            Manufacturer::make_year,
            |_, m| (m.headquarters.clone(), m.year),
        )
        .into_vec();

    // Only the 2020 row matches; the 2019 row shares the name but not the year.
    assert_eq!(joined, vec![("USA".to_string(), 2020)]);
}

#[test]
fn composite_key_requires_exact_name_equality() {
    let left = from_vec(vec![MakeYear {
        name: "Honda".into(),
        year: 2020,
    }]);
    let right = from_vec(vec![
        MakeYear {
            name: "honda".into(),
            year: 2020,
        },
        MakeYear {
            name: "Honda".into(),
            year: 2020,
        },
    ]);

    let matched = left.join_on(&right, Clone::clone, Clone::clone, |_, r| r.name.clone());
    assert_eq!(matched.into_vec(), vec!["Honda".to_string()]);
}

#[test]
fn group_join_never_drops_outer_records() {
    let manufacturers = from_vec(sample_manufacturers());
    let cars = from_vec(sample_cars());

    let grouped = manufacturers.group_join(
        &cars,
        |m: &Manufacturer| m.name.clone(),
        |c: &Car| c.manufacturer.clone(),
    );

    assert_eq!(grouped.len(), sample_manufacturers().len());

    // Tesla sold no cars; it still shows up, with an empty nested vector.
    let tesla = grouped
        .iter()
        .find(|(m, _)| m.name == "Tesla")
        .expect("Tesla row retained");
    assert!(tesla.1.is_empty());
}

#[test]
fn group_join_members_keep_inner_source_order() {
    let manufacturers = from_vec(sample_manufacturers());
    let cars = from_vec(sample_cars());

    let grouped = manufacturers.group_join(
        &cars,
        |m: &Manufacturer| m.name.clone(),
        |c: &Car| c.manufacturer.clone(),
    );

    let honda = grouped
        .iter()
        .find(|(m, _)| m.name == "Honda")
        .expect("Honda row");
    let names: Vec<&str> = honda.1.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Civic", "Accord"]);
}

#[test]
fn join_emission_order_is_left_then_right_source_order() {
    let left = from_vec(vec!["a", "b", "a"]);
    let right = from_vec(vec![("a", 1), ("b", 2), ("a", 3)]);

    let out = left.join_on(&right, |l| *l, |r| r.0, |l, r| (*l, r.1));
    assert_eq!(
        out.into_vec(),
        vec![("a", 1), ("a", 3), ("b", 2), ("a", 1), ("a", 3)]
    );
}
