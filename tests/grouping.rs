use fuelflow::testing::fixtures::sample_cars;
use fuelflow::{from_vec, Car};
use std::collections::HashMap;

#[test]
fn group_by_is_a_set_partition_of_the_input() {
    let cars = sample_cars();
    let groups = from_vec(cars.clone()).group_by(|c: &Car| c.manufacturer.clone());

    let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
    assert_eq!(total, cars.len());

    // Every record appears in exactly one group, and in that group's
    // members exactly once.
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (_, members) in groups.iter() {
        for car in members {
            *seen.entry(car.name.clone()).or_default() += 1;
        }
    }
    for car in &cars {
        assert_eq!(seen.get(&car.name), Some(&1), "car {} miscounted", car.name);
    }
}

#[test]
fn groups_appear_in_first_seen_order() {
    let groups = from_vec(sample_cars()).group_by(|c: &Car| c.manufacturer.clone());
    let keys: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["Honda", "Ford", "BMW", "Volkswagen", "HONDA"]
    );
}

#[test]
fn members_keep_source_order_unmodified() {
    let cars = sample_cars();
    let groups = from_vec(cars.clone()).group_by(|c: &Car| c.manufacturer.clone());
    let honda = groups
        .iter()
        .find(|(k, _)| k == "Honda")
        .expect("Honda group");
    assert_eq!(honda.1.to_vec(), vec![cars[0].clone(), cars[1].clone()]);
}

#[test]
fn derived_uppercase_key_merges_case_variants() {
    let groups = from_vec(sample_cars()).group_by(|c: &Car| c.manufacturer.to_uppercase());
    let honda = groups
        .iter()
        .find(|(k, _)| k == "HONDA")
        .expect("HONDA group");
    let names: Vec<&str> = honda.1.iter().map(|c| c.name.as_str()).collect();
    // "Honda" and "HONDA" rows fold into one group under the derived key.
    assert_eq!(names, vec!["Civic", "Accord", "Insight"]);
}

#[test]
fn flatten_members_concatenates_in_member_order() {
    let nested = from_vec(vec![
        (
            "de",
            vec![("vw", vec![1, 2]), ("bmw", vec![3])],
        ),
        ("jp", vec![("honda", vec![4, 5])]),
        ("us", vec![("tesla", Vec::<i32>::new())]),
    ]);

    let flat = nested.flatten_members().into_vec();
    assert_eq!(
        flat,
        vec![("de", vec![1, 2, 3]), ("jp", vec![4, 5]), ("us", vec![])]
    );
}
