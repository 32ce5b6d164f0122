//! Vehicle construction tests
//!
//! Checks the category table and the state a fresh vehicle starts in.

use parking_garage::garage::{
    spot_sizes, CategoryUnits, SpotTier, Vehicle, VehicleCategory,
};

#[test]
fn test_vehicle_categories_from_tokens() {
    assert_eq!(Vehicle::create("motorcycle").category(), VehicleCategory::TwoWheeled);
    assert_eq!(Vehicle::create("car").category(), VehicleCategory::Standard);
    assert_eq!(Vehicle::create("bus").category(), VehicleCategory::Oversized);
}

#[test]
fn test_unknown_tokens_are_invalid() {
    for token in ["truck", "Car", "BUS", " car", ""] {
        let vehicle = Vehicle::create(token);
        assert_eq!(vehicle.category(), VehicleCategory::Invalid, "token {:?}", token);
        assert_eq!(vehicle.capacity_units(), 0);
        assert!(vehicle.eligible_tiers().is_empty());
    }
}

#[test]
fn test_capacity_units_per_category() {
    assert_eq!(Vehicle::create("motorcycle").capacity_units(), 1);
    assert_eq!(Vehicle::create("car").capacity_units(), 1);
    assert_eq!(Vehicle::create("bus").capacity_units(), 5);
}

#[test]
fn test_eligible_tiers_per_category() {
    assert_eq!(
        Vehicle::create("motorcycle").eligible_tiers(),
        &[SpotTier::Small, SpotTier::Medium, SpotTier::Large]
    );
    assert_eq!(
        Vehicle::create("car").eligible_tiers(),
        &[SpotTier::Medium, SpotTier::Large]
    );
    assert_eq!(Vehicle::create("bus").eligible_tiers(), &[SpotTier::Large]);
}

#[test]
fn test_new_vehicle_is_not_parked() {
    let vehicle = Vehicle::create("car");
    assert!(!vehicle.is_parked());
    assert_eq!(vehicle.location_id(), None);
    assert_eq!(vehicle.granted_tier(), None);
}

#[test]
fn test_vehicle_ids_are_unique() {
    let ids: Vec<_> = (0..100).map(|_| Vehicle::create("car").id()).collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_custom_unit_table() {
    let units = CategoryUnits {
        two_wheeled: 1,
        standard: 2,
        oversized: 8,
    };
    assert_eq!(Vehicle::create_with_units("car", &units).capacity_units(), 2);
    assert_eq!(Vehicle::create_with_units("bus", &units).capacity_units(), 8);
    assert_eq!(Vehicle::create_with_units("van", &units).capacity_units(), 0);
}

#[test]
fn test_spot_sizes_table() {
    let table = spot_sizes();
    assert_eq!(table.len(), 3);
    assert_eq!(table[0].0.token(), "motorcycle");
    assert_eq!(table[0].1, &[SpotTier::Small, SpotTier::Medium, SpotTier::Large]);
    assert_eq!(table[1].0.token(), "car");
    assert_eq!(table[1].1, &[SpotTier::Medium, SpotTier::Large]);
    assert_eq!(table[2].0.token(), "bus");
    assert_eq!(table[2].1, &[SpotTier::Large]);
}
