//! A vehicle asking for (or holding) a spot in the garage

use super::config::CategoryUnits;
use super::types::{SpotTier, VehicleCategory, VehicleId};

/// A vehicle in the garage
///
/// Category, capacity units and eligible tiers are fixed at construction.
/// Only the parked state, location id and granted tier change afterwards,
/// and only the facility changes them.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    category: VehicleCategory,
    capacity_units: i64,
    eligible_tiers: &'static [SpotTier],
    pub(crate) location_id: Option<i64>,
    pub(crate) is_parked: bool,
    /// Tier deducted at the most recent admission
    pub(crate) granted_tier: Option<SpotTier>,
}

impl Vehicle {
    /// Build a vehicle from a category token using the standard unit table.
    /// Unknown tokens produce an invalid vehicle rather than an error.
    pub fn create(token: &str) -> Self {
        Self::create_with_units(token, &CategoryUnits::default())
    }

    /// Build a vehicle using a facility's own unit table
    pub fn create_with_units(token: &str, units: &CategoryUnits) -> Self {
        let category = VehicleCategory::from_token(token);
        Self {
            id: VehicleId::next(),
            category,
            capacity_units: units.units_for(category),
            eligible_tiers: category.eligible_tiers(),
            location_id: None,
            is_parked: false,
            granted_tier: None,
        }
    }

    pub fn id(&self) -> VehicleId {
        self.id
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn capacity_units(&self) -> i64 {
        self.capacity_units
    }

    pub fn eligible_tiers(&self) -> &'static [SpotTier] {
        self.eligible_tiers
    }

    /// Location assigned at the latest admission. Release leaves it in place.
    pub fn location_id(&self) -> Option<i64> {
        self.location_id
    }

    pub fn is_parked(&self) -> bool {
        self.is_parked
    }

    pub fn granted_tier(&self) -> Option<SpotTier> {
        self.granted_tier
    }
}
