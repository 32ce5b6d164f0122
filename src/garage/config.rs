//! Facility sizing
//!
//! Every capacity figure the facility starts from lives here so a garage of a
//! different size needs no code changes. The defaults describe the standard
//! ten-level structure.

use anyhow::{bail, Result};

use super::types::VehicleCategory;

/// Total capacity units across all tiers
pub const DEFAULT_TOTAL_UNITS: i64 = 7500;
/// Capacity units in each spot tier
pub const DEFAULT_UNITS_PER_TIER: i64 = 2500;
/// Rows across all levels
pub const DEFAULT_TOTAL_ROWS: i64 = 500;
/// Levels in the structure
pub const DEFAULT_TOTAL_LEVELS: i64 = 10;
/// Location ids available for assignment
pub const DEFAULT_LOCATION_IDS: i64 = 5000;
/// A row is consumed each time the remaining units hit a multiple of this
pub const DEFAULT_UNITS_PER_ROW: i64 = 15;
/// A level is consumed each time the remaining rows hit a multiple of this
pub const DEFAULT_ROWS_PER_LEVEL: i64 = 50;

/// Capacity units consumed by each accepted category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryUnits {
    pub two_wheeled: i64,
    pub standard: i64,
    pub oversized: i64,
}

impl Default for CategoryUnits {
    fn default() -> Self {
        Self {
            two_wheeled: 1,
            standard: 1,
            oversized: 5,
        }
    }
}

impl CategoryUnits {
    /// Units for a category; invalid vehicles take none
    pub fn units_for(&self, category: VehicleCategory) -> i64 {
        match category {
            VehicleCategory::TwoWheeled => self.two_wheeled,
            VehicleCategory::Standard => self.standard,
            VehicleCategory::Oversized => self.oversized,
            VehicleCategory::Invalid => 0,
        }
    }
}

/// Starting capacity of a facility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityConfig {
    pub total_units: i64,
    pub units_per_tier: i64,
    pub total_rows: i64,
    pub total_levels: i64,
    pub location_ids: i64,
    pub units_per_row: i64,
    pub rows_per_level: i64,
    pub units_per_category: CategoryUnits,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            total_units: DEFAULT_TOTAL_UNITS,
            units_per_tier: DEFAULT_UNITS_PER_TIER,
            total_rows: DEFAULT_TOTAL_ROWS,
            total_levels: DEFAULT_TOTAL_LEVELS,
            location_ids: DEFAULT_LOCATION_IDS,
            units_per_row: DEFAULT_UNITS_PER_ROW,
            rows_per_level: DEFAULT_ROWS_PER_LEVEL,
            units_per_category: CategoryUnits::default(),
        }
    }
}

impl FacilityConfig {
    /// Check the configuration can back a facility
    pub fn validate(&self) -> Result<()> {
        let capacities = [
            ("total_units", self.total_units),
            ("units_per_tier", self.units_per_tier),
            ("total_rows", self.total_rows),
            ("total_levels", self.total_levels),
            ("location_ids", self.location_ids),
        ];
        for (name, value) in capacities {
            if value < 0 {
                bail!("{} must not be negative (got {})", name, value);
            }
        }

        if self.units_per_row <= 0 {
            bail!("units_per_row must be positive (got {})", self.units_per_row);
        }
        if self.rows_per_level <= 0 {
            bail!("rows_per_level must be positive (got {})", self.rows_per_level);
        }

        for category in VehicleCategory::ACCEPTED {
            let units = self.units_per_category.units_for(category);
            if units <= 0 {
                bail!("{} must consume a positive number of units (got {})", category, units);
            }
        }

        Ok(())
    }
}
