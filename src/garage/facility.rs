//! The parking facility: admission, release and capacity accounting
//!
//! The facility owns every capacity counter. Counters move only through
//! `admit`, `release` and `reset` (plus `decrement_location_totals`, which
//! `admit` drives and which stays public for simulation).

use anyhow::{Context, Result};
use log::{debug, warn};

use super::config::FacilityConfig;
use super::error::ParkingError;
use super::types::{SpotSelection, SpotTier, VehicleId};
use super::vehicle::Vehicle;

/// How `release` decides which tier gets its unit back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleasePolicy {
    /// Re-run tier selection against current availability. This can credit a
    /// different tier from the one charged at admission.
    #[default]
    RecomputeByAvailability,
    /// Credit the tier recorded on the vehicle when it was admitted
    GrantedTier,
}

/// A multi-level parking structure with tiered spots
#[derive(Debug, Clone)]
pub struct Facility {
    config: FacilityConfig,
    release_policy: ReleasePolicy,

    /// Snapshots of admitted vehicles, in admission order
    parked_vehicles: Vec<Vehicle>,

    is_full: bool,

    /// Most recent rejection. Successful admissions leave it alone.
    last_error: Option<ParkingError>,

    remaining_location_ids: i64,
    remaining_units_total: i64,
    /// Indexed by `SpotTier::index`
    remaining_units_by_tier: [i64; 3],
    remaining_rows: i64,
    remaining_levels: i64,
}

impl Default for Facility {
    fn default() -> Self {
        Self::new()
    }
}

impl Facility {
    fn new_internal(config: FacilityConfig, release_policy: ReleasePolicy) -> Self {
        let mut facility = Self {
            config,
            release_policy,
            parked_vehicles: Vec::new(),
            is_full: false,
            last_error: None,
            remaining_location_ids: 0,
            remaining_units_total: 0,
            remaining_units_by_tier: [0; 3],
            remaining_rows: 0,
            remaining_levels: 0,
        };
        facility.reset();
        facility
    }

    /// Create a facility with the standard capacity
    pub fn new() -> Self {
        Self::new_internal(FacilityConfig::default(), ReleasePolicy::default())
    }

    /// Create a facility sized by `config`
    pub fn with_config(config: FacilityConfig) -> Result<Self> {
        config.validate().context("Invalid facility configuration")?;
        Ok(Self::new_internal(config, ReleasePolicy::default()))
    }

    /// Choose how released vehicles give their tier unit back
    pub fn with_release_policy(mut self, release_policy: ReleasePolicy) -> Self {
        self.release_policy = release_policy;
        self
    }

    /// Build a vehicle whose capacity units follow this facility's config
    pub fn create_vehicle(&self, token: &str) -> Vehicle {
        Vehicle::create_with_units(token, &self.config.units_per_category)
    }

    /// Try to park a vehicle
    ///
    /// Rejections are recorded in `last_error` (and `is_full` when the
    /// structure is exhausted); nothing is returned. The structure check runs
    /// first, so an invalid vehicle arriving at a full garage only ever sees
    /// the capacity error.
    pub fn admit(&mut self, vehicle: &mut Vehicle) {
        if self.remaining_units_total == 0 && self.remaining_rows == 0 && self.remaining_levels == 0
        {
            self.is_full = true;
            self.last_error = Some(ParkingError::CapacityExhausted);
            warn!(
                "Rejected {} {:?}: {}",
                vehicle.category(),
                vehicle.id(),
                ParkingError::CapacityExhausted
            );
            return;
        }

        if !vehicle.category().is_valid() {
            self.last_error = Some(ParkingError::InvalidCategory);
            warn!("Rejected vehicle {:?}: {}", vehicle.id(), ParkingError::InvalidCategory);
            return;
        }

        vehicle.is_parked = true;

        let selection = self.select_correct_spot_type(vehicle);
        self.decrement_location_totals(vehicle, selection);

        debug!(
            "Admitted {} {:?} at location {:?} ({})",
            vehicle.category(),
            vehicle.id(),
            vehicle.location_id(),
            selection
        );

        match self.parked_vehicles.iter_mut().find(|p| p.id() == vehicle.id()) {
            Some(existing) => {
                warn!("Vehicle {:?} admitted while already parked", vehicle.id());
                *existing = vehicle.clone();
            }
            None => self.parked_vehicles.push(vehicle.clone()),
        }
    }

    /// Pick the first eligible tier that still has units, in preference order.
    /// Never changes facility state.
    pub fn select_correct_spot_type(&self, vehicle: &Vehicle) -> SpotSelection {
        vehicle
            .eligible_tiers()
            .iter()
            .copied()
            .find(|tier| self.remaining_units_for(*tier) != 0)
            .map(SpotSelection::Tier)
            .unwrap_or(SpotSelection::NoneAvailable)
    }

    /// Charge one admission against the counters
    ///
    /// Only the tier counter depends on `selection`; total units, location
    /// ids, rows and levels are charged even when no tier had room. The row
    /// and level checks are plain modulus tests, so they also fire at zero.
    pub fn decrement_location_totals(&mut self, vehicle: &mut Vehicle, selection: SpotSelection) {
        if let Some(tier) = selection.tier() {
            self.remaining_units_by_tier[tier.index()] -= 1;
        }
        vehicle.granted_tier = selection.tier();

        self.remaining_units_total -= vehicle.capacity_units();
        self.remaining_location_ids -= 1;
        vehicle.location_id = Some(self.config.location_ids - self.remaining_location_ids);

        if self.remaining_units_total % self.config.units_per_row == 0 {
            self.remaining_rows -= 1;
        }

        if self.remaining_rows % self.config.rows_per_level == 0 {
            self.remaining_levels -= 1;
        }
    }

    /// Give a vehicle's capacity back
    ///
    /// Counters are restored from the vehicle passed in even if it is not in
    /// the parked list. Rows and levels are never given back.
    pub fn release(&mut self, vehicle: &mut Vehicle) {
        let id = vehicle.id();
        let before = self.parked_vehicles.len();
        self.parked_vehicles.retain(|p| p.id() != id);
        if self.parked_vehicles.len() == before {
            warn!("Releasing vehicle {:?} that is not parked here", id);
        }

        let selection = match self.release_policy {
            ReleasePolicy::RecomputeByAvailability => self.select_correct_spot_type(vehicle),
            ReleasePolicy::GrantedTier => vehicle
                .granted_tier
                .map(SpotSelection::Tier)
                .unwrap_or(SpotSelection::NoneAvailable),
        };

        vehicle.is_parked = false;
        vehicle.granted_tier = None;

        self.remaining_units_total += vehicle.capacity_units();
        self.remaining_location_ids += 1;

        match selection.tier() {
            Some(tier) => self.remaining_units_by_tier[tier.index()] += 1,
            None => warn!(
                "No tier to credit for {} {:?}; tier counters left unchanged",
                vehicle.category(),
                vehicle.id()
            ),
        }

        debug!("Released {} {:?} ({})", vehicle.category(), vehicle.id(), selection);
    }

    /// Restore every counter and flag to its starting value. Vehicles handed
    /// out earlier keep whatever state they had.
    pub fn reset(&mut self) {
        let config = &self.config;
        self.parked_vehicles.clear();
        self.is_full = false;
        self.last_error = None;
        self.remaining_location_ids = config.location_ids;
        self.remaining_units_total = config.total_units;
        self.remaining_units_by_tier = [config.units_per_tier; 3];
        self.remaining_rows = config.total_rows;
        self.remaining_levels = config.total_levels;
    }

    /// Forget the last rejection. Callers clear it before an admission whose
    /// outcome they want to read.
    pub fn clear_last_error(&mut self) {
        self.last_error = None;
    }

    pub fn config(&self) -> &FacilityConfig {
        &self.config
    }

    pub fn release_policy(&self) -> ReleasePolicy {
        self.release_policy
    }

    pub fn parked_vehicles(&self) -> &[Vehicle] {
        &self.parked_vehicles
    }

    pub fn parked_count(&self) -> usize {
        self.parked_vehicles.len()
    }

    pub fn is_parked(&self, id: VehicleId) -> bool {
        self.parked_vehicles.iter().any(|p| p.id() == id)
    }

    pub fn is_full(&self) -> bool {
        self.is_full
    }

    pub fn last_error(&self) -> Option<ParkingError> {
        self.last_error
    }

    pub fn remaining_location_ids(&self) -> i64 {
        self.remaining_location_ids
    }

    pub fn remaining_units_total(&self) -> i64 {
        self.remaining_units_total
    }

    pub fn remaining_units_for(&self, tier: SpotTier) -> i64 {
        self.remaining_units_by_tier[tier.index()]
    }

    pub fn remaining_rows(&self) -> i64 {
        self.remaining_rows
    }

    pub fn remaining_levels(&self) -> i64 {
        self.remaining_levels
    }

    /// One-line description of the counters
    pub fn summary(&self) -> String {
        format!(
            "Parked: {} | Units: {} (small {}, medium {}, large {}) | Rows: {} | Levels: {} | Location ids: {} | Full: {}",
            self.parked_count(),
            self.remaining_units_total,
            self.remaining_units_for(SpotTier::Small),
            self.remaining_units_for(SpotTier::Medium),
            self.remaining_units_for(SpotTier::Large),
            self.remaining_rows,
            self.remaining_levels,
            self.remaining_location_ids,
            self.is_full
        )
    }

    /// Print a summary of the facility state
    pub fn print_summary(&self) {
        println!("=== Parking Garage Summary ===");
        println!("Parked vehicles: {}", self.parked_count());
        println!("Remaining units: {}", self.remaining_units_total);
        for tier in SpotTier::ALL {
            println!("  {:<6} {}", tier.name(), self.remaining_units_for(tier));
        }
        println!("Remaining rows: {}", self.remaining_rows);
        println!("Remaining levels: {}", self.remaining_levels);
        println!("Remaining location ids: {}", self.remaining_location_ids);
        println!("Full: {}", self.is_full);
        match self.last_error {
            Some(error) => println!("Last error: {}", error),
            None => println!("Last error: none"),
        }
    }
}
