//! Core types for the parking garage
//!
//! Identifiers, vehicle categories and spot tiers. These are plain values
//! with no dependency on the facility state.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of vehicle identifiers for the whole process
static NEXT_VEHICLE_ID: AtomicUsize = AtomicUsize::new(0);

/// Returned by spot selection when no eligible tier has capacity left
pub const NO_SPOTS_AVAILABLE: &str = "There are no available spots of this size.";

/// A unique identifier for a vehicle
/// This is a simple wrapper around a usize for type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

impl VehicleId {
    /// Generate a fresh id, distinct from every id generated before it
    pub fn next() -> Self {
        VehicleId(NEXT_VEHICLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Size class of a parking spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpotTier {
    Small,
    Medium,
    Large,
}

impl SpotTier {
    pub const ALL: [SpotTier; 3] = [SpotTier::Small, SpotTier::Medium, SpotTier::Large];

    pub fn name(&self) -> &'static str {
        match self {
            SpotTier::Small => "small",
            SpotTier::Medium => "medium",
            SpotTier::Large => "large",
        }
    }

    /// Position of the tier in per-tier counter arrays
    pub(crate) fn index(&self) -> usize {
        match self {
            SpotTier::Small => 0,
            SpotTier::Medium => 1,
            SpotTier::Large => 2,
        }
    }
}

impl fmt::Display for SpotTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of vehicle asking for a spot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    /// Motorcycles
    TwoWheeled,
    /// Cars
    Standard,
    /// Buses
    Oversized,
    /// Anything that did not match an accepted token
    Invalid,
}

impl VehicleCategory {
    /// Categories a caller can actually request
    pub const ACCEPTED: [VehicleCategory; 3] = [
        VehicleCategory::TwoWheeled,
        VehicleCategory::Standard,
        VehicleCategory::Oversized,
    ];

    /// Classify a category token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Self {
        Self::ACCEPTED
            .into_iter()
            .find(|category| category.token() == token)
            .unwrap_or(VehicleCategory::Invalid)
    }

    pub fn token(&self) -> &'static str {
        match self {
            VehicleCategory::TwoWheeled => "motorcycle",
            VehicleCategory::Standard => "car",
            VehicleCategory::Oversized => "bus",
            VehicleCategory::Invalid => "INVALID VEHICLE TYPE",
        }
    }

    /// Tiers this category may park in, most preferred first
    pub fn eligible_tiers(&self) -> &'static [SpotTier] {
        match self {
            VehicleCategory::TwoWheeled => &[SpotTier::Small, SpotTier::Medium, SpotTier::Large],
            VehicleCategory::Standard => &[SpotTier::Medium, SpotTier::Large],
            VehicleCategory::Oversized => &[SpotTier::Large],
            VehicleCategory::Invalid => &[],
        }
    }

    pub fn is_valid(&self) -> bool {
        *self != VehicleCategory::Invalid
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// The full category to spot size table for every accepted category
pub fn spot_sizes() -> Vec<(VehicleCategory, &'static [SpotTier])> {
    VehicleCategory::ACCEPTED
        .into_iter()
        .map(|category| (category, category.eligible_tiers()))
        .collect()
}

/// Outcome of picking a tier for a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpotSelection {
    Tier(SpotTier),
    NoneAvailable,
}

impl SpotSelection {
    pub fn tier(&self) -> Option<SpotTier> {
        match self {
            SpotSelection::Tier(tier) => Some(*tier),
            SpotSelection::NoneAvailable => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpotSelection::Tier(tier) => tier.name(),
            SpotSelection::NoneAvailable => NO_SPOTS_AVAILABLE,
        }
    }
}

impl fmt::Display for SpotSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
