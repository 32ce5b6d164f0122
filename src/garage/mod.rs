//! Parking garage allocation
//!
//! Vehicles of different size classes are admitted into tiered spots and
//! released again. All capacity accounting lives in `Facility`; this module
//! has no I/O and no dependency on the command line driver.

mod config;
mod error;
mod facility;
mod types;
mod vehicle;

pub use config::{
    CategoryUnits, FacilityConfig, DEFAULT_LOCATION_IDS, DEFAULT_ROWS_PER_LEVEL,
    DEFAULT_TOTAL_LEVELS, DEFAULT_TOTAL_ROWS, DEFAULT_TOTAL_UNITS, DEFAULT_UNITS_PER_ROW,
    DEFAULT_UNITS_PER_TIER,
};
pub use error::{ParkingError, MSG_CAPACITY_EXHAUSTED, MSG_INVALID_CATEGORY};
pub use facility::{Facility, ReleasePolicy};
pub use types::{spot_sizes, SpotSelection, SpotTier, VehicleCategory, VehicleId, NO_SPOTS_AVAILABLE};
pub use vehicle::Vehicle;
