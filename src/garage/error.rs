//! Rejection reasons recorded by the facility
//!
//! Admission never fails loudly. A rejected vehicle leaves one of these in
//! `Facility::last_error` and the caller inspects it after the call.

use std::fmt;

pub const MSG_CAPACITY_EXHAUSTED: &str = "Parking structure is full. Sorry!";
pub const MSG_INVALID_CATEGORY: &str =
    "INVALID VEHICLE TYPE. Please enter motorcycle, car, or bus.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParkingError {
    /// Units, rows and levels are all used up
    CapacityExhausted,
    /// The vehicle was built from an unrecognised category token
    InvalidCategory,
}

impl ParkingError {
    pub fn message(&self) -> &'static str {
        match self {
            ParkingError::CapacityExhausted => MSG_CAPACITY_EXHAUSTED,
            ParkingError::InvalidCategory => MSG_INVALID_CATEGORY,
        }
    }
}

impl fmt::Display for ParkingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ParkingError {}
