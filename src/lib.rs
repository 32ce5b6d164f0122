//! Parking Garage Library
//!
//! Spot allocation for a multi-level parking structure, usable on its own or
//! through the headless simulation binary.

pub mod garage;
