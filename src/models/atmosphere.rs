//! Atmospheric models.
//!
//! This module contains models for ambient air, such as moist air humidity.

pub mod moist_air;

pub use moist_air::{MoistAir, MoistAirInput, MoistAirState, Moisture};
