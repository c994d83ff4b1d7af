//! # Twine Humidity
//!
//! Moist air humidity conversions and models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: The numeric humidity engine and supporting utilities.
//!
//! ## Quick start
//!
//! ```
//! use twine_humidity::support::humidity::{HumidityEngine, Phase};
//!
//! let engine = HumidityEngine::default();
//!
//! let vapor_pressure = engine.vapor_pressure_from_relative_humidity(50.0, 20.0);
//! let dew_point = engine.dew_point_from_vapor_pressure(vapor_pressure, Phase::Water);
//!
//! assert!(dew_point > 9.0 && dew_point < 10.0);
//! ```
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
