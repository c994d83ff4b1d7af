//! Moist air humidity conversions.
//!
//! Atmospheric moisture can be expressed as a vapor pressure, a dew or frost
//! point, a mixing ratio, a relative humidity, or an absolute humidity.
//! [`HumidityEngine`] converts between all of them at a configurable ambient
//! air pressure using the Arden Buck saturation equations with an enhancement
//! factor correction for moist air.
//!
//! # Overview
//!
//! - **Engine**: [`HumidityEngine`] evaluates plain `f64` scalars and never fails;
//!   invalid inputs propagate as `NaN` or infinity.
//! - **Phases**: [`Phase`] selects water or ice coefficients
//!   ([`CoefficientSet`], [`EnhancementCoefficientSet`]).
//! - **Dew points**: solved by bisection on the enhanced saturation curve,
//!   configured with [`DewPointConfig`].
//! - **Validation**: [`Checked`] wraps the engine and returns [`HumidityError`]
//!   instead of `NaN`.
//!
//! # Example
//!
//! ```
//! use twine_humidity::support::humidity::{HumidityEngine, HumidityError};
//!
//! fn main() -> Result<(), HumidityError> {
//!     let mut engine = HumidityEngine::default();
//!     engine.set_air_pressure(850.0);
//!
//!     // Unchecked: plain arithmetic.
//!     let mixing_ratio = engine.mixing_ratio_from_relative_humidity(65.0, 18.0);
//!     assert!(mixing_ratio > 0.0);
//!
//!     // Checked: inputs are validated before evaluating.
//!     let checked = engine.checked()?;
//!     assert!(checked.dew_point_from_relative_humidity(-5.0, 18.0).is_err());
//!
//!     Ok(())
//! }
//! ```

mod checked;
mod dew_point;
mod engine;
mod phase;

pub use checked::{Checked, HumidityError};
pub use dew_point::{DewPointConfig, DewPointError};
pub use engine::{DEFAULT_AIR_PRESSURE, DRY_AIR_MOLECULAR_WEIGHT, HumidityEngine};
pub use phase::{CoefficientSet, EnhancementCoefficientSet, Phase};
