//! Moist air humidity model.
//!
//! [`MoistAir`] takes the air temperature and any one measure of moisture and
//! returns every equivalent measure at once.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_humidity::models::atmosphere::{MoistAir, MoistAirInput, Moisture};
//! use uom::si::{
//!     f64::{Pressure, Ratio, ThermodynamicTemperature},
//!     pressure::millibar,
//!     ratio::percent,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let model = MoistAir::new(Pressure::new::<millibar>(1010.0));
//!
//! let state = model
//!     .call(&MoistAirInput {
//!         temperature: ThermodynamicTemperature::new::<degree_celsius>(20.0),
//!         moisture: Moisture::RelativeHumidity(Ratio::new::<percent>(50.0)),
//!     })
//!     .unwrap();
//!
//! let dew_point = state.dew_point.get::<degree_celsius>();
//! assert!(dew_point > 9.0 && dew_point < 10.0);
//! ```

use twine_core::Model;
use uom::si::{
    f64::{MassDensity, Pressure, Ratio, ThermodynamicTemperature},
    mass_density::gram_per_cubic_meter,
    pressure::millibar,
    ratio::{part_per_million, percent},
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use crate::support::humidity::{DRY_AIR_MOLECULAR_WEIGHT, HumidityEngine, HumidityError, Phase};

/// A single measure of the moisture content of air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Moisture {
    /// Partial pressure of water vapor.
    VaporPressure(Pressure),
    /// Dew point, or frost point below freezing.
    DewPoint(ThermodynamicTemperature),
    /// Mass of water vapor per mass of dry air.
    MixingRatio(Ratio),
    /// Vapor pressure as a fraction of saturation pressure.
    RelativeHumidity(Ratio),
    /// Mass of water vapor per volume of air.
    AbsoluteHumidity(MassDensity),
}

/// Input to the [`MoistAir`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirInput {
    /// Dry-bulb air temperature.
    pub temperature: ThermodynamicTemperature,
    pub moisture: Moisture,
}

/// Every measure of moisture for air at a given temperature and pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAirState {
    pub temperature: ThermodynamicTemperature,
    pub saturation_pressure: Pressure,
    pub vapor_pressure: Pressure,
    /// Dew point over water at or above 0 °C air temperature, frost point below.
    pub dew_point: ThermodynamicTemperature,
    /// Mixing ratio by weight relative to dry air.
    pub mixing_ratio: Ratio,
    pub relative_humidity: Ratio,
    pub absolute_humidity: MassDensity,
}

/// Moist air at a fixed ambient pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    engine: HumidityEngine,
}

impl MoistAir {
    /// Creates a model at the given ambient air pressure.
    #[must_use]
    pub fn new(air_pressure: Pressure) -> Self {
        Self::with_engine(HumidityEngine::new(air_pressure.get::<millibar>()))
    }

    /// Creates a model backed by an existing engine and its settings.
    #[must_use]
    pub fn with_engine(engine: HumidityEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &HumidityEngine {
        &self.engine
    }
}

impl Default for MoistAir {
    fn default() -> Self {
        Self::with_engine(HumidityEngine::default())
    }
}

impl Model for MoistAir {
    type Input = MoistAirInput;
    type Output = MoistAirState;
    type Error = HumidityError;

    /// Resolves all moisture measures from the given one.
    ///
    /// The dew point phase follows the air temperature unless the dew point
    /// itself is given.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let checked = self.engine.checked()?;

        let t = input.temperature.get::<degree_celsius>();
        let t_k = input.temperature.get::<kelvin>();
        let phase = Phase::from_celsius(t);

        let (vapor_pressure, dew_point) = match input.moisture {
            Moisture::VaporPressure(e) => {
                let e = e.get::<millibar>();
                (e, checked.dew_point_from_vapor_pressure(e, phase)?)
            }
            Moisture::DewPoint(dp) => {
                let dp = dp.get::<degree_celsius>();
                (checked.vapor_pressure_from_dew_point(dp)?, dp)
            }
            Moisture::MixingRatio(r) => {
                let r = r.get::<part_per_million>();
                (
                    checked.vapor_pressure_from_mixing_ratio(r)?,
                    checked.dew_point_from_mixing_ratio(r, phase)?,
                )
            }
            Moisture::RelativeHumidity(rh) => {
                let rh = rh.get::<percent>();
                (
                    checked.vapor_pressure_from_relative_humidity(rh, t)?,
                    checked.dew_point_from_relative_humidity(rh, t)?,
                )
            }
            Moisture::AbsoluteHumidity(rho) => {
                let rho = rho.get::<gram_per_cubic_meter>();
                (
                    checked.vapor_pressure_from_absolute_humidity(rho, t_k)?,
                    checked.dew_point_from_absolute_humidity(rho, t_k)?,
                )
            }
        };

        let saturation_pressure = checked.saturation_pressure(t)?;
        let mixing_ratio =
            checked.mixing_ratio_from_vapor_pressure(vapor_pressure, DRY_AIR_MOLECULAR_WEIGHT)?;
        let relative_humidity = checked.relative_humidity_from_vapor_pressure(vapor_pressure, t)?;
        let absolute_humidity = checked.absolute_humidity_from_vapor_pressure(vapor_pressure, t_k)?;

        Ok(MoistAirState {
            temperature: input.temperature,
            saturation_pressure: Pressure::new::<millibar>(saturation_pressure),
            vapor_pressure: Pressure::new::<millibar>(vapor_pressure),
            dew_point: ThermodynamicTemperature::new::<degree_celsius>(dew_point),
            mixing_ratio: Ratio::new::<part_per_million>(mixing_ratio),
            relative_humidity: Ratio::new::<percent>(relative_humidity),
            absolute_humidity: MassDensity::new::<gram_per_cubic_meter>(absolute_humidity),
        })
    }
}
