use thiserror::Error;

use crate::support::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

use super::{DewPointError, HumidityEngine, Phase, dew_point, phase::ZERO_CELSIUS_IN_KELVIN};

/// Errors reported by [`Checked`] conversions.
#[derive(Debug, Error)]
pub enum HumidityError {
    /// An input is outside the domain of the conversion.
    #[error("invalid {quantity}: {source}")]
    InvalidInput {
        quantity: &'static str,
        source: ConstraintError,
    },

    /// The vapor pressure would meet or exceed the ambient air pressure.
    #[error("vapor pressure {vapor_pressure} mb is not below air pressure {air_pressure} mb")]
    VaporExceedsAirPressure {
        vapor_pressure: f64,
        air_pressure: f64,
    },

    /// The conversion produced `NaN` or infinity.
    #[error("{quantity} is not finite: {value}")]
    NonFinite { quantity: &'static str, value: f64 },

    /// The dew or frost point could not be solved.
    #[error("dew point solve failed")]
    DewPoint(#[from] DewPointError),
}

impl HumidityEngine {
    /// Returns a validating view of this engine.
    ///
    /// # Errors
    ///
    /// Returns [`HumidityError::InvalidInput`] if the ambient air pressure is
    /// not strictly positive.
    pub fn checked(&self) -> Result<Checked<'_>, HumidityError> {
        positive("air pressure", self.air_pressure())?;
        Ok(Checked { engine: self })
    }
}

/// Validating wrapper around a [`HumidityEngine`].
///
/// Each method checks its inputs, delegates to the engine method of the same
/// name, and rejects non-finite results. Temperatures in °C must lie above
/// absolute zero. Mixing ratio conversions take the carrier gas molecular
/// weight explicitly; pass [`super::DRY_AIR_MOLECULAR_WEIGHT`] for air.
///
/// # Errors
///
/// Every method returns a [`HumidityError`] when an input is out of domain
/// or the result is not finite.
#[derive(Debug, Clone, Copy)]
pub struct Checked<'a> {
    engine: &'a HumidityEngine,
}

impl Checked<'_> {
    pub fn saturation_pressure(&self, temperature: f64) -> Result<f64, HumidityError> {
        celsius("temperature", temperature)?;
        finite("saturation pressure", self.engine.saturation_pressure(temperature))
    }

    pub fn dew_point_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        phase: Phase,
    ) -> Result<f64, HumidityError> {
        positive("vapor pressure", vapor_pressure)?;
        self.solve_dew_point(vapor_pressure, phase)
    }

    pub fn dew_point_from_mixing_ratio(
        &self,
        mixing_ratio: f64,
        phase: Phase,
    ) -> Result<f64, HumidityError> {
        positive("mixing ratio", mixing_ratio)?;
        let vapor_pressure = self.engine.vapor_pressure_from_mixing_ratio(mixing_ratio);
        self.solve_dew_point(vapor_pressure, phase)
    }

    pub fn dew_point_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        positive("relative humidity", relative_humidity)?;
        celsius("temperature", temperature)?;
        let vapor_pressure = self
            .engine
            .vapor_pressure_from_relative_humidity(relative_humidity, temperature);
        self.solve_dew_point(vapor_pressure, Phase::from_celsius(temperature))
    }

    pub fn dew_point_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        positive("absolute humidity", absolute_humidity)?;
        positive("temperature", temperature_k)?;
        let vapor_pressure = self
            .engine
            .vapor_pressure_from_absolute_humidity(absolute_humidity, temperature_k);
        self.solve_dew_point(vapor_pressure, Phase::from_kelvin(temperature_k))
    }

    pub fn vapor_pressure_from_dew_point(&self, dew_point: f64) -> Result<f64, HumidityError> {
        celsius("dew point", dew_point)?;
        finite(
            "vapor pressure",
            self.engine.vapor_pressure_from_dew_point(dew_point),
        )
    }

    pub fn vapor_pressure_from_mixing_ratio(&self, mixing_ratio: f64) -> Result<f64, HumidityError> {
        non_negative("mixing ratio", mixing_ratio)?;
        finite(
            "vapor pressure",
            self.engine.vapor_pressure_from_mixing_ratio(mixing_ratio),
        )
    }

    pub fn vapor_pressure_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("relative humidity", relative_humidity)?;
        celsius("temperature", temperature)?;
        finite(
            "vapor pressure",
            self.engine
                .vapor_pressure_from_relative_humidity(relative_humidity, temperature),
        )
    }

    pub fn vapor_pressure_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("absolute humidity", absolute_humidity)?;
        positive("temperature", temperature_k)?;
        finite(
            "vapor pressure",
            self.engine
                .vapor_pressure_from_absolute_humidity(absolute_humidity, temperature_k),
        )
    }

    pub fn mixing_ratio_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        molecular_weight: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("vapor pressure", vapor_pressure)?;
        positive("molecular weight", molecular_weight)?;
        self.below_air_pressure(vapor_pressure)?;
        finite(
            "mixing ratio",
            self.engine
                .mixing_ratio_from_vapor_pressure_with_weight(vapor_pressure, molecular_weight),
        )
    }

    pub fn mixing_ratio_from_dew_point(
        &self,
        dew_point: f64,
        molecular_weight: f64,
    ) -> Result<f64, HumidityError> {
        let vapor_pressure = self.vapor_pressure_from_dew_point(dew_point)?;
        positive("molecular weight", molecular_weight)?;
        self.below_air_pressure(vapor_pressure)?;
        finite(
            "mixing ratio",
            self.engine
                .mixing_ratio_from_dew_point_with_weight(dew_point, molecular_weight),
        )
    }

    pub fn mixing_ratio_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
        molecular_weight: f64,
    ) -> Result<f64, HumidityError> {
        let vapor_pressure =
            self.vapor_pressure_from_relative_humidity(relative_humidity, temperature)?;
        positive("molecular weight", molecular_weight)?;
        self.below_air_pressure(vapor_pressure)?;
        finite(
            "mixing ratio",
            self.engine.mixing_ratio_from_relative_humidity_with_weight(
                relative_humidity,
                temperature,
                molecular_weight,
            ),
        )
    }

    pub fn mixing_ratio_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
        molecular_weight: f64,
    ) -> Result<f64, HumidityError> {
        let vapor_pressure =
            self.vapor_pressure_from_absolute_humidity(absolute_humidity, temperature_k)?;
        positive("molecular weight", molecular_weight)?;
        self.below_air_pressure(vapor_pressure)?;
        finite(
            "mixing ratio",
            self.engine.mixing_ratio_from_absolute_humidity_with_weight(
                absolute_humidity,
                temperature_k,
                molecular_weight,
            ),
        )
    }

    pub fn relative_humidity_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("vapor pressure", vapor_pressure)?;
        celsius("temperature", temperature)?;
        finite(
            "relative humidity",
            self.engine
                .relative_humidity_from_vapor_pressure(vapor_pressure, temperature),
        )
    }

    pub fn relative_humidity_from_mixing_ratio(
        &self,
        mixing_ratio: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("mixing ratio", mixing_ratio)?;
        celsius("temperature", temperature)?;
        finite(
            "relative humidity",
            self.engine
                .relative_humidity_from_mixing_ratio(mixing_ratio, temperature),
        )
    }

    pub fn relative_humidity_from_dew_point(
        &self,
        dew_point: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        celsius("dew point", dew_point)?;
        celsius("temperature", temperature)?;
        finite(
            "relative humidity",
            self.engine.relative_humidity_from_dew_point(dew_point, temperature),
        )
    }

    pub fn relative_humidity_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("absolute humidity", absolute_humidity)?;
        positive("temperature", temperature_k)?;
        finite(
            "relative humidity",
            self.engine
                .relative_humidity_from_absolute_humidity(absolute_humidity, temperature_k),
        )
    }

    pub fn absolute_humidity_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("vapor pressure", vapor_pressure)?;
        positive("temperature", temperature_k)?;
        finite(
            "absolute humidity",
            self.engine
                .absolute_humidity_from_vapor_pressure(vapor_pressure, temperature_k),
        )
    }

    /// The mixing ratio must be strictly positive, since it cancels out of the relation.
    pub fn absolute_humidity_from_mixing_ratio(
        &self,
        mixing_ratio: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        positive("mixing ratio", mixing_ratio)?;
        positive("temperature", temperature_k)?;
        finite(
            "absolute humidity",
            self.engine
                .absolute_humidity_from_mixing_ratio(mixing_ratio, temperature_k),
        )
    }

    pub fn absolute_humidity_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> Result<f64, HumidityError> {
        non_negative("relative humidity", relative_humidity)?;
        celsius("temperature", temperature)?;
        finite(
            "absolute humidity",
            self.engine
                .absolute_humidity_from_relative_humidity(relative_humidity, temperature),
        )
    }

    pub fn absolute_humidity_from_dew_point(
        &self,
        dew_point: f64,
        temperature_k: f64,
    ) -> Result<f64, HumidityError> {
        celsius("dew point", dew_point)?;
        positive("temperature", temperature_k)?;
        finite(
            "absolute humidity",
            self.engine
                .absolute_humidity_from_dew_point(dew_point, temperature_k),
        )
    }

    fn solve_dew_point(&self, vapor_pressure: f64, phase: Phase) -> Result<f64, HumidityError> {
        let dew_point = dew_point::solve(self.engine, vapor_pressure, phase)?;
        finite("dew point", dew_point)
    }

    fn below_air_pressure(&self, vapor_pressure: f64) -> Result<(), HumidityError> {
        let air_pressure = self.engine.air_pressure();
        if vapor_pressure < air_pressure {
            Ok(())
        } else {
            Err(HumidityError::VaporExceedsAirPressure {
                vapor_pressure,
                air_pressure,
            })
        }
    }
}

fn positive(quantity: &'static str, value: f64) -> Result<f64, HumidityError> {
    StrictlyPositive::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| HumidityError::InvalidInput { quantity, source })
}

fn non_negative(quantity: &'static str, value: f64) -> Result<f64, HumidityError> {
    NonNegative::new(value)
        .map(Constrained::into_inner)
        .map_err(|source| HumidityError::InvalidInput { quantity, source })
}

/// A Celsius temperature is valid if it lies above absolute zero.
fn celsius(quantity: &'static str, value: f64) -> Result<f64, HumidityError> {
    positive(quantity, value + ZERO_CELSIUS_IN_KELVIN).map(|_| value)
}

fn finite(quantity: &'static str, value: f64) -> Result<f64, HumidityError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(HumidityError::NonFinite { quantity, value })
    }
}
