use log::debug;

use super::{
    DewPointConfig, Phase,
    dew_point,
    phase::{CoefficientSet, ZERO_CELSIUS_IN_KELVIN},
};

/// Ambient air pressure near sea level, in millibars.
pub const DEFAULT_AIR_PRESSURE: f64 = 1010.0;

/// Molecular weight of dry air, in g/mol.
pub const DRY_AIR_MOLECULAR_WEIGHT: f64 = 28.97;

/// Molecular weight of water vapor, in g/mol.
const WATER_MOLECULAR_WEIGHT: f64 = 18.02;

/// Relates vapor pressure to absolute humidity: `e = ρ·Tk / 216.7`.
const ABSOLUTE_HUMIDITY_CONSTANT: f64 = 216.7;

/// Mixing ratio (ppm by weight) of pure vapor relative to dry air.
const MIXING_RATIO_CONSTANT: f64 = 622.0e3;

/// Moist air conversion engine at a fixed ambient air pressure.
///
/// Every conversion is built on two primitives: the enhanced Buck saturation
/// curve ([`HumidityEngine::saturation_pressure`]) and its inverse
/// ([`HumidityEngine::dew_point_from_vapor_pressure`]).
///
/// # Units
///
/// | Quantity            | Unit             |
/// |---------------------|------------------|
/// | pressures           | millibar         |
/// | `temperature` args  | °C               |
/// | `temperature_k` args| K                |
/// | dew/frost point     | °C               |
/// | mixing ratio        | ppm by weight    |
/// | relative humidity   | %                |
/// | absolute humidity   | g/m³             |
/// | molecular weight    | g/mol            |
///
/// # Domain
///
/// Inputs are not validated. Out-of-domain values propagate as `NaN` or
/// infinity; use [`HumidityEngine::checked`] for validated conversions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HumidityEngine {
    air_pressure: f64,
    dew_point: DewPointConfig,
}

impl Default for HumidityEngine {
    fn default() -> Self {
        Self::new(DEFAULT_AIR_PRESSURE)
    }
}

impl HumidityEngine {
    /// Creates an engine at the given ambient air pressure in millibars.
    #[must_use]
    pub fn new(air_pressure: f64) -> Self {
        Self {
            air_pressure,
            dew_point: DewPointConfig::default(),
        }
    }

    /// Replaces the solver settings used to find dew and frost points.
    #[must_use]
    pub fn with_dew_point_config(mut self, config: DewPointConfig) -> Self {
        self.dew_point = config;
        self
    }

    /// Sets the ambient air pressure in millibars.
    pub fn set_air_pressure(&mut self, air_pressure: f64) {
        self.air_pressure = air_pressure;
    }

    /// Returns the ambient air pressure in millibars.
    #[must_use]
    pub fn air_pressure(&self) -> f64 {
        self.air_pressure
    }

    /// Returns the solver settings used to find dew and frost points.
    #[must_use]
    pub fn dew_point_config(&self) -> &DewPointConfig {
        &self.dew_point
    }

    /// Computes the saturation vapor pressure at `temperature` (°C).
    ///
    /// Water coefficients apply at and above 0 °C, ice coefficients below.
    #[must_use]
    pub fn saturation_pressure(&self, temperature: f64) -> f64 {
        self.saturation_pressure_over(temperature, Phase::from_celsius(temperature))
    }

    /// Computes the saturation vapor pressure over an explicit phase.
    ///
    /// Evaluates `EF(T)·a·exp((b − T/d)·T/(T + c))` using the coefficients of
    /// `phase` regardless of the sign of `temperature`.
    #[must_use]
    pub fn saturation_pressure_over(&self, temperature: f64, phase: Phase) -> f64 {
        self.enhancement_factor(temperature, phase)
            * phase.coefficients().saturation_pressure(temperature)
    }

    /// Computes the enhancement factor for moist air at the ambient pressure.
    #[must_use]
    pub fn enhancement_factor(&self, temperature: f64, phase: Phase) -> f64 {
        phase
            .enhancement_coefficients()
            .factor(temperature, self.air_pressure)
    }

    /// Inverts the uncorrected Buck curve in closed form.
    ///
    /// This ignores the enhancement factor, so it is the initial estimate for
    /// [`HumidityEngine::dew_point_from_vapor_pressure`] rather than an exact
    /// inverse of [`HumidityEngine::saturation_pressure`].
    #[must_use]
    pub fn inverse_saturation_pressure(vapor_pressure: f64, phase: Phase) -> f64 {
        CoefficientSet::for_phase(phase).temperature(vapor_pressure)
    }

    /// Finds the dew point (`Phase::Water`) or frost point (`Phase::Ice`) in °C
    /// at which `vapor_pressure` saturates the air.
    ///
    /// Returns `NaN` if `vapor_pressure` is not strictly positive or the
    /// solver fails.
    #[must_use]
    pub fn dew_point_from_vapor_pressure(&self, vapor_pressure: f64, phase: Phase) -> f64 {
        match dew_point::solve(self, vapor_pressure, phase) {
            Ok(dew_point) => dew_point,
            Err(error) => {
                debug!("no dew point for e={vapor_pressure} mb over {phase:?}: {error}");
                f64::NAN
            }
        }
    }

    #[must_use]
    pub fn dew_point_from_mixing_ratio(&self, mixing_ratio: f64, phase: Phase) -> f64 {
        self.dew_point_from_vapor_pressure(
            self.vapor_pressure_from_mixing_ratio(mixing_ratio),
            phase,
        )
    }

    /// The phase follows the air temperature.
    #[must_use]
    pub fn dew_point_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> f64 {
        self.dew_point_from_vapor_pressure(
            self.vapor_pressure_from_relative_humidity(relative_humidity, temperature),
            Phase::from_celsius(temperature),
        )
    }

    /// The phase follows the air temperature.
    #[must_use]
    pub fn dew_point_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> f64 {
        self.dew_point_from_vapor_pressure(
            self.vapor_pressure_from_absolute_humidity(absolute_humidity, temperature_k),
            Phase::from_kelvin(temperature_k),
        )
    }

    /// The vapor pressure at a dew point is the saturation pressure there.
    #[must_use]
    pub fn vapor_pressure_from_dew_point(&self, dew_point: f64) -> f64 {
        self.saturation_pressure(dew_point)
    }

    #[must_use]
    pub fn vapor_pressure_from_mixing_ratio(&self, mixing_ratio: f64) -> f64 {
        mixing_ratio * self.air_pressure / (MIXING_RATIO_CONSTANT + mixing_ratio)
    }

    #[must_use]
    pub fn vapor_pressure_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> f64 {
        relative_humidity * self.saturation_pressure(temperature) / 100.0
    }

    #[must_use]
    pub fn vapor_pressure_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> f64 {
        absolute_humidity * temperature_k / ABSOLUTE_HUMIDITY_CONSTANT
    }

    /// Mixing ratio of water vapor in dry air.
    #[must_use]
    pub fn mixing_ratio_from_vapor_pressure(&self, vapor_pressure: f64) -> f64 {
        self.mixing_ratio_from_vapor_pressure_with_weight(vapor_pressure, DRY_AIR_MOLECULAR_WEIGHT)
    }

    /// Mixing ratio of water vapor in a carrier gas of the given molecular weight.
    #[must_use]
    pub fn mixing_ratio_from_vapor_pressure_with_weight(
        &self,
        vapor_pressure: f64,
        molecular_weight: f64,
    ) -> f64 {
        weight_ratio(molecular_weight) * vapor_pressure / (self.air_pressure - vapor_pressure)
    }

    #[must_use]
    pub fn mixing_ratio_from_dew_point(&self, dew_point: f64) -> f64 {
        self.mixing_ratio_from_dew_point_with_weight(dew_point, DRY_AIR_MOLECULAR_WEIGHT)
    }

    #[must_use]
    pub fn mixing_ratio_from_dew_point_with_weight(
        &self,
        dew_point: f64,
        molecular_weight: f64,
    ) -> f64 {
        self.mixing_ratio_from_vapor_pressure_with_weight(
            self.saturation_pressure(dew_point),
            molecular_weight,
        )
    }

    #[must_use]
    pub fn mixing_ratio_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> f64 {
        self.mixing_ratio_from_relative_humidity_with_weight(
            relative_humidity,
            temperature,
            DRY_AIR_MOLECULAR_WEIGHT,
        )
    }

    #[must_use]
    pub fn mixing_ratio_from_relative_humidity_with_weight(
        &self,
        relative_humidity: f64,
        temperature: f64,
        molecular_weight: f64,
    ) -> f64 {
        let rh_es = relative_humidity * self.saturation_pressure(temperature);
        weight_ratio(molecular_weight) * rh_es / (100.0 * self.air_pressure - rh_es)
    }

    #[must_use]
    pub fn mixing_ratio_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> f64 {
        self.mixing_ratio_from_absolute_humidity_with_weight(
            absolute_humidity,
            temperature_k,
            DRY_AIR_MOLECULAR_WEIGHT,
        )
    }

    #[must_use]
    pub fn mixing_ratio_from_absolute_humidity_with_weight(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
        molecular_weight: f64,
    ) -> f64 {
        let rho_tk = absolute_humidity * temperature_k;
        weight_ratio(molecular_weight) * rho_tk
            / (ABSOLUTE_HUMIDITY_CONSTANT * self.air_pressure - rho_tk)
    }

    #[must_use]
    pub fn relative_humidity_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        temperature: f64,
    ) -> f64 {
        100.0 * vapor_pressure / self.saturation_pressure(temperature)
    }

    #[must_use]
    pub fn relative_humidity_from_mixing_ratio(&self, mixing_ratio: f64, temperature: f64) -> f64 {
        100.0 * mixing_ratio * self.air_pressure
            / ((MIXING_RATIO_CONSTANT + mixing_ratio) * self.saturation_pressure(temperature))
    }

    #[must_use]
    pub fn relative_humidity_from_dew_point(&self, dew_point: f64, temperature: f64) -> f64 {
        100.0 * self.saturation_pressure(dew_point) / self.saturation_pressure(temperature)
    }

    #[must_use]
    pub fn relative_humidity_from_absolute_humidity(
        &self,
        absolute_humidity: f64,
        temperature_k: f64,
    ) -> f64 {
        let es = self.saturation_pressure(temperature_k - ZERO_CELSIUS_IN_KELVIN);
        100.0 * absolute_humidity * temperature_k / (ABSOLUTE_HUMIDITY_CONSTANT * es)
    }

    #[must_use]
    pub fn absolute_humidity_from_vapor_pressure(
        &self,
        vapor_pressure: f64,
        temperature_k: f64,
    ) -> f64 {
        ABSOLUTE_HUMIDITY_CONSTANT * vapor_pressure / temperature_k
    }

    /// Note that `mixing_ratio` cancels out of this relation, leaving
    /// `0.2167·P / (622.001·Tk)`.
    #[must_use]
    pub fn absolute_humidity_from_mixing_ratio(&self, mixing_ratio: f64, temperature_k: f64) -> f64 {
        0.2167 * mixing_ratio * self.air_pressure / (622.001 * mixing_ratio * temperature_k)
    }

    #[must_use]
    pub fn absolute_humidity_from_relative_humidity(
        &self,
        relative_humidity: f64,
        temperature: f64,
    ) -> f64 {
        ABSOLUTE_HUMIDITY_CONSTANT * relative_humidity * self.saturation_pressure(temperature)
            / (100.0 * (temperature + ZERO_CELSIUS_IN_KELVIN))
    }

    #[must_use]
    pub fn absolute_humidity_from_dew_point(&self, dew_point: f64, temperature_k: f64) -> f64 {
        ABSOLUTE_HUMIDITY_CONSTANT * self.saturation_pressure(dew_point) / temperature_k
    }
}

/// Mass ratio of water vapor to the carrier gas, scaled to ppm.
fn weight_ratio(molecular_weight: f64) -> f64 {
    WATER_MOLECULAR_WEIGHT / molecular_weight * 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn air_pressure_defaults_and_roundtrips() {
        let mut engine = HumidityEngine::default();
        assert_eq!(engine.air_pressure(), 1010.0);

        for pressure in [2000.0, 10000.0, 0.0, -5.0, 1e-300] {
            engine.set_air_pressure(pressure);
            assert_eq!(engine.air_pressure(), pressure);
        }
    }

    #[test]
    fn saturation_pressure_at_twenty_celsius() {
        let engine = HumidityEngine::default();
        let es = engine.saturation_pressure(20.0);
        assert_relative_eq!(es, 23.4, epsilon = 0.5);
        assert_relative_eq!(es, 23.485_044, epsilon = 1e-5);
    }

    #[test]
    fn zero_celsius_uses_water_coefficients() {
        let engine = HumidityEngine::default();
        let water = engine.saturation_pressure_over(0.0, Phase::Water);
        let ice = engine.saturation_pressure_over(0.0, Phase::Ice);

        assert_ne!(water, ice);
        assert_eq!(engine.saturation_pressure(0.0), water);
    }

    #[test]
    fn saturation_pressure_is_increasing() {
        let engine = HumidityEngine::default();
        let mut previous = engine.saturation_pressure(-40.0);
        for step in 1..=180 {
            let t = -40.0 + 0.5 * f64::from(step);
            let es = engine.saturation_pressure(t);
            assert!(es > previous, "not increasing at {t} °C");
            previous = es;
        }
    }

    #[test]
    fn saturation_pressure_depends_on_air_pressure() {
        let low = HumidityEngine::new(500.0).saturation_pressure(15.0);
        let high = HumidityEngine::new(1500.0).saturation_pressure(15.0);
        assert!(high > low);
    }

    #[test]
    fn vapor_pressure_from_dew_point_is_saturation_pressure() {
        let engine = HumidityEngine::default();
        for dp in [-25.0, -0.1, 0.0, 12.5, 30.0] {
            assert_eq!(
                engine.vapor_pressure_from_dew_point(dp),
                engine.saturation_pressure(dp)
            );
        }
    }

    #[test]
    fn dew_point_roundtrip() {
        let engine = HumidityEngine::default();
        for dp in [-40.0, -12.0, -0.5, 0.0, 0.5, 9.3, 25.0, 45.0] {
            let phase = Phase::from_celsius(dp);
            let e = engine.vapor_pressure_from_dew_point(dp);
            assert_relative_eq!(
                engine.dew_point_from_vapor_pressure(e, phase),
                dp,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn dew_point_roundtrip_at_high_pressure() {
        for (pressure, dp) in [(10000.0, 18.0), (30000.0, 80.0), (50000.0, 40.0), (100_000.0, 20.0)] {
            let engine = HumidityEngine::new(pressure);
            let e = engine.vapor_pressure_from_dew_point(dp);

            // The closed form overshoots by up to ~5.7 K across these cases.
            let closed_form = HumidityEngine::inverse_saturation_pressure(e, Phase::Water);
            assert!(closed_form > dp);

            assert_relative_eq!(
                engine.dew_point_from_vapor_pressure(e, Phase::Water),
                dp,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn dew_point_accounts_for_enhancement() {
        let engine = HumidityEngine::default();
        let e = engine.saturation_pressure(20.0);

        let closed_form = HumidityEngine::inverse_saturation_pressure(e, Phase::Water);
        let solved = engine.dew_point_from_vapor_pressure(e, Phase::Water);

        assert!(closed_form > solved);
        assert!(closed_form - solved < 0.1);
    }

    #[test]
    fn dew_point_of_non_positive_vapor_pressure_is_nan() {
        let engine = HumidityEngine::default();
        assert!(engine.dew_point_from_vapor_pressure(0.0, Phase::Water).is_nan());
        assert!(engine.dew_point_from_vapor_pressure(-1.0, Phase::Water).is_nan());
        assert!(engine.dew_point_from_vapor_pressure(-1.0, Phase::Ice).is_nan());
        assert!(engine.dew_point_from_vapor_pressure(f64::NAN, Phase::Ice).is_nan());
        assert!(engine.dew_point_from_mixing_ratio(0.0, Phase::Water).is_nan());
    }

    #[test]
    fn half_relative_humidity_is_half_saturation() {
        let engine = HumidityEngine::default();
        let e = engine.vapor_pressure_from_relative_humidity(50.0, 20.0);
        assert_relative_eq!(e, engine.saturation_pressure(20.0) / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn dew_point_from_other_metrics() {
        let engine = HumidityEngine::default();
        let t = 20.0;
        let tk = t + 273.15;
        let dp = 9.0;
        let e = engine.vapor_pressure_from_dew_point(dp);

        let rh = engine.relative_humidity_from_vapor_pressure(e, t);
        assert_relative_eq!(engine.dew_point_from_relative_humidity(rh, t), dp, epsilon = 1e-6);

        let r = engine.mixing_ratio_from_vapor_pressure(e);
        assert!(r > 0.0);
        let e_from_r = engine.vapor_pressure_from_mixing_ratio(r);
        assert_relative_eq!(
            engine.dew_point_from_mixing_ratio(r, Phase::Water),
            engine.dew_point_from_vapor_pressure(e_from_r, Phase::Water)
        );

        let rho = engine.absolute_humidity_from_vapor_pressure(e, tk);
        assert_relative_eq!(
            engine.dew_point_from_absolute_humidity(rho, tk),
            dp,
            epsilon = 1e-6
        );
    }

    #[test]
    fn frost_point_below_freezing() {
        let engine = HumidityEngine::default();
        let t = -10.0;
        let rh = 60.0;

        let frost_point = engine.dew_point_from_relative_humidity(rh, t);
        assert!(frost_point < t);

        let e = engine.vapor_pressure_from_relative_humidity(rh, t);
        assert_relative_eq!(
            frost_point,
            engine.dew_point_from_vapor_pressure(e, Phase::Ice),
            epsilon = 1e-12
        );
    }

    #[test]
    fn vapor_pressure_conversions() {
        let engine = HumidityEngine::default();

        assert_relative_eq!(
            engine.vapor_pressure_from_mixing_ratio(10_000.0),
            10_000.0 * 1010.0 / 632_000.0
        );
        assert_relative_eq!(
            engine.vapor_pressure_from_absolute_humidity(10.0, 293.15),
            10.0 * 293.15 / 216.7
        );
    }

    #[test]
    fn mixing_ratio_conversions_agree() {
        let engine = HumidityEngine::default();
        let t = 25.0;
        let tk = t + 273.15;
        let rh = 40.0;

        let e = engine.vapor_pressure_from_relative_humidity(rh, t);
        let from_e = engine.mixing_ratio_from_vapor_pressure(e);
        assert_relative_eq!(
            from_e,
            18.02 / 28.97 * 1e6 * e / (1010.0 - e),
            max_relative = 1e-12
        );

        assert_relative_eq!(
            engine.mixing_ratio_from_relative_humidity(rh, t),
            from_e,
            max_relative = 1e-12
        );

        let rho = engine.absolute_humidity_from_vapor_pressure(e, tk);
        assert_relative_eq!(
            engine.mixing_ratio_from_absolute_humidity(rho, tk),
            from_e,
            max_relative = 1e-12
        );

        let dp = engine.dew_point_from_vapor_pressure(e, Phase::Water);
        assert_relative_eq!(
            engine.mixing_ratio_from_dew_point(dp),
            from_e,
            max_relative = 1e-6
        );
    }

    #[test]
    fn mixing_ratio_scales_inversely_with_molecular_weight() {
        let engine = HumidityEngine::default();
        let e = 12.0;

        let base = engine.mixing_ratio_from_vapor_pressure_with_weight(e, 28.97);
        let doubled = engine.mixing_ratio_from_vapor_pressure_with_weight(e, 2.0 * 28.97);
        assert_relative_eq!(doubled, base / 2.0, max_relative = 1e-12);
        assert_eq!(base, engine.mixing_ratio_from_vapor_pressure(e));

        let base = engine.mixing_ratio_from_dew_point_with_weight(5.0, 4.0);
        let doubled = engine.mixing_ratio_from_dew_point_with_weight(5.0, 8.0);
        assert_relative_eq!(doubled, base / 2.0, max_relative = 1e-12);

        let base = engine.mixing_ratio_from_relative_humidity_with_weight(70.0, 15.0, 28.0);
        let doubled = engine.mixing_ratio_from_relative_humidity_with_weight(70.0, 15.0, 56.0);
        assert_relative_eq!(doubled, base / 2.0, max_relative = 1e-12);

        let base = engine.mixing_ratio_from_absolute_humidity_with_weight(6.0, 280.0, 44.01);
        let doubled = engine.mixing_ratio_from_absolute_humidity_with_weight(6.0, 280.0, 88.02);
        assert_relative_eq!(doubled, base / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn mixing_ratio_uses_air_pressure() {
        let mut engine = HumidityEngine::default();
        let at_sea_level = engine.mixing_ratio_from_vapor_pressure(10.0);

        engine.set_air_pressure(700.0);
        let at_altitude = engine.mixing_ratio_from_vapor_pressure(10.0);

        assert!(at_altitude > at_sea_level);
    }

    #[test]
    fn relative_humidity_conversions_agree() {
        let engine = HumidityEngine::default();
        let t = 22.0;
        let tk = t + 273.15;
        let dp = 11.0;

        let expected = 100.0 * engine.saturation_pressure(dp) / engine.saturation_pressure(t);
        assert_relative_eq!(engine.relative_humidity_from_dew_point(dp, t), expected);

        let e = engine.vapor_pressure_from_dew_point(dp);
        assert_relative_eq!(
            engine.relative_humidity_from_vapor_pressure(e, t),
            expected,
            max_relative = 1e-12
        );

        let r = engine.mixing_ratio_from_vapor_pressure(e);
        let e_from_r = engine.vapor_pressure_from_mixing_ratio(r);
        assert_relative_eq!(
            engine.relative_humidity_from_mixing_ratio(r, t),
            100.0 * e_from_r / engine.saturation_pressure(t),
            max_relative = 1e-12
        );

        let rho = engine.absolute_humidity_from_vapor_pressure(e, tk);
        assert_relative_eq!(
            engine.relative_humidity_from_absolute_humidity(rho, tk),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn relative_humidity_of_saturated_air() {
        let engine = HumidityEngine::default();
        assert_relative_eq!(engine.relative_humidity_from_dew_point(15.0, 15.0), 100.0);
    }

    #[test]
    fn absolute_humidity_conversions_agree() {
        let engine = HumidityEngine::default();
        let t = 30.0;
        let tk = t + 273.15;
        let dp = 18.0;

        let e = engine.vapor_pressure_from_dew_point(dp);
        let expected = 216.7 * e / tk;

        assert_relative_eq!(engine.absolute_humidity_from_vapor_pressure(e, tk), expected);
        assert_relative_eq!(
            engine.absolute_humidity_from_dew_point(dp, tk),
            expected,
            max_relative = 1e-12
        );

        let rh = engine.relative_humidity_from_vapor_pressure(e, t);
        assert_relative_eq!(
            engine.absolute_humidity_from_relative_humidity(rh, t),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn absolute_humidity_from_mixing_ratio_relation() {
        let engine = HumidityEngine::default();
        let tk = 290.0;
        let expected = 0.2167 * 1010.0 / (622.001 * tk);

        assert_relative_eq!(
            engine.absolute_humidity_from_mixing_ratio(8000.0, tk),
            expected,
            max_relative = 1e-12
        );
        assert!(engine.absolute_humidity_from_mixing_ratio(0.0, tk).is_nan());
    }

    #[test]
    fn domain_violations_are_not_faults() {
        let engine = HumidityEngine::default();
        assert!(engine.mixing_ratio_from_vapor_pressure(1010.0).is_infinite());
        assert!(engine.absolute_humidity_from_vapor_pressure(10.0, 0.0).is_infinite());
        assert!(HumidityEngine::new(f64::NAN).saturation_pressure(20.0).is_nan());
    }
}
