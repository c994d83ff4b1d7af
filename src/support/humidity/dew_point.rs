//! Dew and frost point solver.
//!
//! The closed-form Buck inverse ignores the enhancement factor, so on its own
//! it misses the true dew point by a few hundredths of a degree at sea level.
//! The solver steps away from the closed-form estimate until the residual
//! changes sign, then bisects on the enhanced saturation curve of a single
//! phase until it matches the vapor pressure.
//!
//! For positive air pressure the enhancement factor exceeds one and the root
//! lies below the estimate, by several kelvin at compressed-air pressures.

use std::convert::Infallible;

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Pressure, TemperatureInterval},
    pressure::millibar,
    temperature_interval::kelvin as delta_kelvin,
};

use super::{CoefficientSet, HumidityEngine, Phase};

/// Solver configuration for dew and frost points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Initial step from the closed-form estimate when bracketing the root.
    ///
    /// The step doubles until the residual changes sign.
    pub bracket: TemperatureInterval,

    /// Absolute tolerance for the dew point.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance for the vapor pressure residual.
    pub pressure_tol: Pressure,
}

impl Default for DewPointConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            bracket: TemperatureInterval::new::<delta_kelvin>(10.0),
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            pressure_tol: Pressure::new::<millibar>(1e-12),
        }
    }
}

impl DewPointConfig {
    /// Converts this configuration into a bisection solver configuration.
    fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.pressure_tol.get::<millibar>(),
        }
    }
}

/// Errors that can occur while solving for a dew or frost point.
#[derive(Debug, Error)]
pub enum DewPointError {
    /// The closed-form estimate is not finite.
    ///
    /// This happens for non-positive or non-finite vapor pressures.
    #[error("no saturation temperature for vapor pressure {vapor_pressure} mb")]
    Undefined { vapor_pressure: f64 },

    /// No sign change was found on the increasing branch of the Buck curve.
    #[error("no dew point bracket found for vapor pressure {vapor_pressure} mb")]
    Unbracketed { vapor_pressure: f64 },

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best vapor pressure residual achieved.
        residual: Pressure,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

/// Solves for the temperature (°C) at which `vapor_pressure` saturates air over `phase`.
pub(super) fn solve(
    engine: &HumidityEngine,
    vapor_pressure: f64,
    phase: Phase,
) -> Result<f64, DewPointError> {
    let estimate = HumidityEngine::inverse_saturation_pressure(vapor_pressure, phase);
    if !estimate.is_finite() {
        return Err(DewPointError::Undefined { vapor_pressure });
    }

    let config = engine.dew_point_config();
    let bounds = bracket(engine, vapor_pressure, phase, estimate)
        .ok_or(DewPointError::Unbracketed { vapor_pressure })?;

    let model = SaturationModel { engine, phase };
    let problem = DewPointProblem { vapor_pressure };

    let solution = bisection::solve(
        &model,
        &problem,
        bounds,
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // A non-finite saturation pressure has no usable sign; treat it as
            // lying above the root so the search can continue.
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(DewPointError::MaxIters {
            residual: Pressure::new::<millibar>(solution.residual),
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.temperature)
}

/// Maximum number of step doublings while bracketing.
const MAX_EXPANSIONS: usize = 32;

/// Finds bounds with a residual sign change, one of them the estimate.
///
/// Searches downward when the enhanced curve lies above the target at the
/// estimate, upward otherwise. The search stays between the pole at `T = −c`
/// and the peak of the Buck curve, where saturation pressure is increasing.
fn bracket(
    engine: &HumidityEngine,
    vapor_pressure: f64,
    phase: Phase,
    estimate: f64,
) -> Option<[f64; 2]> {
    let residual = |t: f64| engine.saturation_pressure_over(t, phase) - vapor_pressure;
    let CoefficientSet { b, c, d, .. } = phase.coefficients();
    let mut step = engine.dew_point_config().bracket.get::<delta_kelvin>();

    if residual(estimate) >= 0.0 {
        let floor = -c * (1.0 - 1e-9);
        for _ in 0..MAX_EXPANSIONS {
            let lower = (estimate - step).max(floor);
            if residual(lower) < 0.0 {
                return Some([lower, estimate]);
            }
            if lower <= floor {
                return None;
            }
            step *= 2.0;
        }
    } else {
        let peak = -c + (c * c + b * c * d).sqrt();
        for _ in 0..MAX_EXPANSIONS {
            let upper = (estimate + step).min(peak);
            if residual(upper) >= 0.0 {
                return Some([estimate, upper]);
            }
            if upper >= peak {
                return None;
            }
            step *= 2.0;
        }
    }

    None
}

/// A point on the saturation curve.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SaturationPoint {
    temperature: f64,
    pressure: f64,
}

/// Saturation pressure over a single phase, as a function of temperature in °C.
struct SaturationModel<'a> {
    engine: &'a HumidityEngine,
    phase: Phase,
}

#[derive(Debug, Error)]
#[error("saturation pressure is not finite at {temperature} °C")]
struct NonFiniteSaturation {
    temperature: f64,
}

impl Model for SaturationModel<'_> {
    type Input = f64;
    type Output = SaturationPoint;
    type Error = NonFiniteSaturation;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let temperature = *input;
        let pressure = self.engine.saturation_pressure_over(temperature, self.phase);

        if !pressure.is_finite() {
            return Err(NonFiniteSaturation { temperature });
        }

        Ok(SaturationPoint {
            temperature,
            pressure,
        })
    }
}

/// Residual is `saturation pressure - target vapor pressure`, in millibars.
struct DewPointProblem {
    vapor_pressure: f64,
}

impl EquationProblem<1> for DewPointProblem {
    type Input = f64;
    type Output = SaturationPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.pressure - self.vapor_pressure])
    }
}
