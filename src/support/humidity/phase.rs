/// Offset between the Celsius and Kelvin scales.
pub(super) const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Condensed phase that saturates the air: liquid water or ice.
///
/// The Buck equations use different coefficients over water and over ice.
/// Where a temperature is at hand the phase follows its sign, with exactly
/// 0 °C treated as water. Where only a vapor pressure is known (finding a dew
/// or frost point), the caller picks the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Saturation over liquid water (dew point).
    Water,
    /// Saturation over ice (frost point).
    Ice,
}

impl Phase {
    /// Selects the phase for a temperature in degrees Celsius.
    ///
    /// Zero and above select [`Phase::Water`]; anything below zero selects
    /// [`Phase::Ice`].
    ///
    /// ```
    /// use twine_humidity::support::humidity::Phase;
    ///
    /// assert_eq!(Phase::from_celsius(0.5), Phase::Water);
    /// assert_eq!(Phase::from_celsius(-0.5), Phase::Ice);
    /// ```
    #[must_use]
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature >= 0.0 {
            Phase::Water
        } else {
            Phase::Ice
        }
    }

    /// Selects the phase for an absolute temperature in kelvin.
    #[must_use]
    pub fn from_kelvin(temperature: f64) -> Self {
        Self::from_celsius(temperature - ZERO_CELSIUS_IN_KELVIN)
    }

    /// Returns the Buck saturation coefficients for this phase.
    #[must_use]
    pub fn coefficients(self) -> CoefficientSet {
        CoefficientSet::for_phase(self)
    }

    /// Returns the enhancement factor coefficients for this phase.
    #[must_use]
    pub fn enhancement_coefficients(self) -> EnhancementCoefficientSet {
        EnhancementCoefficientSet::for_phase(self)
    }
}

/// Arden Buck coefficients `(a, b, c, d)` for one phase.
///
/// `a` is in millibars, `c` and `d` are in degrees Celsius, `b` is dimensionless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CoefficientSet {
    /// Coefficients over liquid water.
    pub const WATER: Self = Self {
        a: 6.1121,
        b: 18.678,
        c: 257.14,
        d: 234.5,
    };

    /// Coefficients over ice.
    pub const ICE: Self = Self {
        a: 6.1115,
        b: 23.036,
        c: 279.82,
        d: 333.7,
    };

    /// Returns the coefficients for `phase`.
    #[must_use]
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Water => Self::WATER,
            Phase::Ice => Self::ICE,
        }
    }

    /// Evaluates the uncorrected Buck curve `a·exp((b − T/d)·T/(T + c))`.
    #[must_use]
    pub fn saturation_pressure(&self, temperature: f64) -> f64 {
        let t = temperature;
        self.a * ((self.b - t / self.d) * t / (t + self.c)).exp()
    }

    /// Inverts [`CoefficientSet::saturation_pressure`] in closed form.
    ///
    /// With `s = ln(e) − ln(a)` the curve is a quadratic in `T`, whose lower
    /// root is `d/2·(b − s − √((b − s)² − 4·c·s/d))`.
    /// Non-positive vapor pressures and negative discriminants give `NaN`.
    #[must_use]
    pub fn temperature(&self, vapor_pressure: f64) -> f64 {
        let s = vapor_pressure.ln() - self.a.ln();
        let b_s = self.b - s;
        self.d / 2.0 * (b_s - (b_s.powi(2) - 4.0 * self.c * s / self.d).sqrt())
    }
}

/// Enhancement factor coefficients `(a, b, c)` for one phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnhancementCoefficientSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl EnhancementCoefficientSet {
    /// Coefficients over liquid water.
    pub const WATER: Self = Self {
        a: 2.2,
        b: 0.0383,
        c: 6.4,
    };

    /// Coefficients over ice.
    pub const ICE: Self = Self {
        a: 7.2,
        b: 0.0320,
        c: 5.9,
    };

    /// Returns the coefficients for `phase`.
    #[must_use]
    pub fn for_phase(phase: Phase) -> Self {
        match phase {
            Phase::Water => Self::WATER,
            Phase::Ice => Self::ICE,
        }
    }

    /// Computes `1 + 10⁻⁴·(a + P·(b + c·10⁻⁶·T²))` for `T` in °C and `P` in millibars.
    #[must_use]
    pub fn factor(&self, temperature: f64, air_pressure: f64) -> f64 {
        1.0 + 1e-4 * (self.a + air_pressure * (self.b + self.c * 1e-6 * temperature.powi(2)))
    }
}
