use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Relative humidity, absolute humidity, and mixing ratio may be zero (dry air)
/// but never negative.
///
/// # Examples
///
/// ```
/// use twine_humidity::support::constraint::NonNegative;
///
/// let relative_humidity = NonNegative::new(0.0).unwrap();
/// assert_eq!(relative_humidity.into_inner(), 0.0);
///
/// assert!(NonNegative::new(-7.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::MassDensity, mass_density::gram_per_cubic_meter};

    #[test]
    fn floats() {
        assert!(Constrained::<f64, NonNegative>::new(55.0).is_ok());
        assert!(NonNegative::new(0.0).is_ok());
        assert_eq!(NonNegative::new(-2.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn absolute_humidities() {
        let rho = MassDensity::new::<gram_per_cubic_meter>(8.6);
        assert!(NonNegative::new(rho).is_ok());

        let rho = MassDensity::new::<gram_per_cubic_meter>(0.0);
        assert!(NonNegative::new(rho).is_ok());

        let rho = MassDensity::new::<gram_per_cubic_meter>(-0.1);
        assert!(NonNegative::new(rho).is_err());
    }
}
