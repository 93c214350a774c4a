//! Material and geometry parameters of the contact model.

use std::cmp::Ordering;

use pk_core::constraint::{Constrained, Constraint, ConstraintError, StrictlyPositive};
use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, Pressure},
    length::millimeter,
    pressure::megapascal,
};

use crate::error::ContactError;

/// Physical inputs to the contact model, as supplied by configuration.
///
/// With `serde`, quantities are read in SI base units: pascals for the
/// Young's modulus and metres for lengths.
///
/// # Example
///
/// ```
/// use pk_contact::ContactParameters;
///
/// let parameters: ContactParameters = toml::from_str(
///     r#"
///     youngs_modulus = 2.1e11
///     poisson_ratio = 0.28
///     rolling_radius = 0.46
///     penetration = 1.0e-5
///     virtual_penetration = 1.0e-5
///     "#,
/// )
/// .unwrap();
///
/// assert!(parameters.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactParameters {
    /// Young's modulus of both bodies.
    pub youngs_modulus: Pressure,
    /// Poisson's ratio of both bodies, in `(0, 0.5)`.
    pub poisson_ratio: f64,
    /// Nominal rolling radius of the wheel.
    pub rolling_radius: Length,
    /// Actual elastic penetration.
    pub penetration: Length,
    /// Virtual penetration used to find the interpenetration region.
    pub virtual_penetration: Length,
}

impl ContactParameters {
    /// Checks every parameter against its physical domain.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Configuration`] naming the first parameter
    /// that is out of range. Lengths and the modulus must be finite and
    /// greater than zero.
    pub fn validate(&self) -> Result<ValidParameters, ContactError> {
        let check = |parameter, source| ContactError::configuration(parameter, source);

        Ok(ValidParameters {
            youngs_modulus: Constrained::new(self.youngs_modulus)
                .map_err(|e| check("youngs_modulus", e))?,
            poisson_ratio: Constrained::new(self.poisson_ratio)
                .map_err(|e| check("poisson_ratio", e))?,
            rolling_radius: Constrained::new(self.rolling_radius)
                .map_err(|e| check("rolling_radius", e))?,
            penetration: Constrained::new(self.penetration).map_err(|e| check("penetration", e))?,
            virtual_penetration: Constrained::new(self.virtual_penetration)
                .map_err(|e| check("virtual_penetration", e))?,
        })
    }
}

/// Marker type enforcing a value that is greater than zero and finite.
///
/// Implemented for plain `f64` and for the `uom` quantities of
/// [`ContactParameters`], whose check applies to the value in SI base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositiveFinite;

impl Constraint<f64> for PositiveFinite {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        StrictlyPositive::check(value)?;
        if value.is_infinite() {
            return Err(ConstraintError::Infinite);
        }
        Ok(())
    }
}

impl Constraint<Length> for PositiveFinite {
    fn check(value: &Length) -> Result<(), ConstraintError> {
        <Self as Constraint<f64>>::check(&value.value)
    }
}

impl Constraint<Pressure> for PositiveFinite {
    fn check(value: &Pressure) -> Result<(), ConstraintError> {
        <Self as Constraint<f64>>::check(&value.value)
    }
}

/// Marker type enforcing a Poisson's ratio in the open interval `(0, 0.5)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoissonRatio;

impl Constraint<f64> for PoissonRatio {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&0.5)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Contact parameters that passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidParameters {
    youngs_modulus: Constrained<Pressure, PositiveFinite>,
    poisson_ratio: Constrained<f64, PoissonRatio>,
    rolling_radius: Constrained<Length, PositiveFinite>,
    penetration: Constrained<Length, PositiveFinite>,
    virtual_penetration: Constrained<Length, PositiveFinite>,
}

impl ValidParameters {
    #[must_use]
    pub fn youngs_modulus(&self) -> Pressure {
        *self.youngs_modulus.as_ref()
    }

    #[must_use]
    pub fn poisson_ratio(&self) -> f64 {
        *self.poisson_ratio.as_ref()
    }

    #[must_use]
    pub fn rolling_radius(&self) -> Length {
        *self.rolling_radius.as_ref()
    }

    #[must_use]
    pub fn penetration(&self) -> Length {
        *self.penetration.as_ref()
    }

    #[must_use]
    pub fn virtual_penetration(&self) -> Length {
        *self.virtual_penetration.as_ref()
    }

    /// Returns the parameters in the integrator's working units.
    pub(crate) fn working_units(&self) -> WorkingUnits {
        WorkingUnits {
            youngs_modulus: self.youngs_modulus().get::<megapascal>(),
            poisson_ratio: self.poisson_ratio(),
            rolling_radius: self.rolling_radius().get::<millimeter>(),
            penetration: self.penetration().get::<millimeter>(),
            virtual_penetration: self.virtual_penetration().get::<millimeter>(),
        }
    }
}

/// Parameters as plain numbers in millimetres and megapascals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WorkingUnits {
    pub youngs_modulus: f64,
    pub poisson_ratio: f64,
    pub rolling_radius: f64,
    pub penetration: f64,
    pub virtual_penetration: f64,
}
