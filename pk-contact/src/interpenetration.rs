//! The virtual interpenetration of the bodies (PK model eq. 7).

use ndarray::{Array1, ArrayView1};
use pk_core::constraint::Constrained;

use crate::{
    error::{ContactError, ProfileDefect},
    parameters::PositiveFinite,
    separation::SeparationCurve,
};

/// Non-negative overlap the bodies would have if pushed together rigidly by
/// the virtual penetration.
///
/// Values are zero outside contact and strictly positive inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpenetrationCurve(Array1<f64>);

impl InterpenetrationCurve {
    /// Wraps precomputed interpenetration values.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::InvalidProfile`] if a value is negative or not finite.
    pub fn new(values: Array1<f64>) -> Result<Self, ContactError> {
        if let Some(index) = values.iter().position(|g| !g.is_finite()) {
            return Err(ProfileDefect::NonFinite { index }.into());
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, g)| **g < 0.0) {
            return Err(ProfileDefect::NegativeInterpenetration { index, value }.into());
        }
        Ok(Self(values))
    }

    /// Returns the overlap at each lateral sample.
    #[must_use]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the curve has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Computes `max(virtual_penetration - separation[i], 0)` for every sample.
///
/// The clamp floor is exact zero, so a sample is in contact precisely when
/// its separation is below the virtual penetration.
///
/// # Errors
///
/// Returns [`ContactError::Configuration`] if `virtual_penetration` is not
/// finite and strictly positive.
pub fn interpenetration(
    separation: &SeparationCurve,
    virtual_penetration: f64,
) -> Result<InterpenetrationCurve, ContactError> {
    let delta0 = Constrained::<f64, PositiveFinite>::new(virtual_penetration)
        .map_err(|source| ContactError::configuration("virtual_penetration", source))?
        .into_inner();

    Ok(InterpenetrationCurve(
        separation.values().mapv(|s| (delta0 - s).max(0.0)),
    ))
}
