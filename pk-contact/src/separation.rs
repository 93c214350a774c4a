//! The normalized vertical gap between two aligned profiles.

use ndarray::{Array1, ArrayView1};

use crate::error::{ContactError, ProfileDefect};

/// Vertical gap between aligned profiles, shifted so its minimum is zero.
///
/// The shift brings the bodies into first contact regardless of the
/// coordinate systems the profiles were measured in.
#[derive(Debug, Clone, PartialEq)]
pub struct SeparationCurve(Array1<f64>);

impl SeparationCurve {
    /// Returns the gap at each lateral sample.
    #[must_use]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.0.view()
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; separation is only defined for non-empty profiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the index of the first sample where the gap is zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn first_contact(&self) -> usize {
        self.0.iter().position(|&s| s == 0.0).unwrap_or_default()
    }
}

/// Computes `wheel[i] - rail[i]` shifted by its minimum, so the smallest gap is exactly zero.
///
/// The wheel must be the upper body.
///
/// # Errors
///
/// Returns [`ContactError::InvalidProfile`] if the inputs are empty or differ
/// in length.
pub fn separation(
    wheel_vertical: ArrayView1<'_, f64>,
    rail_vertical: ArrayView1<'_, f64>,
) -> Result<SeparationCurve, ContactError> {
    if wheel_vertical.len() != rail_vertical.len() {
        return Err(ProfileDefect::LengthMismatch {
            left: wheel_vertical.len(),
            right: rail_vertical.len(),
        }
        .into());
    }
    if wheel_vertical.is_empty() {
        return Err(ProfileDefect::Empty.into());
    }

    let gap = &wheel_vertical - &rail_vertical;
    let min = gap.iter().copied().fold(f64::INFINITY, f64::min);

    Ok(SeparationCurve(gap.mapv(|s| s - min)))
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn minimum_is_exactly_zero() {
        let wheel = array![3.7, 1.1, 0.3, 2.9, 5.0];
        let rail = array![-0.2, 0.05, 0.1, -0.3, 0.0];

        let curve = separation(wheel.view(), rail.view()).unwrap();

        let min = curve.values().iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(min, 0.0);
        assert!(curve.values().iter().all(|&s| s >= 0.0));
        assert_eq!(curve.first_contact(), 2);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn constant_offset_normalizes_to_zero() {
        let wheel = Array1::from_elem(21, 0.0);
        let rail = Array1::from_elem(21, -5.0);

        let curve = separation(wheel.view(), rail.view()).unwrap();

        assert!(curve.values().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn rejects_empty_input() {
        let empty = Array1::<f64>::zeros(0);

        let err = separation(empty.view(), empty.view()).unwrap_err();

        assert!(matches!(
            err,
            ContactError::InvalidProfile(ProfileDefect::Empty)
        ));
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = separation(array![1.0, 2.0].view(), array![1.0].view()).unwrap_err();

        assert!(matches!(
            err,
            ContactError::InvalidProfile(ProfileDefect::LengthMismatch { left: 2, right: 1 })
        ));
    }
}
