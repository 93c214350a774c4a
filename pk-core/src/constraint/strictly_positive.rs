use std::cmp::Ordering;

use num_traits::Zero;

use crate::constraint::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Works with any type `T` that implements [`PartialOrd`] and [`Zero`], which
/// includes the primitive floats and `uom` quantities such as `Length`.
///
/// # Examples
///
/// ```
/// use pk_core::constraint::{Constrained, StrictlyPositive};
///
/// let a = Constrained::<_, StrictlyPositive>::new(0.01).unwrap();
/// assert_eq!(a.into_inner(), 0.01);
///
/// let b = StrictlyPositive::new(460.0).unwrap();
/// assert_eq!(b.as_ref(), &460.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-1.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if the value is greater than zero.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is less than zero.
    /// - [`ConstraintError::Zero`] if the value equals zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
