//! Type-level numeric constraints checked once at construction.
//!
//! Physical inputs to the contact model (rolling radius, penetrations,
//! Young's modulus) must satisfy simple sign invariants before any
//! integration starts. A [`Constrained<T, C>`] can only be built from a
//! value that passes the check of its marker `C`.
//!
//! [`StrictlyPositive`] is provided here. Bounds specific to one model,
//! such as a Poisson's ratio in `(0, 0.5)`, are markers implementing
//! [`Constraint<T>`] next to the parameters they guard.

mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;

/// A numeric invariant, checked by a zero-sized marker type.
///
/// Markers hold no data; [`Constrained<T, C>`] carries the value and `C`
/// only decides whether the value is admitted.
pub trait Constraint<T> {
    /// Admits `value` or names the rule it breaks.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The rule a rejected value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("must be greater than zero, got a negative value")]
    Negative,
    #[error("must be greater than zero, got zero")]
    Zero,
    #[error("must be finite, got an infinite value")]
    Infinite,
    #[error("must be a number, got NaN")]
    NotANumber,
    #[error("below the lower bound")]
    BelowMinimum,
    #[error("above the upper bound")]
    AboveMaximum,
}

/// A value that passed the check of marker `C`.
///
/// The only way to build one is [`Constrained::new`], so holding a
/// `Constrained<T, C>` is proof that the check succeeded.
///
/// # Example
///
/// ```
/// use pk_core::constraint::{Constrained, StrictlyPositive};
///
/// let radius = Constrained::<_, StrictlyPositive>::new(460.0).unwrap();
/// assert_eq!(radius.into_inner(), 460.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C::check`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
