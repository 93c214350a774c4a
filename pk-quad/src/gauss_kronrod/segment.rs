use crate::Integrand;

use super::rule::{self, Estimate};

/// One subinterval of the adaptive partition with its local estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Segment {
    pub a: f64,
    pub b: f64,
    pub estimate: Estimate,
}

impl Segment {
    /// Evaluates the rule on `[a, b]`.
    pub fn new<F: Integrand + ?Sized>(f: &F, a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            estimate: rule::kronrod21(f, a, b),
        }
    }

    pub fn value(&self) -> f64 {
        self.estimate.value
    }

    pub fn abs_error(&self) -> f64 {
        self.estimate.abs_error
    }

    pub fn is_finite(&self) -> bool {
        self.estimate.value.is_finite() && self.estimate.abs_error.is_finite()
    }

    /// Returns true if the error estimate came from the sharpened
    /// Kronrod-Gauss difference rather than saturating at `asc`.
    /// Saturated estimates are left out of the roundoff heuristics.
    #[allow(clippy::float_cmp)]
    pub fn error_is_sharpened(&self) -> bool {
        self.estimate.asc != self.estimate.abs_error
    }

    /// Returns true if bisecting this segment would not produce distinct points.
    pub fn at_machine_resolution(&self, mid: f64) -> bool {
        let (a, b) = (self.a.abs(), self.b.abs());
        a.max(b) <= (1.0 + 100.0 * f64::EPSILON) * (mid.abs() + 1000.0 * f64::MIN_POSITIVE)
    }
}
