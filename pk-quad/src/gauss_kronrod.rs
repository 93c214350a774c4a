//! Globally adaptive 21-point Gauss-Kronrod quadrature.
//!
//! # Algorithm
//!
//! The integrator applies the 21-point Kronrod rule, with its embedded
//! 10-point Gauss rule as error estimator, to the whole interval. While the
//! summed error estimate exceeds `max(abs_tol, rel_tol * |value|)`, the
//! subinterval with the largest error is bisected and both halves are
//! re-estimated. This concentrates evaluations where the integrand is least
//! smooth, such as square-root edges or narrow peaks.
//!
//! # Termination
//!
//! Integration fails rather than returning a degraded value when:
//!
//! - the partition would exceed [`Config::max_subintervals`]
//!   ([`Error::SubdivisionLimit`]),
//! - bisection stops improving the error estimate ([`Error::Roundoff`]),
//! - a subinterval shrinks to machine resolution ([`Error::BadIntegrand`]).
//!
//! # Observer Events
//!
//! The integrator emits one [`Event`] after each bisection. Observers can
//! return [`Action::StopEarly`] to halt and accept the current estimate.

mod action;
mod config;
mod error;
mod event;
mod rule;
mod segment;
mod solution;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_TOL};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use pk_core::Observer;
use tracing::trace;

use crate::Integrand;

use segment::Segment;

/// Bisections allowed without meaningful progress before reporting roundoff.
const MAX_STALLED: usize = 6;

/// Bisections allowed that increase the local error before reporting roundoff.
const MAX_GROWING: usize = 20;

/// Integrates `f` over `bounds` with adaptive Gauss-Kronrod quadrature.
///
/// Bounds may be given in either order; reversed bounds negate the result.
/// The observer receives an [`Event`] after each bisection.
///
/// # Errors
///
/// Returns an error if a bound is not finite, the integrand produces a
/// non-finite value, or the tolerance cannot be met within the configured
/// budget. See the [module docs](self) for the failure conditions.
pub fn integrate<F, Obs>(
    f: &F,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Integrand + ?Sized,
    Obs: Observer<Event, Action>,
{
    let [a, b] = validate_bounds(bounds)?;

    if a.total_cmp(&b).is_eq() {
        return Ok(Solution {
            status: Status::Converged,
            value: 0.0,
            abs_error: 0.0,
            subintervals: 1,
            evaluations: 0,
        });
    }

    let whole = Segment::new(f, a, b);
    if !whole.is_finite() {
        return Err(Error::NonFiniteValue { a, b });
    }

    let mut evaluations = rule::EVALUATIONS;
    let mut value = whole.value();
    let mut abs_error = whole.abs_error();

    if abs_error <= config.error_bound(value) {
        return Ok(Solution {
            status: Status::Converged,
            value,
            abs_error,
            subintervals: 1,
            evaluations,
        });
    }
    if abs_error <= 50.0 * f64::EPSILON * whole.estimate.abs_value {
        return Err(Error::Roundoff { value, abs_error });
    }

    let mut segments = vec![whole];
    let mut stalled = 0;
    let mut growing = 0;
    let mut iter = 0;

    loop {
        iter += 1;
        if segments.len() >= config.max_subintervals() {
            return Err(Error::SubdivisionLimit {
                limit: config.max_subintervals(),
                value,
                abs_error,
                bound: config.error_bound(value),
            });
        }

        let worst = segments.swap_remove(worst_index(&segments));
        let mid = 0.5 * (worst.a + worst.b);
        let left = Segment::new(f, worst.a, mid);
        let right = Segment::new(f, mid, worst.b);
        evaluations += 2 * rule::EVALUATIONS;

        if !left.is_finite() || !right.is_finite() {
            return Err(Error::NonFiniteValue {
                a: worst.a,
                b: worst.b,
            });
        }

        let split_value = left.value() + right.value();
        let split_error = left.abs_error() + right.abs_error();

        if left.error_is_sharpened() && right.error_is_sharpened() {
            if (worst.value() - split_value).abs() <= 1e-5 * split_value.abs()
                && split_error >= 0.99 * worst.abs_error()
            {
                stalled += 1;
            }
            if iter > 10 && split_error > worst.abs_error() {
                growing += 1;
            }
        }

        value += split_value - worst.value();
        abs_error += split_error - worst.abs_error();
        segments.push(left);
        segments.push(right);

        let event = Event {
            iter,
            subintervals: segments.len(),
            bisected: [worst.a, worst.b],
            value,
            abs_error,
        };
        trace!(
            iter,
            subintervals = event.subintervals,
            value,
            abs_error,
            "bisected [{}, {}]",
            worst.a,
            worst.b
        );

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(finish(&segments, Status::StoppedByObserver, evaluations));
                }
            }
        }

        if abs_error <= config.error_bound(value) {
            return Ok(finish(&segments, Status::Converged, evaluations));
        }

        if stalled >= MAX_STALLED || growing >= MAX_GROWING {
            return Err(Error::Roundoff { value, abs_error });
        }

        if worst.at_machine_resolution(mid) {
            return Err(Error::BadIntegrand {
                at: mid,
                value,
                abs_error,
            });
        }
    }
}

/// Integrates `f` over `bounds` without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`integrate`].
pub fn integrate_unobserved<F>(f: &F, bounds: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Integrand + ?Sized,
{
    integrate(f, bounds, config, ())
}

/// Checks that both bounds are finite.
fn validate_bounds(bounds: [f64; 2]) -> Result<[f64; 2], Error> {
    for value in bounds {
        if !value.is_finite() {
            return Err(Error::NonFiniteBounds { value });
        }
    }
    Ok(bounds)
}

/// Returns the index of the segment with the largest error estimate.
fn worst_index(segments: &[Segment]) -> usize {
    segments
        .iter()
        .enumerate()
        .max_by(|(_, lhs), (_, rhs)| lhs.abs_error().total_cmp(&rhs.abs_error()))
        .map_or(0, |(index, _)| index)
}

/// Builds the solution by re-summing the partition, dropping drift from the running totals.
fn finish(segments: &[Segment], status: Status, evaluations: usize) -> Solution {
    Solution {
        status,
        value: segments.iter().map(Segment::value).sum(),
        abs_error: segments.iter().map(Segment::abs_error).sum(),
        subintervals: segments.len(),
        evaluations,
    }
}
