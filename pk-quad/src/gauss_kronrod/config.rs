use thiserror::Error;

/// Configuration for the adaptive Gauss-Kronrod integrator.
///
/// Integration stops successfully once the summed error estimate drops to
/// `max(abs_tol, rel_tol * |value|)`. `max_subintervals` caps the number of
/// subintervals the integration interval may be split into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_subintervals: usize,
    abs_tol: f64,
    rel_tol: f64,
}

/// Errors that can occur when validating an integrator config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_subintervals must be at least 1")]
    MaxSubintervals,

    #[error("abs_tol must be finite and non-negative")]
    AbsTol,

    #[error("rel_tol must be finite and non-negative")]
    RelTol,

    #[error("abs_tol and rel_tol cannot both be zero")]
    ZeroTolerance,
}

/// Tolerance used when none is given, the square root of machine epsilon.
pub const DEFAULT_TOL: f64 = 1.49e-8;

impl Default for Config {
    /// Fifty subintervals at the default tolerances.
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(50, DEFAULT_TOL, DEFAULT_TOL).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_subintervals` is zero, if a tolerance is
    /// negative or non-finite, or if both tolerances are zero.
    pub fn new(max_subintervals: usize, abs_tol: f64, rel_tol: f64) -> Result<Self, ConfigError> {
        if max_subintervals == 0 {
            return Err(ConfigError::MaxSubintervals);
        }
        if !abs_tol.is_finite() || abs_tol < 0.0 {
            return Err(ConfigError::AbsTol);
        }
        if !rel_tol.is_finite() || rel_tol < 0.0 {
            return Err(ConfigError::RelTol);
        }
        if abs_tol == 0.0 && rel_tol == 0.0 {
            return Err(ConfigError::ZeroTolerance);
        }

        Ok(Self {
            max_subintervals,
            abs_tol,
            rel_tol,
        })
    }

    /// Creates a config with no subinterval budget at the default tolerances.
    ///
    /// Termination is still guaranteed: the integrator reports roundoff or a
    /// bad integrand once subintervals shrink to machine resolution.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            max_subintervals: usize::MAX,
            ..Self::default()
        }
    }

    /// Returns a copy of this config with a different subinterval budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_subintervals` is zero.
    pub fn with_max_subintervals(self, max_subintervals: usize) -> Result<Self, ConfigError> {
        Self::new(max_subintervals, self.abs_tol, self.rel_tol)
    }

    /// Returns the maximum number of subintervals.
    #[must_use]
    pub fn max_subintervals(&self) -> usize {
        self.max_subintervals
    }

    /// Returns the absolute error tolerance.
    #[must_use]
    pub fn abs_tol(&self) -> f64 {
        self.abs_tol
    }

    /// Returns the relative error tolerance.
    #[must_use]
    pub fn rel_tol(&self) -> f64 {
        self.rel_tol
    }

    /// Returns the error bound that a result of magnitude `value` must meet.
    pub(super) fn error_bound(&self, value: f64) -> f64 {
        self.abs_tol.max(self.rel_tol * value.abs())
    }
}
