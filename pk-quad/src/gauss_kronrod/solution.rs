/// Indicates why the integrator returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The error estimate met the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final integrator status.
    pub status: Status,
    /// Estimate of the integral.
    pub value: f64,
    /// Estimated absolute error of `value`.
    pub abs_error: f64,
    /// Number of subintervals in the final partition.
    pub subintervals: usize,
    /// Number of integrand evaluations.
    pub evaluations: usize,
}
