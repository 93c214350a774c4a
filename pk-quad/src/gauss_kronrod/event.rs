/// Bisection event emitted by the Gauss-Kronrod integrator.
///
/// One event is emitted after every bisection, once the two halves have been
/// evaluated and the running totals updated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Bisection counter (1-based).
    pub iter: usize,
    /// Number of subintervals after this bisection.
    pub subintervals: usize,
    /// The interval that was bisected.
    pub bisected: [f64; 2],
    /// Current estimate of the integral.
    pub value: f64,
    /// Current summed error estimate.
    pub abs_error: f64,
}
