/// Errors that can occur during adaptive Gauss-Kronrod integration.
///
/// Every variant that ends an integration early carries the partial result,
/// so callers can report how far the estimate got.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("integration bound is not finite: {value}")]
    NonFiniteBounds { value: f64 },

    #[error("integrand is not finite on [{a}, {b}]")]
    NonFiniteValue { a: f64, b: f64 },

    #[error(
        "subinterval limit {limit} reached: value={value}, abs_error={abs_error} exceeds bound {bound}"
    )]
    SubdivisionLimit {
        limit: usize,
        value: f64,
        abs_error: f64,
        bound: f64,
    },

    #[error("roundoff prevents reaching the requested tolerance: value={value}, abs_error={abs_error}")]
    Roundoff { value: f64, abs_error: f64 },

    #[error("integrand behaves badly near x = {at}: subintervals reached machine resolution")]
    BadIntegrand { at: f64, value: f64, abs_error: f64 },
}
