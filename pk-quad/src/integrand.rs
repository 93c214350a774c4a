/// A real-valued function of one real variable.
///
/// Closures and function pointers implement `Integrand` automatically, so
/// most callers never name this trait directly.
pub trait Integrand {
    /// Evaluates the integrand at `x`.
    fn eval(&self, x: f64) -> f64;
}

/// Blanket implementation for integrand closures.
impl<F> Integrand for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
