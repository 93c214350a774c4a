/// A computation from a typed input to a typed output that may fail.
///
/// Implementations are pure: the same input always yields the same output.
/// The contact pipeline is one `Model`, taking a wheel and rail pair and
/// returning pressures per contact patch.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the model for `input`.
    ///
    /// # Errors
    ///
    /// Returns the model's own error type when the input cannot be evaluated.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}
