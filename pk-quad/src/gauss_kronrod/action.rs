/// Control actions supported by the Gauss-Kronrod integrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop refining and return the current estimate.
    StopEarly,
}
