//! Numerical quadrature for the Piotrowski-Kik contact workspace.
//!
//! The contact model reduces each contact patch to a sum of one-dimensional
//! integrals whose integrands carry square-root behaviour at the interval
//! ends and, for samples on the symmetry line, a sharp regularized peak at
//! the origin. [`gauss_kronrod`] provides a globally adaptive integrator that
//! resolves both by bisecting wherever the error estimate is largest.

mod integrand;

pub mod gauss_kronrod;

pub use integrand::Integrand;
