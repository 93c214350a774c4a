//! Core traits and types for Piotrowski-Kik contact modeling.
//!
//! This crate defines the shared abstractions the quadrature engine and the
//! contact pipeline build on:
//!
//! - [`Model`]: a deterministic callable that maps a typed input to a typed output
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`constraint`]: numeric invariants checked once at construction time

pub mod constraint;

mod model;
mod observer;

pub use model::Model;
pub use observer::Observer;
