//! Piotrowski-Kik normal contact between a wheel and a rail.
//!
//! Given two cross-sectional profiles and a virtual penetration, the
//! pipeline finds the contact patches and evaluates the maximum normal
//! pressure of each one:
//!
//! 1. [`align`] resamples the wheel onto the rail's lateral coordinates.
//! 2. [`separation`] measures the vertical gap, shifted so its minimum is zero.
//! 3. [`interpenetration`] turns the gap into the virtual overlap curve.
//! 4. [`patch`] splits the overlap into contiguous contact patches.
//! 5. [`pressure`] integrates each patch into a load and a maximum pressure.
//!
//! [`PkContact`] runs all five stages as a single [`pk_core::Model`].
//! [`geometry`] and [`profile::read`] prepare input profiles.
//!
//! Lengths in profiles are millimetres, and the integrator evaluates the
//! model in millimetres and megapascals.

mod error;
mod pipeline;

pub mod align;
pub mod geometry;
pub mod interpenetration;
pub mod parameters;
pub mod patch;
pub mod pressure;
pub mod profile;
pub mod separation;

pub use error::{ContactError, Integral, ProfileDefect};
pub use parameters::{ContactParameters, ValidParameters};
pub use pipeline::{ContactInput, ContactSolution, PkContact};
pub use profile::Profile;
