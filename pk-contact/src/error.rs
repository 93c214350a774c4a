//! Error types for the contact pipeline.

use std::{fmt, path::PathBuf};

use pk_core::constraint::ConstraintError;
use thiserror::Error;

use crate::patch::ContactPatch;

/// Errors that can occur while evaluating Piotrowski-Kik contact.
///
/// Each variant identifies the stage that first observed the problem.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactError {
    /// A profile or derived curve is malformed.
    #[error("invalid profile: {0}")]
    InvalidProfile(#[from] ProfileDefect),

    /// An alignment query fell outside the source profile's lateral range.
    #[error("lateral coordinate {value} is outside the source profile range [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },

    /// A physical parameter violates its domain.
    #[error("invalid parameter `{parameter}`")]
    Configuration {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// Numerical integration did not converge for one sample of a patch.
    #[error("{integral} integral failed for sample {sample} of patch {patch}")]
    Quadrature {
        integral: Integral,
        patch: ContactPatch,
        sample: usize,
        #[source]
        source: pk_quad::gauss_kronrod::Error,
    },

    /// A profile file could not be read.
    #[error("failed to read profile from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ContactError {
    /// Create a configuration error for the named parameter.
    pub(crate) fn configuration(parameter: &'static str, source: ConstraintError) -> Self {
        Self::Configuration { parameter, source }
    }
}

/// The ways a profile or derived curve can be malformed.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ProfileDefect {
    #[error("a profile needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },

    #[error("expected 2 columns (lateral, vertical), got {columns}")]
    WrongShape { columns: usize },

    #[error("lateral and vertical columns differ in length: {lateral} vs {vertical}")]
    ColumnMismatch { lateral: usize, vertical: usize },

    #[error("lateral coordinates must be strictly increasing, violated at index {index}")]
    NotIncreasing { index: usize },

    #[error("non-finite coordinate at index {index}")]
    NonFinite { index: usize },

    #[error("curve is empty")]
    Empty,

    #[error("lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("negative interpenetration {value} at index {index}")]
    NegativeInterpenetration { index: usize, value: f64 },

    #[error("patch {patch} extends past curve length {len}")]
    PatchOutOfRange { patch: ContactPatch, len: usize },

    #[error("line {line}: cannot parse `{token}` as a number")]
    Unparseable { line: usize, token: String },

    #[error("interpolation grid rejected: {reason}")]
    Grid { reason: String },
}

/// Identifies which of the two per-sample integrals failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Integral {
    /// Half-chord weighted by inverse distance to the sample.
    Weighted,
    /// Plain half-chord, the area of the half-ellipse.
    Area,
}

impl fmt::Display for Integral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weighted => f.write_str("weighted"),
            Self::Area => f.write_str("area"),
        }
    }
}
