//! Resampling one profile onto another profile's lateral coordinates.

use ndarray::Array1;
use ninterp::{
    interpolator::Extrapolate,
    prelude::{Interp1DOwned, Interpolator},
    strategy::Linear,
};

use crate::{
    Profile,
    error::{ContactError, ProfileDefect},
};

/// Resamples `source` at the lateral coordinates of `reference`.
///
/// The returned profile has exactly the reference's lateral coordinates, with
/// vertical values linearly interpolated from `source`. Extrapolation is
/// never performed: geometry invented beyond the measured profile would
/// produce meaningless contact results.
///
/// # Errors
///
/// Returns [`ContactError::OutOfDomain`] for the first reference coordinate
/// outside the source's lateral range.
pub fn align(source: &Profile, reference: &Profile) -> Result<Profile, ContactError> {
    let [min, max] = source.lateral_range();
    let out_of_domain = |value| ContactError::OutOfDomain { value, min, max };

    if let Some(&value) = reference.lateral().iter().find(|&&y| y < min || y > max) {
        return Err(out_of_domain(value));
    }

    let interp = Interp1DOwned::new(
        source.lateral().to_owned(),
        source.vertical().to_owned(),
        Linear,
        Extrapolate::Error,
    )
    .map_err(|err| ProfileDefect::Grid {
        reason: err.to_string(),
    })?;

    let vertical = reference
        .lateral()
        .iter()
        .map(|&y| interp.interpolate(&[y]).map_err(|_| out_of_domain(y)))
        .collect::<Result<Array1<f64>, _>>()?;

    Profile::new(reference.lateral().to_owned(), vertical)
}

/// A wheel and rail profile sharing identical lateral samples.
///
/// The rail is the reference: the wheel is resampled onto the rail's lateral
/// coordinates, so both profiles have the same length by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    wheel: Profile,
    rail: Profile,
}

impl AlignedPair {
    /// Aligns `wheel` onto the lateral coordinates of `rail`.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::OutOfDomain`] if the rail extends laterally
    /// beyond the wheel.
    pub fn new(wheel: &Profile, rail: &Profile) -> Result<Self, ContactError> {
        Ok(Self {
            wheel: align(wheel, rail)?,
            rail: rail.clone(),
        })
    }

    /// Returns the resampled wheel profile.
    #[must_use]
    pub fn wheel(&self) -> &Profile {
        &self.wheel
    }

    /// Returns the rail profile.
    #[must_use]
    pub fn rail(&self) -> &Profile {
        &self.rail
    }

    /// Returns the number of shared lateral samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rail.len()
    }

    /// Always false; aligned profiles hold at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}
