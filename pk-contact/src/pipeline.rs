//! The full contact evaluation as a single [`Model`].

use pk_core::Model;
use tracing::{debug, info};

use crate::{
    ContactError, ContactParameters, Profile, ValidParameters,
    align::AlignedPair,
    interpenetration::{InterpenetrationCurve, interpenetration},
    patch::{ContactPatch, find_patches},
    pressure::{IntegratorConfig, PatchPressure, patch_pressures},
    separation::{SeparationCurve, separation},
};

/// A wheel and a rail profile, in the same vertical frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInput {
    pub wheel: Profile,
    pub rail: Profile,
}

/// Every intermediate result of one contact evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSolution {
    pub pair: AlignedPair,
    pub separation: SeparationCurve,
    pub interpenetration: InterpenetrationCurve,
    pub patches: Vec<ContactPatch>,
    pub pressures: Vec<PatchPressure>,
}

impl ContactSolution {
    /// Returns the maximum pressure of each patch, in megapascals.
    #[must_use]
    pub fn max_pressures(&self) -> Vec<f64> {
        self.pressures.iter().map(|p| p.max_pressure).collect()
    }

    /// Returns the wheel point of deepest interpenetration in each patch.
    ///
    /// Ties resolve to the leftmost sample.
    #[must_use]
    pub fn contact_points(&self) -> Vec<[f64; 2]> {
        let depth = self.interpenetration.values();
        self.patches
            .iter()
            .filter(|patch| !patch.is_empty())
            .filter_map(|patch| {
                let deepest = patch.range().reduce(|best, i| {
                    if depth[i] > depth[best] { i } else { best }
                })?;
                self.pair.wheel().point(deepest)
            })
            .collect()
    }
}

/// The Piotrowski-Kik contact pipeline as a [`Model`].
///
/// The rail is the reference profile: the wheel is resampled onto the rail's
/// lateral coordinates before the gap is measured.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PkContact {
    parameters: ValidParameters,
    integrator: IntegratorConfig,
}

impl PkContact {
    /// Creates a model with the default integrator budgets.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Configuration`] if a parameter is out of range.
    pub fn new(parameters: &ContactParameters) -> Result<Self, ContactError> {
        Ok(Self {
            parameters: parameters.validate()?,
            integrator: IntegratorConfig::default(),
        })
    }

    #[must_use]
    pub fn with_integrator(self, integrator: IntegratorConfig) -> Self {
        Self { integrator, ..self }
    }

    #[must_use]
    pub fn parameters(&self) -> &ValidParameters {
        &self.parameters
    }

    #[must_use]
    pub fn integrator(&self) -> &IntegratorConfig {
        &self.integrator
    }
}

impl Model for PkContact {
    type Input = ContactInput;
    type Output = ContactSolution;
    type Error = ContactError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let pair = AlignedPair::new(&input.wheel, &input.rail)?;
        let separation = separation(pair.wheel().vertical(), pair.rail().vertical())?;

        let units = self.parameters.working_units();
        let interpenetration = interpenetration(&separation, units.virtual_penetration)?;

        let patches = find_patches(&interpenetration);
        debug!(samples = pair.len(), patches = patches.len(), "found contact patches");

        let pressures = patch_pressures(
            pair.wheel(),
            &interpenetration,
            &patches,
            &self.parameters,
            &self.integrator,
        )?;

        let peak = pressures.iter().map(|p| p.max_pressure).fold(0.0, f64::max);
        info!(
            patches = pressures.len(),
            max_pressure = peak,
            "evaluated contact"
        );

        Ok(ContactSolution {
            pair,
            separation,
            interpenetration,
            patches,
            pressures,
        })
    }
}
