//! Maximum normal pressure per contact patch (PK model eq. 13).
//!
//! For every sample `i` of a patch, the interpenetration `g(i)` and the
//! nominal rolling radius `R` define the longitudinal half-length of the
//! contact, `x_front(i) = sqrt(2 R g(i))`. Two integrals over
//! `[-x_front, x_front]` are evaluated per sample and summed over the patch:
//!
//! - the weighted sum `S1` of `sqrt(x_front² - x²) / sqrt(x² + y(i)² + ε)`,
//! - the area sum `S2` of `sqrt(x_front² - x²)`,
//!
//! where `y(i)` is the lateral coordinate of the sample. Matching elastic
//! half-space theory gives the patch load `coef · S2 / S1` with
//! `coef = π E δ / (2 (1 - ν²))`, and the maximum pressure
//! `load · sqrt(2 R δ₀) / S2`.

use std::f64::consts::PI;

use pk_quad::gauss_kronrod::{self, Config, DEFAULT_TOL};
use tracing::{debug, trace};

use crate::{
    Profile,
    error::{ContactError, Integral, ProfileDefect},
    interpenetration::InterpenetrationCurve,
    parameters::{ValidParameters, WorkingUnits},
    patch::{ContactPatch, find_patches},
};

/// Regularization added under the distance root, keeping the weighted
/// integrand finite where a sample sits at `y = 0`.
pub const REGULARIZATION: f64 = 1e-10;

/// Quadrature budgets for the two per-sample integrals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    /// Budget for the weighted integral, whose peak at the origin needs bisection.
    pub weighted: Config,
    /// Budget for the area integral.
    pub area: Config,
}

impl Default for IntegratorConfig {
    /// One hundred subintervals for the weighted integral, no limit for the area.
    fn default() -> Self {
        Self {
            // Known-good values, unwrap is safe
            weighted: Config::new(100, DEFAULT_TOL, DEFAULT_TOL).unwrap(),
            area: Config::unbounded(),
        }
    }
}

/// Load and maximum pressure of one contact patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatchPressure {
    /// The patch these values belong to.
    pub patch: ContactPatch,
    /// Total normal load carried by the patch.
    pub load: f64,
    /// Peak normal pressure within the patch.
    pub max_pressure: f64,
}

/// Computes the maximum pressure of every contact patch in `interpenetration`.
///
/// Patches are found with [`find_patches`]; a curve with no contact yields
/// an empty result.
///
/// # Errors
///
/// See [`patch_pressures`].
pub fn max_pressures(
    wheel: &Profile,
    interpenetration: &InterpenetrationCurve,
    parameters: &ValidParameters,
    config: &IntegratorConfig,
) -> Result<Vec<PatchPressure>, ContactError> {
    let patches = find_patches(interpenetration);
    patch_pressures(wheel, interpenetration, &patches, parameters, config)
}

/// Computes the maximum pressure of each given patch, in the order given.
///
/// `wheel` must be aligned with `interpenetration`: its lateral coordinates
/// are the `y(i)` of the samples. Empty patches are skipped.
///
/// # Errors
///
/// - [`ContactError::InvalidProfile`] if the wheel and curve lengths differ,
///   or a patch extends past the end of the curve.
/// - [`ContactError::Quadrature`] if an integral fails to converge, naming
///   the patch and the sample.
pub fn patch_pressures(
    wheel: &Profile,
    interpenetration: &InterpenetrationCurve,
    patches: &[ContactPatch],
    parameters: &ValidParameters,
    config: &IntegratorConfig,
) -> Result<Vec<PatchPressure>, ContactError> {
    if wheel.len() != interpenetration.len() {
        return Err(ProfileDefect::LengthMismatch {
            left: wheel.len(),
            right: interpenetration.len(),
        }
        .into());
    }
    if let Some(&patch) = patches.iter().find(|p| p.end > interpenetration.len()) {
        return Err(ProfileDefect::PatchOutOfRange {
            patch,
            len: interpenetration.len(),
        }
        .into());
    }

    let integrator = PatchIntegrator {
        lateral: wheel.lateral().to_vec(),
        interpenetration: interpenetration.values().to_vec(),
        units: parameters.working_units(),
        config: *config,
    };

    let patches = patches.iter().filter(|p| !p.is_empty());

    #[cfg(feature = "parallel")]
    let pressures = {
        use rayon::prelude::*;

        patches
            .collect::<Vec<_>>()
            .into_par_iter()
            .map(|patch| integrator.integrate(*patch))
            .collect::<Result<Vec<_>, _>>()?
    };

    #[cfg(not(feature = "parallel"))]
    let pressures = patches
        .map(|patch| integrator.integrate(*patch))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(pressures)
}

/// Read-only inputs shared by every patch.
struct PatchIntegrator {
    lateral: Vec<f64>,
    interpenetration: Vec<f64>,
    units: WorkingUnits,
    config: IntegratorConfig,
}

/// The two integrals of one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SampleIntegrals {
    weighted: f64,
    area: f64,
}

impl PatchIntegrator {
    fn integrate(&self, patch: ContactPatch) -> Result<PatchPressure, ContactError> {
        let samples = patch
            .range()
            .map(|sample| self.sample(patch, sample))
            .collect::<Result<Vec<_>, _>>()?;

        let weighted: f64 = samples.iter().map(|s| s.weighted).sum();
        let area: f64 = samples.iter().map(|s| s.area).sum();

        let WorkingUnits {
            youngs_modulus,
            poisson_ratio,
            rolling_radius,
            penetration,
            virtual_penetration,
        } = self.units;

        let coef = 0.5 * PI * youngs_modulus * penetration / (1.0 - poisson_ratio * poisson_ratio);
        let load = coef * area / weighted;
        let max_pressure = load * (2.0 * rolling_radius * virtual_penetration).sqrt() / area;

        debug!(%patch, weighted, area, load, max_pressure, "integrated patch");

        Ok(PatchPressure {
            patch,
            load,
            max_pressure,
        })
    }

    fn sample(&self, patch: ContactPatch, sample: usize) -> Result<SampleIntegrals, ContactError> {
        let y = self.lateral[sample];
        let x_front = (2.0 * self.units.rolling_radius * self.interpenetration[sample]).sqrt();
        let bounds = [-x_front, x_front];

        let half_chord = |x: f64| (x_front * x_front - x * x).max(0.0).sqrt();
        let weighted_chord = |x: f64| half_chord(x) / (x * x + y * y + REGULARIZATION).sqrt();

        let failed = |integral| {
            move |source| ContactError::Quadrature {
                integral,
                patch,
                sample,
                source,
            }
        };

        let weighted =
            gauss_kronrod::integrate_unobserved(&weighted_chord, bounds, &self.config.weighted)
                .map_err(failed(Integral::Weighted))?;
        let area = gauss_kronrod::integrate_unobserved(&half_chord, bounds, &self.config.area)
            .map_err(failed(Integral::Area))?;

        trace!(
            sample,
            y,
            x_front,
            weighted = weighted.value,
            area = area.value,
            subintervals = weighted.subintervals + area.subintervals,
            "integrated sample"
        );

        Ok(SampleIntegrals {
            weighted: weighted.value,
            area: area.value,
        })
    }
}
