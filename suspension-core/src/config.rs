use serde::{Deserialize, Serialize};

use crate::error::{SuspensionError, SuspensionResult};

/// Construction parameters for a [`crate::suspension::ParticleSuspension`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuspensionConfig {
    /// Number of particles `n`.
    pub particles: usize,
    /// Fraction of the cell covered by unit-diameter disks.
    pub area_fraction: f64,
    /// Seed for the initial layout. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Step size of the conditioning `train` applied before each sweep.
    pub conditioning_step: f64,
}

impl Default for SuspensionConfig {
    fn default() -> Self {
        Self {
            particles: 10,
            area_fraction: 0.2,
            seed: None,
            conditioning_step: 1.0,
        }
    }
}

impl SuspensionConfig {
    /// Parameters for `particles` disks at `area_fraction`, with the
    /// default conditioning step.
    ///
    /// ### Parameters
    /// - `particles` - Number of particles; must be positive.
    /// - `area_fraction` - Covered fraction of the cell; must be positive.
    /// - `seed` - Layout seed, or `None` for OS entropy.
    pub fn new(particles: usize, area_fraction: f64, seed: Option<u64>) -> Self {
        Self {
            particles,
            area_fraction,
            seed,
            ..Self::default()
        }
    }

    /// Validate configuration parameters.
    ///
    /// ### Errors
    /// [`SuspensionError::InvalidConfiguration`] for a zero particle count,
    /// or a non-positive or non-finite area fraction or conditioning step.
    pub fn validate(&self) -> SuspensionResult<()> {
        if self.particles == 0 {
            return Err(SuspensionError::InvalidConfiguration(
                "particle count must be positive, got 0".into(),
            ));
        }
        if !(self.area_fraction.is_finite() && self.area_fraction > 0.0) {
            return Err(SuspensionError::InvalidConfiguration(format!(
                "area fraction must be a positive number, got {}",
                self.area_fraction
            )));
        }
        if !(self.conditioning_step.is_finite() && self.conditioning_step > 0.0) {
            return Err(SuspensionError::InvalidConfiguration(format!(
                "conditioning step must be a positive number, got {}",
                self.conditioning_step
            )));
        }
        Ok(())
    }
}
