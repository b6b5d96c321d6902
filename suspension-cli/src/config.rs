//! TOML run description for the `suspension` binary.
//!
//! ```toml
//! [suspension]
//! particles = 200
//! area_fraction = 0.2
//! seed = 7
//!
//! [sweep]
//! training_swell = 1.0
//! max_swell = 2.0
//! swell_step = 0.05
//! train_step = 0.5
//! ```
//!
//! `train_step`, when present, overrides `suspension.conditioning_step`.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use suspension_core::{SuspensionConfig, SuspensionError, SuspensionResult};

/// Swelling grid and conditioning amplitude for the printed sweep.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Amplitude of the conditioning step applied before sampling.
    pub training_swell: f64,
    pub max_swell: f64,
    pub swell_step: f64,
    /// Step size of the conditioning step. Falls back to
    /// `suspension.conditioning_step` when absent.
    pub train_step: Option<f64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            training_swell: 0.0,
            max_swell: 2.0,
            swell_step: 0.05,
            train_step: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub suspension: SuspensionConfig,
    pub sweep: SweepConfig,
}

impl RunConfig {
    /// Parses and validates a run description.
    ///
    /// ### Errors
    /// - [`SuspensionError::Config`] if `content` is not valid TOML for
    ///   this layout.
    /// - [`SuspensionError::InvalidConfiguration`] if the resulting
    ///   suspension parameters (after applying `sweep.train_step`) are
    ///   invalid.
    pub fn from_toml(content: &str) -> SuspensionResult<Self> {
        let config: RunConfig =
            toml::from_str(content).map_err(|e| SuspensionError::Config(e.to_string()))?;
        config.suspension_config().validate()?;
        Ok(config)
    }

    /// Suspension parameters with `sweep.train_step` applied as the
    /// conditioning step.
    pub fn suspension_config(&self) -> SuspensionConfig {
        let mut cfg = self.suspension.clone();
        if let Some(step) = self.sweep.train_step {
            cfg.conditioning_step = step;
        }
        cfg
    }

    /// Reads `path` and parses it with [`Self::from_toml`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SuspensionResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| SuspensionError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(RunConfig::from_toml("").unwrap(), RunConfig::default());
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let cfg = RunConfig::from_toml(
            r#"
            [suspension]
            particles = 50
            seed = 7

            [sweep]
            training_swell = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.suspension.particles, 50);
        assert_eq!(cfg.suspension.seed, Some(7));
        assert_eq!(cfg.suspension.area_fraction, 0.2);
        assert_eq!(cfg.sweep.training_swell, 1.0);
        assert_eq!(cfg.sweep.swell_step, 0.05);
    }

    #[test]
    fn train_step_sets_the_conditioning_step() {
        let cfg = RunConfig::from_toml(
            r#"
            [suspension]
            conditioning_step = 0.3

            [sweep]
            train_step = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.sweep.train_step, Some(0.5));
        assert_eq!(cfg.suspension_config().conditioning_step, 0.5);

        let without = RunConfig::from_toml("[suspension]\nconditioning_step = 0.3\n").unwrap();
        assert_eq!(without.suspension_config().conditioning_step, 0.3);
    }

    #[test]
    fn train_step_drives_the_sweep_conditioning() {
        use suspension_core::ParticleSuspension;

        let sweep_at = |train_step: f64| {
            let cfg = RunConfig::from_toml(&format!(
                "[suspension]\nparticles = 3\nseed = 1\n[sweep]\ntrain_step = {train_step:?}\n"
            ))
            .unwrap();
            let mut s = ParticleSuspension::from_config(cfg.suspension_config()).unwrap();
            s.set_centers(&[[0.0, 1.0], [0.0, 1.25], [0.0, 0.25]]).unwrap();
            s.frac_tag(0.5, 0.4, 0.2).unwrap().values
        };

        // A full step separates the 0-1 pair to 0.5; a tenth of a step
        // leaves it 0.275 apart, still tagged at swell 0.4.
        assert_eq!(sweep_at(1.0), vec![0.0, 0.0, 0.0]);
        assert_eq!(sweep_at(0.1), vec![0.0, 0.0, 2.0 / 3.0]);
    }

    #[test]
    fn non_positive_train_step_is_rejected() {
        let err = RunConfig::from_toml("[sweep]\ntrain_step = 0.0\n").unwrap_err();
        assert!(matches!(err, SuspensionError::InvalidConfiguration(_)));
    }

    #[test]
    fn invalid_suspension_is_rejected() {
        let err = RunConfig::from_toml("[suspension]\nparticles = 0\n").unwrap_err();
        assert!(matches!(err, SuspensionError::InvalidConfiguration(_)));
    }

    #[test]
    fn syntax_errors_become_config_errors() {
        let err = RunConfig::from_toml("[suspension\n").unwrap_err();
        assert!(matches!(err, SuspensionError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = RunConfig::load_from_file("/nonexistent/suspension.toml").unwrap_err();
        assert!(matches!(err, SuspensionError::Config(_)));
    }
}
