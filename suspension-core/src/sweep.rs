//! Statistical sweeps over the swelling amplitude.
//!
//! Every sweep:
//! 1. Conditions a copy of the suspension with one training step at
//!    `training_swell` (using [`SuspensionConfig::conditioning_step`]).
//!    The caller's suspension is never mutated.
//! 2. Builds the grid `0, h, 2h, ..., |max_swell|` with `h = |swell_step|`.
//! 3. Samples the fraction of tagged particles, or a finite difference of
//!    it, on that grid.
//!
//! [`SuspensionConfig::conditioning_step`]: crate::config::SuspensionConfig::conditioning_step

use std::borrow::Cow;

use crate::{
    error::{SuspensionError, SuspensionResult},
    suspension::ParticleSuspension,
};

/// Tolerance for deciding whether `|max_swell|` lands on a grid point.
const GRID_EPS: f64 = 1e-9;

/// Largest number of samples a single sweep may request.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// A sampled curve: `values[k]` belongs to `swell[k]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwellCurve {
    pub swell: Vec<f64>,
    pub values: Vec<f64>,
}

impl SwellCurve {
    /// Number of samples on the curve.
    pub fn len(&self) -> usize {
        self.swell.len()
    }

    /// Returns `true` if the curve holds no samples. Curves built by the
    /// sweeps in this module always hold at least the `swell = 0` sample.
    pub fn is_empty(&self) -> bool {
        self.swell.is_empty()
    }

    /// Iterates `(swell, value)` samples in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.swell.iter().copied().zip(self.values.iter().copied())
    }
}

/// Endpoint-inclusive grid over `[0, |max_swell|]` with spacing
/// `|swell_step|`. The signs of both arguments are ignored.
///
/// ### Parameters
/// - `max_swell` - Upper end of the grid; only its magnitude is used.
/// - `swell_step` - Grid spacing; only its magnitude is used.
///
/// ### Returns
/// The samples `0, h, 2h, ...` up to and including `|max_swell|` when it
/// falls on the grid.
///
/// ### Errors
/// [`SuspensionError::InvalidSweep`] if the step is zero, either bound is
/// not finite, or the grid would hold more than [`MAX_GRID_POINTS`] samples.
pub fn swell_grid(max_swell: f64, swell_step: f64) -> SuspensionResult<Vec<f64>> {
    let max = max_swell.abs();
    let h = swell_step.abs();
    if !max.is_finite() || !h.is_finite() {
        return Err(SuspensionError::InvalidSweep(format!(
            "sweep bounds must be finite, got max {max_swell}, step {swell_step}"
        )));
    }
    if h == 0.0 {
        return Err(SuspensionError::InvalidSweep(
            "swell step must be non-zero".into(),
        ));
    }
    let intervals = (max / h + GRID_EPS).floor();
    let count = if intervals.is_finite() && intervals < MAX_GRID_POINTS as f64 {
        (intervals as usize).checked_add(1)
    } else {
        None
    };
    let Some(count) = count else {
        return Err(SuspensionError::InvalidSweep(format!(
            "grid from 0 to {max} in steps of {h} exceeds {MAX_GRID_POINTS} points"
        )));
    };
    Ok((0..count).map(|k| k as f64 * h).collect())
}

fn conditioned(suspension: &ParticleSuspension, training_swell: f64) -> Cow<'_, ParticleSuspension> {
    if suspension.tag(training_swell).is_empty() {
        return Cow::Borrowed(suspension);
    }
    let mut copy = suspension.clone();
    copy.train(training_swell, suspension.config().conditioning_step);
    Cow::Owned(copy)
}

/// Fraction of tagged particles at each grid point.
///
/// ### Parameters
/// - `suspension` - State to sample; it is only read.
/// - `training_swell` - Amplitude of the conditioning step applied to a
///   copy of `suspension` before sampling.
/// - `max_swell`, `swell_step` - Grid bounds, see [`swell_grid`].
///
/// ### Returns
/// A [`SwellCurve`] whose values lie in `[0, 1]`.
pub fn frac_tag(
    suspension: &ParticleSuspension,
    training_swell: f64,
    max_swell: f64,
    swell_step: f64,
) -> SuspensionResult<SwellCurve> {
    let swell = swell_grid(max_swell, swell_step)?;
    let state = conditioned(suspension, training_swell);
    let values = swell.iter().map(|&s| state.frac_tag_at(s)).collect();
    Ok(SwellCurve { swell, values })
}

/// Rate of change of the tagged fraction with respect to swell.
///
/// Interior samples use the midpoint difference
/// `(f(s + h/2) - f(s - h/2)) / h`, which places each jump of the step-like
/// fraction curve on the grid point nearest to it. Boundary samples are `0`.
pub fn tag_rate(
    suspension: &ParticleSuspension,
    training_swell: f64,
    max_swell: f64,
    swell_step: f64,
) -> SuspensionResult<SwellCurve> {
    let swell = swell_grid(max_swell, swell_step)?;
    let h = swell_step.abs();
    let state = conditioned(suspension, training_swell);
    let last = swell.len() - 1;
    let values = swell
        .iter()
        .enumerate()
        .map(|(k, &s)| {
            if k == 0 || k == last {
                0.0
            } else {
                (state.frac_tag_at(s + 0.5 * h) - state.frac_tag_at(s - 0.5 * h)) / h
            }
        })
        .collect();
    Ok(SwellCurve { swell, values })
}

/// Curvature of the tagged fraction: the central second difference
/// `(f[k+1] - 2 f[k] + f[k-1]) / h^2` at interior points, `0` at both ends.
pub fn tag_curvature(
    suspension: &ParticleSuspension,
    training_swell: f64,
    max_swell: f64,
    swell_step: f64,
) -> SuspensionResult<SwellCurve> {
    let SwellCurve { swell, values: f } =
        frac_tag(suspension, training_swell, max_swell, swell_step)?;
    let h2 = swell_step * swell_step;
    let mut values = vec![0.0; f.len()];
    for k in 1..f.len().saturating_sub(1) {
        values[k] = (f[k + 1] - 2.0 * f[k] + f[k - 1]) / h2;
    }
    Ok(SwellCurve { swell, values })
}
