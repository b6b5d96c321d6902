//! Periodic square cell and minimum-image geometry.
//!
//! The cell side is chosen so that `n` disks of unit diameter cover the
//! requested area fraction: `n * pi * 0.25 = phi * boxsize^2`.

use std::f64::consts::PI;

use glam::DVec2;

use crate::error::{SuspensionError, SuspensionResult};

/// Side length of the periodic cell holding `n` unit-diameter disks at
/// area fraction `phi`.
///
/// ### Errors
/// [`SuspensionError::InvalidConfiguration`] if `n == 0` or `phi` is not a
/// positive finite number.
pub fn boxsize(n: usize, phi: f64) -> SuspensionResult<f64> {
    if n == 0 {
        return Err(SuspensionError::InvalidConfiguration(
            "particle count must be positive, got 0".into(),
        ));
    }
    if !(phi.is_finite() && phi > 0.0) {
        return Err(SuspensionError::InvalidConfiguration(format!(
            "area fraction must be a positive number, got {phi}"
        )));
    }
    Ok((n as f64 * PI * 0.25 / phi).sqrt())
}

/// Minimum-image form of a raw coordinate difference along one axis.
///
/// If `|d| > boxsize / 2` the nearest periodic copy lies on the other side,
/// so `boxsize * sign(d)` is subtracted. Otherwise `d` is returned as is.
///
/// At most one box length is removed, so the result is only the true
/// nearest image for `|d| <= 1.5 * boxsize`. Differences between wrapped
/// positions always satisfy this; unwrapped input may not.
///
/// ### Parameters
/// - `d` - Raw difference `q - p` along one axis.
/// - `boxsize` - Side length of the periodic cell.
#[inline]
pub fn wrap_delta(d: f64, boxsize: f64) -> f64 {
    if d.abs() > 0.5 * boxsize {
        d - boxsize * d.signum()
    } else {
        d
    }
}

/// Maps a single coordinate into `[0, boxsize)`.
///
/// Equivalent to `((x mod boxsize) + boxsize) mod boxsize`, with the
/// rounding case that would yield exactly `boxsize` mapped to `0`.
#[inline]
pub fn wrap_coordinate(x: f64, boxsize: f64) -> f64 {
    let w = x.rem_euclid(boxsize);
    // rem_euclid rounds tiny negatives up to exactly `boxsize`.
    if w >= boxsize { 0.0 } else { w }
}

/// Minimum-image separation vector pointing from `p` to `q`.
///
/// [`wrap_delta`] is applied to each axis independently, with the same
/// one-box-length limit.
#[inline]
pub fn minimum_image(p: DVec2, q: DVec2, boxsize: f64) -> DVec2 {
    let d = q - p;
    DVec2::new(wrap_delta(d.x, boxsize), wrap_delta(d.y, boxsize))
}

/// Euclidean length of [`minimum_image`].
#[inline]
pub fn minimum_image_distance(p: DVec2, q: DVec2, boxsize: f64) -> f64 {
    minimum_image(p, q, boxsize).length()
}

/// Immutable description of the periodic cell.
///
/// ### Fields
/// - `n` - Number of particles the cell was sized for.
/// - `phi` - Target area fraction.
/// - `boxsize` - Side length derived from `n` and `phi` by [`boxsize`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodicDomain {
    n: usize,
    phi: f64,
    boxsize: f64,
}

impl PeriodicDomain {
    /// Sizes a cell for `n` unit-diameter disks at area fraction `phi`.
    ///
    /// ### Errors
    /// Same as [`boxsize`].
    pub fn new(n: usize, phi: f64) -> SuspensionResult<Self> {
        let boxsize = boxsize(n, phi)?;
        Ok(Self { n, phi, boxsize })
    }

    /// Particle count `n`.
    pub fn particles(&self) -> usize {
        self.n
    }

    /// Area fraction `phi`.
    pub fn area_fraction(&self) -> f64 {
        self.phi
    }

    /// Side length of the cell.
    pub fn boxsize(&self) -> f64 {
        self.boxsize
    }

    /// Whether `p` lies in `[0, boxsize)` on both axes.
    pub fn contains(&self, p: DVec2) -> bool {
        let inside = |x: f64| (0.0..self.boxsize).contains(&x);
        inside(p.x) && inside(p.y)
    }

    /// Folds both coordinates of `p` into `[0, boxsize)` with
    /// [`wrap_coordinate`].
    pub fn wrap(&self, p: DVec2) -> DVec2 {
        DVec2::new(
            wrap_coordinate(p.x, self.boxsize),
            wrap_coordinate(p.y, self.boxsize),
        )
    }

    /// [`minimum_image`] in this cell.
    pub fn minimum_image(&self, p: DVec2, q: DVec2) -> DVec2 {
        minimum_image(p, q, self.boxsize)
    }

    /// [`minimum_image_distance`] in this cell.
    pub fn distance(&self, p: DVec2, q: DVec2) -> f64 {
        minimum_image_distance(p, q, self.boxsize)
    }
}
