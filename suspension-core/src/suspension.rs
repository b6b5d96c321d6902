//! Particle State: the owned position array plus the public facade that
//! routes queries and mutations to [`crate::contact`], [`crate::relax`]
//! and [`crate::sweep`].

use glam::DVec2;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{
    config::SuspensionConfig,
    contact,
    domain::PeriodicDomain,
    error::{SuspensionError, SuspensionResult},
    relax,
    sweep::{self, SwellCurve},
    types::{ParticleId, TaggedPair},
};

/// A periodic 2-D suspension of unit-diameter particles.
///
/// Queries (`tag`, `frac_tag_at`, the sweeps) borrow `&self` and always
/// recompute from the current positions. Mutations (`set_centers`,
/// `reset`, `wrap`, `repel`, `train`) borrow `&mut self`.
///
/// ### Fields
/// - `config` - Parameters the suspension was built from.
/// - `domain` - Periodic cell derived from `config`.
/// - `centers` - One position per particle, indexed by [`ParticleId`].
/// - `rng` - Generator used for the initial layout and `reset`.
#[derive(Clone, Debug)]
pub struct ParticleSuspension {
    config: SuspensionConfig,
    domain: PeriodicDomain,
    centers: Vec<DVec2>,
    rng: StdRng,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn random_centers(n: usize, boxsize: f64, rng: &mut impl Rng) -> Vec<DVec2> {
    (0..n)
        .map(|_| {
            let x = rng.random_range(0.0..boxsize);
            let y = rng.random_range(0.0..boxsize);
            DVec2::new(x, y)
        })
        .collect()
}

/// Parses `rows` into exactly `n` coordinate pairs.
///
/// ### Errors
/// [`SuspensionError::MalformedInput`] if there are not `n` rows or any row
/// does not hold exactly two numbers.
pub fn parse_centers<R: AsRef<[f64]>>(rows: &[R], n: usize) -> SuspensionResult<Vec<DVec2>> {
    let bad_row = rows.iter().position(|r| r.as_ref().len() != 2);
    if rows.len() != n || bad_row.is_some() {
        return Err(SuspensionError::MalformedInput {
            expected: n,
            rows: rows.len(),
            bad_row,
        });
    }
    Ok(rows
        .iter()
        .map(|r| {
            let r = r.as_ref();
            DVec2::new(r[0], r[1])
        })
        .collect())
}

impl ParticleSuspension {
    /// Creates `n` particles drawn uniformly from the cell at area fraction
    /// `phi`. The same `seed` always yields the same layout.
    ///
    /// ### Errors
    /// [`SuspensionError::InvalidConfiguration`] if `n == 0` or `phi <= 0`.
    pub fn new(n: usize, phi: f64, seed: Option<u64>) -> SuspensionResult<Self> {
        Self::from_config(SuspensionConfig::new(n, phi, seed))
    }

    /// Builds a suspension from `config`, validating it first.
    ///
    /// ### Errors
    /// [`SuspensionError::InvalidConfiguration`] if [`SuspensionConfig::validate`]
    /// fails.
    pub fn from_config(config: SuspensionConfig) -> SuspensionResult<Self> {
        config.validate()?;
        let domain = PeriodicDomain::new(config.particles, config.area_fraction)?;
        let mut rng = make_rng(config.seed);
        let centers = random_centers(domain.particles(), domain.boxsize(), &mut rng);
        debug!(
            "Placed {} particles in a periodic cell of side {:.4} (phi = {})",
            domain.particles(),
            domain.boxsize(),
            domain.area_fraction()
        );
        Ok(Self {
            config,
            domain,
            centers,
            rng,
        })
    }

    /// Parameters this suspension was built from.
    pub fn config(&self) -> &SuspensionConfig {
        &self.config
    }

    /// The periodic cell.
    pub fn domain(&self) -> &PeriodicDomain {
        &self.domain
    }

    pub fn boxsize(&self) -> f64 {
        self.domain.boxsize()
    }

    /// Current positions, indexed by [`ParticleId`]. Not necessarily inside
    /// the cell after [`Self::set_centers`] or [`Self::repel`].
    pub fn centers(&self) -> &[DVec2] {
        &self.centers
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Replaces every position with `rows`, which must hold exactly `n`
    /// pairs of numbers. Values are taken verbatim with no bounds check.
    ///
    /// A malformed shape is logged and returned as
    /// [`SuspensionError::MalformedInput`]; the positions are left untouched.
    ///
    /// Contact detection folds separations by at most one box length per
    /// axis. Positions lying more than 1.5 box lengths apart should be
    /// passed through [`Self::wrap`] before they are tagged.
    ///
    /// ### Parameters
    /// - `rows` - One `[x, y]` row per particle, in [`ParticleId`] order.
    pub fn set_centers<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> SuspensionResult<()> {
        let centers = match parse_centers(rows, self.domain.particles()) {
            Ok(centers) => centers,
            Err(e) => {
                warn!("Rejected center reassignment: {e}");
                return Err(e);
            }
        };
        let outside = centers.iter().filter(|&&p| !self.domain.contains(p)).count();
        if outside > 0 {
            info!(
                "{outside} of {} new centers lie outside [0, {:.4}); call wrap() to fold them back",
                centers.len(),
                self.domain.boxsize()
            );
        }
        self.centers = centers;
        Ok(())
    }

    /// Re-draws every position, reseeding first when `seed` is given.
    ///
    /// ### Parameters
    /// - `seed` - New seed, or `None` to keep drawing from the current
    ///   generator.
    pub fn reset(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng = make_rng(Some(seed));
        }
        self.centers = random_centers(self.domain.particles(), self.domain.boxsize(), &mut self.rng);
        debug!("Reset {} particles (seed = {seed:?})", self.centers.len());
    }

    /// Folds every coordinate back into `[0, boxsize)`.
    pub fn wrap(&mut self) {
        let outside = self.centers.iter().filter(|&&p| !self.domain.contains(p)).count();
        if outside > 0 {
            info!("Wrapping {outside} particles back into the periodic cell");
        }
        for p in &mut self.centers {
            *p = self.domain.wrap(*p);
        }
    }

    /// All pairs in contact at `swell`, ascending by `i` then `j`.
    ///
    /// Separations use the minimum-image rule of
    /// [`crate::domain::wrap_delta`], which assumes positions within 1.5 box
    /// lengths of each other on each axis. Always true after
    /// construction, `reset`, `wrap` or `train`.
    pub fn tag(&self, swell: f64) -> Vec<TaggedPair> {
        contact::tag(&self.domain, &self.centers, swell)
    }

    /// Ascending indices of particles in at least one contact at `swell`.
    pub fn tagged_particles(&self, swell: f64) -> Vec<ParticleId> {
        contact::tagged_particles(&self.domain, &self.centers, swell)
    }

    /// Fraction of particles in at least one contact at `swell`.
    pub fn frac_tag_at(&self, swell: f64) -> f64 {
        contact::fraction_tagged(&self.domain, &self.centers, swell)
    }

    /// Pushes each pair apart by `step_size` times its overlap at `swell`.
    /// Positions are not wrapped afterwards. See [`relax::repel`].
    ///
    /// ### Parameters
    /// - `pairs` - Pairs to relax, usually the output of [`Self::tag`].
    /// - `swell` - Swelling amplitude that sets the contact threshold.
    /// - `step_size` - Fraction of the overlap removed per call.
    pub fn repel(&mut self, pairs: &[TaggedPair], swell: f64, step_size: f64) {
        relax::repel(&self.domain, &mut self.centers, pairs, swell, step_size);
    }

    /// One training cycle: tag at `swell`, repel the tagged pairs, wrap.
    ///
    /// ### Returns
    /// The number of pairs that were in contact before relaxation.
    pub fn train(&mut self, swell: f64, step_size: f64) -> usize {
        let pairs = self.tag(swell);
        self.repel(&pairs, swell, step_size);
        self.wrap();
        debug!("Training step at swell {swell}: {} tagged pairs", pairs.len());
        pairs.len()
    }

    /// Fraction tagged over `[0, |max_swell|]` after conditioning at
    /// `training_swell`. See [`sweep::frac_tag`].
    pub fn frac_tag(
        &self,
        training_swell: f64,
        max_swell: f64,
        swell_step: f64,
    ) -> SuspensionResult<SwellCurve> {
        sweep::frac_tag(self, training_swell, max_swell, swell_step)
    }

    /// First derivative of [`Self::frac_tag`]. See [`sweep::tag_rate`].
    pub fn tag_rate(
        &self,
        training_swell: f64,
        max_swell: f64,
        swell_step: f64,
    ) -> SuspensionResult<SwellCurve> {
        sweep::tag_rate(self, training_swell, max_swell, swell_step)
    }

    /// Second derivative of [`Self::frac_tag`]. See [`sweep::tag_curvature`].
    pub fn tag_curvature(
        &self,
        training_swell: f64,
        max_swell: f64,
        swell_step: f64,
    ) -> SuspensionResult<SwellCurve> {
        sweep::tag_curvature(self, training_swell, max_swell, swell_step)
    }
}
