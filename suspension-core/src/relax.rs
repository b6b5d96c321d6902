//! Quasi-static repulsive relaxation.
//!
//! Each tagged pair is pushed apart along its minimum-image direction by
//! `step_size * overlap`, split evenly between the two particles, where
//! `overlap = swell * CONTACT_DIAMETER - distance`. Displacements are all
//! computed from the positions at call time and then summed per particle.

use glam::DVec2;
use log::{debug, warn};

use crate::{contact::CONTACT_DIAMETER, domain::PeriodicDomain, types::TaggedPair};

/// Accumulated displacement per particle for one relaxation call.
#[derive(Debug)]
struct DisplacementBuffer {
    shift: Vec<DVec2>,
}

impl DisplacementBuffer {
    fn with_len(len: usize) -> Self {
        Self {
            shift: vec![DVec2::ZERO; len],
        }
    }

    #[inline]
    fn add(&mut self, id: usize, delta: DVec2) {
        self.shift[id] += delta;
    }

    fn apply_to(&self, centers: &mut [DVec2]) {
        for (p, &d) in centers.iter_mut().zip(&self.shift) {
            *p += d;
        }
    }
}

/// Moves the particles of every pair in `pairs` apart.
///
/// Particle `i` moves by `-step_size * overlap * u / 2` and particle `j`
/// by the opposite amount, with `u` the unit minimum-image direction from
/// `i` to `j`. The pair midpoint is preserved. A non-positive overlap is
/// applied as is, which pulls the pair together.
///
/// Pairs at zero separation have no direction and contribute nothing.
/// Pairs naming a particle outside `centers` are skipped. Positions are
/// not wrapped.
pub fn repel(
    domain: &PeriodicDomain,
    centers: &mut [DVec2],
    pairs: &[TaggedPair],
    swell: f64,
    step_size: f64,
) {
    let n = centers.len();
    let threshold = swell * CONTACT_DIAMETER;
    let mut buf = DisplacementBuffer::with_len(n);

    for &TaggedPair { i, j } in pairs {
        if i >= n || j >= n || i == j {
            warn!("Skipping invalid pair ({i}, {j}) for {n} particles");
            continue;
        }
        let d = domain.minimum_image(centers[i], centers[j]);
        let dist = d.length();
        if dist == 0.0 {
            debug!("Pair ({i}, {j}) has zero separation; no displacement applied");
            continue;
        }
        let overlap = threshold - dist;
        let half = 0.5 * step_size * overlap * (d / dist);
        buf.add(i, -half);
        buf.add(j, half);
    }

    buf.apply_to(centers);
}
