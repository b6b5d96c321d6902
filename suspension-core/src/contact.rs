//! Contact detection under periodic boundary conditions.
//!
//! Two particles are in contact at swelling amplitude `swell` when their
//! minimum-image distance is strictly below `swell * CONTACT_DIAMETER`.

use glam::DVec2;

use crate::{
    domain::PeriodicDomain,
    types::{ParticleId, TaggedPair},
};

/// Diameter of an unswollen particle.
pub const CONTACT_DIAMETER: f64 = 1.0;

/// Returns every pair `(i, j)`, `i < j`, in contact at `swell`.
///
/// Pairs come out ascending by `i`, then by `j`. A distance exactly equal
/// to the threshold is not a contact.
pub fn tag(domain: &PeriodicDomain, centers: &[DVec2], swell: f64) -> Vec<TaggedPair> {
    let threshold = swell * CONTACT_DIAMETER;
    let mut pairs = Vec::new();
    for (i, &p) in centers.iter().enumerate() {
        for (j, &q) in centers.iter().enumerate().skip(i + 1) {
            if domain.distance(p, q) < threshold {
                pairs.push(TaggedPair { i, j });
            }
        }
    }
    pairs
}

/// Ascending, de-duplicated indices of particles appearing in any pair
/// returned by [`tag`].
pub fn tagged_particles(domain: &PeriodicDomain, centers: &[DVec2], swell: f64) -> Vec<ParticleId> {
    let mut seen = vec![false; centers.len()];
    for pair in tag(domain, centers, swell) {
        seen[pair.i] = true;
        seen[pair.j] = true;
    }
    seen.iter()
        .enumerate()
        .filter_map(|(id, &hit)| if hit { Some(id) } else { None })
        .collect()
}

/// Fraction of particles in at least one contact, in `[0, 1]`.
pub fn fraction_tagged(domain: &PeriodicDomain, centers: &[DVec2], swell: f64) -> f64 {
    if centers.is_empty() {
        return 0.0;
    }
    tagged_particles(domain, centers, swell).len() as f64 / centers.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(points: &[[f64; 2]]) -> Vec<DVec2> {
        points.iter().map(|&[x, y]| DVec2::new(x, y)).collect()
    }

    #[test]
    fn tags_direct_contact() {
        let dom = PeriodicDomain::new(2, 0.2).unwrap();
        let centers = pts(&[[1.0, 1.0], [1.0, 1.5]]);
        assert_eq!(tag(&dom, &centers, 1.0), vec![TaggedPair { i: 0, j: 1 }]);
    }

    #[test]
    fn tags_contact_across_the_boundary() {
        let dom = PeriodicDomain::new(2, 0.2).unwrap();
        let centers = pts(&[[0.0, 0.0], [0.0, 2.0]]);
        assert_eq!(tag(&dom, &centers, 1.0), vec![TaggedPair { i: 0, j: 1 }]);
    }

    #[test]
    fn distance_equal_to_threshold_is_not_a_contact() {
        let dom = PeriodicDomain::new(2, 0.1).unwrap();
        let centers = pts(&[[1.0, 1.0], [1.0, 1.5]]);
        assert!(tag(&dom, &centers, 0.5).is_empty());
        assert_eq!(tag(&dom, &centers, 0.5000001).len(), 1);
    }

    #[test]
    fn pairs_are_ordered_by_i_then_j() {
        let dom = PeriodicDomain::new(4, 0.05).unwrap();
        let centers = pts(&[[1.0, 1.0], [1.2, 1.0], [5.0, 5.0], [1.0, 1.3]]);
        let pairs = tag(&dom, &centers, 1.0);
        assert_eq!(
            pairs,
            vec![
                TaggedPair { i: 0, j: 1 },
                TaggedPair { i: 0, j: 3 },
                TaggedPair { i: 1, j: 3 },
            ]
        );
    }

    #[test]
    fn zero_swell_tags_nothing_even_for_coincident_particles() {
        let dom = PeriodicDomain::new(2, 0.2).unwrap();
        let centers = pts(&[[1.0, 1.0], [1.0, 1.0]]);
        assert!(tag(&dom, &centers, 0.0).is_empty());
    }

    #[test]
    fn fraction_tagged_counts_unique_particles() {
        let dom = PeriodicDomain::new(2, 0.2).unwrap();
        let centers = pts(&[[0.0, 1.0], [0.0, 1.25]]);
        assert_eq!(fraction_tagged(&dom, &centers, 1.0), 1.0);
        assert_eq!(fraction_tagged(&dom, &centers, 0.24), 0.0);
    }

    #[test]
    fn tagged_particles_are_unique_and_sorted() {
        let dom = PeriodicDomain::new(3, 0.2).unwrap();
        let centers = pts(&[[0.0, 1.0], [0.0, 1.25], [0.0, 0.25]]);
        assert_eq!(tagged_particles(&dom, &centers, 0.5), vec![0, 1]);
        assert_eq!(tagged_particles(&dom, &centers, 0.8), vec![0, 1, 2]);
    }
}
