/// Identifier for a particle in a [`crate::suspension::ParticleSuspension`].
///
/// This is an index into the position array and names the same particle
/// for the whole lifetime of the suspension.
pub type ParticleId = usize;

/// Two particles in contact at some swelling amplitude, with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaggedPair {
    pub i: ParticleId,
    pub j: ParticleId,
}

impl TaggedPair {
    /// Builds a pair with its indices in ascending order.
    pub fn new(a: ParticleId, b: ParticleId) -> Self {
        if a <= b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        }
    }
}

impl From<(ParticleId, ParticleId)> for TaggedPair {
    fn from((a, b): (ParticleId, ParticleId)) -> Self {
        Self::new(a, b)
    }
}

impl From<[ParticleId; 2]> for TaggedPair {
    fn from([a, b]: [ParticleId; 2]) -> Self {
        Self::new(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_orders_indices() {
        assert_eq!(TaggedPair::new(3, 1), TaggedPair { i: 1, j: 3 });
        assert_eq!(TaggedPair::from([0, 1]), TaggedPair { i: 0, j: 1 });
        assert_eq!(TaggedPair::from((5, 2)), TaggedPair { i: 2, j: 5 });
    }
}
