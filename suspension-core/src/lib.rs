//! Core engine for a 2-D periodic suspension of unit-diameter particles
//! under a cyclic swelling ("training") protocol.
//!
//! Main components:
//! - [`domain`]: periodic square cell and minimum-image geometry.
//! - [`suspension`]: particle positions and the public facade.
//! - [`contact`]: contact detection at a given swelling amplitude.
//! - [`relax`]: the repulsive relaxation step.
//! - [`sweep`]: fraction-tagged curves and their finite differences.
//! - [`config`]: construction parameters.
//! - [`error`]: error taxonomy.
//! - [`types`]: shared type aliases and IDs.

pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod relax;
pub mod suspension;
pub mod sweep;
pub mod types;

pub use config::SuspensionConfig;
pub use error::{SuspensionError, SuspensionResult};
pub use suspension::ParticleSuspension;
pub use sweep::SwellCurve;
pub use types::{ParticleId, TaggedPair};
