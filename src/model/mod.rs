//! Data model for the scoring and ranking engine.
//!
//! [`DeviceRecord`] is the engine's only input entity: identity, optional
//! commercial data, and loosely typed specification/feature lists. Everything
//! derived from it ([`CategoryScores`], [`DeviceScore`]) is created fresh per
//! ranking run and never persisted by this crate.

mod device;
mod score;

pub use device::*;
pub use score::*;
