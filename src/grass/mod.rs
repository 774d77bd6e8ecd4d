//! Cuttable terrain grass.
//!
//! A `GrassField` holds the authoritative per-cell occupancy grid built from
//! terrain detail density and a renderable mask kept in sync at commit
//! points. `GrassCutter` drives it from attack-cast events: ability filter,
//! cooldown gate, world-to-grid projection, and particle-burst notification.

pub mod config;
pub mod grid;
pub mod mask;
pub mod field;
pub mod cutter;

pub use config::GrassFieldConfig;
pub use grid::OccupancyGrid;
pub use mask::{MaskPixel, RenderMask};
pub use field::{CutOutcome, GrassField};
pub use cutter::{AbilityId, AttackCast, CooldownGate, GrassCutter, ParticleSink};
