//! Attack-cast driver for grass cutting.
//!
//! Listens for ability casts, filters for the attacks that cut, gates them
//! behind a cooldown, projects the cast point into grid-local space and
//! forwards it to the field. Particle playback goes through an injected
//! sink rather than a global.

use crate::core::types::{Vec2, Vec3};
use crate::grass::field::{CutOutcome, GrassField};

/// Identifier for a combat ability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct AbilityId(pub u32);

/// An ability cast delivered by the input/ability system when an attack
/// animation starts.
#[derive(Clone, Copy, Debug)]
pub struct AttackCast {
    pub ability: AbilityId,
    /// Caster position in world space.
    pub origin: Vec3,
    /// Caster facing direction in world space.
    pub forward: Vec3,
}

/// Receives one-shot particle bursts at world positions.
pub trait ParticleSink {
    fn play_at(&mut self, position: Vec3);
}

/// Countdown gate between accepted casts.
///
/// The surrounding game keeps at most one attack active at a time through
/// this gate; the field's cut path relies on that serialization.
#[derive(Clone, Copy, Debug)]
pub struct CooldownGate {
    duration: f32,
    remaining: f32,
}

impl CooldownGate {
    pub fn new(duration: f32) -> Self {
        Self { duration, remaining: 0.0 }
    }

    /// Whether the gate would accept a cast right now.
    pub fn ready(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Consume the gate if ready.
    pub fn try_start(&mut self) -> bool {
        if !self.ready() {
            return false;
        }
        self.remaining = self.duration;
        true
    }

    /// Advance time by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining > 0.0 {
            self.remaining = (self.remaining - dt).max(0.0);
        }
    }
}

/// Seconds between accepted cuts.
const CUT_COOLDOWN_SECS: f32 = 0.5;

/// Connects attack casts to a grass field.
pub struct GrassCutter {
    field: GrassField,
    /// Terrain origin in world space; grid cell (0, 0) sits here.
    terrain_origin: Vec3,
    /// Abilities whose casts cut grass (light and heavy attack).
    cut_abilities: Vec<AbilityId>,
    cooldown: CooldownGate,
}

impl GrassCutter {
    pub fn new(field: GrassField, terrain_origin: Vec3, cut_abilities: Vec<AbilityId>) -> Self {
        Self {
            field,
            terrain_origin,
            cut_abilities,
            cooldown: CooldownGate::new(CUT_COOLDOWN_SECS),
        }
    }

    pub fn field(&self) -> &GrassField {
        &self.field
    }

    /// Take the field back out of the cutter.
    pub fn into_field(self) -> GrassField {
        self.field
    }

    pub fn cooldown(&self) -> &CooldownGate {
        &self.cooldown
    }

    /// Advance the cooldown. Call once per frame tick.
    pub fn tick(&mut self, dt: f32) {
        self.cooldown.tick(dt);
    }

    /// Project a world-space point onto the grid's local XZ plane.
    fn to_local(&self, world: Vec3) -> Vec2 {
        Vec2::new(world.x - self.terrain_origin.x, world.z - self.terrain_origin.z)
    }

    /// Reproject a grid-local point back into world space at the terrain base.
    fn to_world(&self, local: Vec2) -> Vec3 {
        self.terrain_origin + Vec3::new(local.x, 0.0, local.y)
    }

    /// Handle one attack cast.
    ///
    /// Ignores abilities that do not cut and casts arriving during the
    /// cooldown. The cooldown is spent even when the cast then lands outside
    /// the field's accepted margin. Returns the cut outcome when the field
    /// was actually asked to cut.
    pub fn handle_cast(
        &mut self,
        cast: &AttackCast,
        particles: &mut dyn ParticleSink,
    ) -> Option<CutOutcome> {
        if !self.cut_abilities.contains(&cast.ability) {
            return None;
        }
        if !self.cooldown.try_start() {
            return None;
        }

        let forward = Vec2::new(cast.forward.x, cast.forward.z);
        let forward_offset = self.field.config().forward_offset;
        let center = self.to_local(cast.origin) + forward * forward_offset;
        if !self.field.in_cut_range(center) {
            return None;
        }

        let radius = self.field.config().cut_radius;
        let outcome = self.field.cut(center, radius);
        if outcome.spawn_particles {
            particles.play_at(self.to_world(center));
        }
        Some(outcome)
    }
}
