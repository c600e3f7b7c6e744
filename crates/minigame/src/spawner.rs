//! Fixed-cadence target spawning.
//!
//! One target per spawn interval at most, never more than the live cap.
//! Horizontal position, faction and fall speed are rolled once at spawn.

use engine_core::{Millis, Position, Velocity};
use glam::Vec2;
use hecs::World;
use rand::prelude::*;

use crate::components::{Faction, TargetId};
use crate::tuning::MinigameTuning;

/// Creates targets on a timer.
pub struct TargetSpawner {
    /// Minimum gap between spawns.
    pub spawn_interval_ms: Millis,
    /// Live-target cap.
    pub max_live: usize,
    /// Fall speed range, units/ms.
    min_speed: f32,
    max_speed: f32,
    /// Targets spawn anywhere across this width.
    playfield_width: f32,
    /// Timestamp of the last spawn slot; `None` until the first frame anchors it.
    last_spawn: Option<Millis>,
    /// Next identity to hand out.
    next_id: u64,
    rng: StdRng,
}

impl TargetSpawner {
    pub fn new(tuning: &MinigameTuning) -> Self {
        Self::with_rng(tuning, StdRng::from_entropy())
    }

    /// Deterministic spawner for tests and replays.
    pub fn with_seed(tuning: &MinigameTuning, seed: u64) -> Self {
        Self::with_rng(tuning, StdRng::seed_from_u64(seed))
    }

    fn with_rng(tuning: &MinigameTuning, rng: StdRng) -> Self {
        Self {
            spawn_interval_ms: tuning.spawn_interval_ms,
            max_live: tuning.max_live_targets,
            min_speed: tuning.min_speed,
            max_speed: tuning.max_speed,
            playfield_width: tuning.playfield_width,
            last_spawn: None,
            next_id: 0,
            rng,
        }
    }

    /// Forget the timing anchor and restart identities.
    pub fn reset(&mut self) {
        self.last_spawn = None;
        self.next_id = 0;
    }

    pub fn last_spawn(&self) -> Option<Millis> {
        self.last_spawn
    }

    /// Called once per frame. The first call only anchors the cadence. Once a
    /// full interval has passed the slot is consumed even when the cap
    /// blocks the spawn, so a freed slot waits for the next interval.
    pub fn update(&mut self, world: &mut World, now: Millis, live: usize) -> Option<TargetId> {
        let Some(last) = self.last_spawn else {
            self.last_spawn = Some(now);
            return None;
        };
        if now - last < self.spawn_interval_ms {
            return None;
        }
        self.last_spawn = Some(now);
        if live >= self.max_live {
            return None;
        }

        let x = self.rng.gen_range(0.0..=self.playfield_width);
        let faction = self.random_faction();
        let speed = self.random_speed();
        let id = self.spawn_at(world, Vec2::new(x, 0.0), faction, speed);
        log::debug!("Spawned {:?} {} at x={:.1} speed={:.3}", id, faction.name(), x, speed);
        Some(id)
    }

    /// Even odds between the two factions.
    pub fn random_faction(&mut self) -> Faction {
        if self.rng.gen_bool(0.5) {
            Faction::Allied
        } else {
            Faction::Axis
        }
    }

    /// Speed drawn uniformly from the tuned range.
    pub fn random_speed(&mut self) -> f32 {
        self.rng.gen_range(self.min_speed..self.max_speed)
    }

    /// Insert a target with a fresh identity.
    pub fn spawn_at(&mut self, world: &mut World, position: Vec2, faction: Faction, speed: f32) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        world.spawn((id, Position(position), Velocity::falling(speed), faction));
        id
    }
}
