//! The minigame session: start, per-frame advance, and shot resolution.

use engine_core::{integrate_motion, Millis, Position, Velocity};
use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Faction, TargetId, TargetView};
use crate::score::Score;
use crate::spawner::TargetSpawner;
use crate::tuning::MinigameTuning;

/// Lifecycle of one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// A successful shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: TargetId,
    pub faction: Faction,
    pub position: Vec2,
    /// This hit reached the finishing total.
    pub finished: bool,
}

/// Owns every live target and the score for one session.
pub struct AirplaneGame {
    world: World,
    spawner: TargetSpawner,
    score: Score,
    state: SessionState,
    /// Timestamp of the previous frame; `None` until the first frame after start.
    last_frame: Option<Millis>,
    tuning: MinigameTuning,
}

impl AirplaneGame {
    pub fn new(tuning: MinigameTuning) -> Self {
        let spawner = TargetSpawner::new(&tuning);
        Self::with_spawner(tuning, spawner)
    }

    /// Deterministic game for tests.
    pub fn with_seed(tuning: MinigameTuning, seed: u64) -> Self {
        let spawner = TargetSpawner::with_seed(&tuning, seed);
        Self::with_spawner(tuning, spawner)
    }

    fn with_spawner(tuning: MinigameTuning, spawner: TargetSpawner) -> Self {
        Self {
            world: World::new(),
            spawner,
            score: Score::default(),
            state: SessionState::NotStarted,
            last_frame: None,
            tuning,
        }
    }

    /// Begin a fresh round. Calling it mid-round restarts.
    pub fn start(&mut self) {
        self.world.clear();
        self.spawner.reset();
        self.score = Score::default();
        self.last_frame = None;
        self.state = SessionState::Running;
        log::info!("Airspace game started");
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn tuning(&self) -> &MinigameTuning {
        &self.tuning
    }

    pub fn live_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Live targets in spawn order.
    pub fn targets(&self) -> Vec<TargetView> {
        let mut views: Vec<TargetView> = self
            .world
            .query::<(&TargetId, &Position, &Velocity, &Faction)>()
            .iter()
            .map(|(_, (id, pos, vel, faction))| TargetView {
                id: *id,
                position: pos.0,
                faction: *faction,
                speed: vel.linear.y,
            })
            .collect();
        views.sort_by_key(|v| v.id);
        views
    }

    /// One display frame. Moves every target by its speed times the time since
    /// the previous frame, drops the ones past the bottom edge, then lets the
    /// spawner add at most one new target at the top. The first frame after
    /// `start` only sets the timing anchors.
    pub fn advance(&mut self, now: Millis) {
        if self.state != SessionState::Running {
            return;
        }

        let delta = match self.last_frame {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };

        integrate_motion(&mut self.world, delta as f32);
        self.despawn_escaped();

        let live = self.live_count();
        self.spawner.update(&mut self.world, now, live);

        self.last_frame = Some(now);
    }

    fn despawn_escaped(&mut self) {
        let floor = self.tuning.playfield_height;
        let escaped: Vec<(Entity, TargetId)> = self
            .world
            .query::<(&TargetId, &Position)>()
            .iter()
            .filter(|(_, (_, pos))| pos.0.y >= floor)
            .map(|(entity, (id, _))| (entity, *id))
            .collect();
        for (entity, id) in escaped {
            log::debug!("{:?} escaped", id);
            self.world.despawn(entity).ok();
        }
    }

    /// Shoot at `point` (playfield units). A target is hit when the point lies
    /// strictly inside the square of half-extent `hit_radius` around its
    /// centre; if several qualify, the earliest spawned wins.
    pub fn resolve_shot(&mut self, point: Vec2) -> Option<Hit> {
        if self.state != SessionState::Running {
            return None;
        }

        let radius = self.tuning.hit_radius;
        let (entity, id, position, faction) = self
            .world
            .query::<(&TargetId, &Position, &Faction)>()
            .iter()
            .filter(|(_, (_, pos, _))| {
                let d = (pos.0 - point).abs();
                d.x < radius && d.y < radius
            })
            .map(|(entity, (id, pos, faction))| (entity, *id, pos.0, *faction))
            .min_by_key(|(_, id, _, _)| *id)?;

        self.world.despawn(entity).ok();
        self.score.record(faction);
        log::debug!("Hit {:?} ({})", id, faction.name());

        let finished = self.score.total() >= self.tuning.hits_to_finish;
        if finished {
            self.state = SessionState::Over;
            log::info!(
                "Airspace game over: Allied {} / Axis {}",
                self.score.allied,
                self.score.axis
            );
        }

        Some(Hit {
            id,
            faction,
            position,
            finished,
        })
    }

    #[cfg(test)]
    fn place(&mut self, x: f32, y: f32, faction: Faction, speed: f32) -> TargetId {
        self.spawner
            .spawn_at(&mut self.world, Vec2::new(x, y), faction, speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> AirplaneGame {
        AirplaneGame::with_seed(MinigameTuning::default(), 42)
    }

    fn running() -> AirplaneGame {
        let mut g = game();
        g.start();
        g
    }

    #[test]
    fn start_resets_everything() {
        let mut g = running();
        g.place(50.0, 10.0, Faction::Axis, 0.02);
        g.resolve_shot(Vec2::new(50.0, 10.0));
        g.place(20.0, 20.0, Faction::Allied, 0.02);

        g.start();
        assert_eq!(g.score(), Score { allied: 0, axis: 0 });
        assert_eq!(g.live_count(), 0);
        assert_eq!(g.state(), SessionState::Running);
    }

    #[test]
    fn first_frame_neither_moves_nor_spawns() {
        let mut g = running();
        let id = g.place(30.0, 10.0, Faction::Allied, 0.05);
        g.advance(123_456.0);
        let t = g.targets();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].id, id);
        assert_eq!(t[0].position, Vec2::new(30.0, 10.0));
    }

    #[test]
    fn spawns_one_target_after_interval() {
        let mut g = running();
        let t0 = 10_000.0;
        g.advance(t0);
        g.advance(t0 + 1001.0);
        let t = g.targets();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].position.y, 0.0);
        assert!((0.0..=100.0).contains(&t[0].position.x));
        assert!(t[0].speed >= 0.016 && t[0].speed < 0.056);
    }

    #[test]
    fn no_spawn_at_cap() {
        let mut g = running();
        for i in 0..5 {
            g.place(10.0 * i as f32, 0.0, Faction::Axis, 0.0001);
        }
        g.advance(0.0);
        g.advance(1_500.0);
        assert_eq!(g.live_count(), 5);
    }

    #[test]
    fn targets_move_by_speed_times_delta() {
        let mut g = running();
        g.place(40.0, 0.0, Faction::Allied, 0.02);
        g.advance(0.0);
        g.advance(500.0);
        let t = g.targets();
        assert!((t[0].position.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn target_crossing_floor_is_removed() {
        let mut g = running();
        let id = g.place(40.0, 69.0, Faction::Allied, 0.02);
        g.advance(0.0);
        g.advance(100.0); // 69 + 2 = 71
        assert!(g.targets().iter().all(|t| t.id != id));
        assert_eq!(g.score().total(), 0);
    }

    #[test]
    fn target_landing_exactly_on_floor_is_removed() {
        let mut g = running();
        let id = g.place(40.0, 68.0, Faction::Axis, 0.5);
        g.advance(0.0);
        g.advance(4.0); // exactly 70
        assert!(g.targets().iter().all(|t| t.id != id));
    }

    #[test]
    fn long_frame_despawns_and_spawns() {
        let mut g = running();
        g.advance(0.0);
        g.advance(1_000.0);
        let first = g.targets()[0].id;
        // Slowest target covers 70 units in under 4.4 s.
        g.advance(10_000.0);
        let t = g.targets();
        assert!(t.iter().all(|v| v.id != first));
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].position.y, 0.0);
    }

    #[test]
    fn miss_mutates_nothing() {
        let mut g = running();
        g.place(50.0, 30.0, Faction::Axis, 0.02);
        let before = g.targets();
        assert_eq!(g.resolve_shot(Vec2::new(56.0, 30.0)), None);
        assert_eq!(g.resolve_shot(Vec2::new(50.0, 24.0)), None);
        assert_eq!(g.resolve_shot(Vec2::new(50.0, 35.0)), None);
        assert_eq!(g.targets(), before);
        assert_eq!(g.score().total(), 0);
    }

    #[test]
    fn hit_removes_target_and_scores_faction() {
        let mut g = running();
        let id = g.place(50.0, 30.0, Faction::Axis, 0.02);
        let hit = g.resolve_shot(Vec2::new(53.0, 26.5)).expect("hit");
        assert_eq!(hit.id, id);
        assert_eq!(hit.faction, Faction::Axis);
        assert!(!hit.finished);
        assert_eq!(g.live_count(), 0);
        assert_eq!(g.score(), Score { allied: 0, axis: 1 });
    }

    #[test]
    fn overlapping_targets_earliest_wins() {
        let mut g = running();
        let first = g.place(50.0, 30.0, Faction::Allied, 0.02);
        let second = g.place(51.0, 30.0, Faction::Axis, 0.02);
        let hit = g.resolve_shot(Vec2::new(51.0, 30.0)).expect("hit");
        assert_eq!(hit.id, first);
        assert_eq!(g.targets()[0].id, second);
    }

    #[test]
    fn ten_hits_end_the_round() {
        let mut g = running();
        for i in 0..10 {
            let faction = if i % 2 == 0 { Faction::Allied } else { Faction::Axis };
            g.place(50.0, 30.0, faction, 0.02);
            let hit = g.resolve_shot(Vec2::new(50.0, 30.0)).expect("hit");
            assert_eq!(hit.finished, i == 9);
        }
        assert_eq!(g.state(), SessionState::Over);
        assert_eq!(g.score(), Score { allied: 5, axis: 5 });

        // Frozen from here on.
        g.place(50.0, 30.0, Faction::Axis, 0.02);
        let before = g.targets();
        g.advance(0.0);
        g.advance(5_000.0);
        assert_eq!(g.targets(), before);
        assert_eq!(g.resolve_shot(Vec2::new(50.0, 30.0)), None);
        assert_eq!(g.score().total(), 10);
    }

    #[test]
    fn input_ignored_before_start() {
        let mut g = game();
        assert_eq!(g.state(), SessionState::NotStarted);
        g.place(50.0, 30.0, Faction::Axis, 0.02);
        g.advance(0.0);
        g.advance(2_000.0);
        assert_eq!(g.live_count(), 1);
        assert_eq!(g.resolve_shot(Vec2::new(50.0, 30.0)), None);
    }

    #[test]
    fn restart_after_game_over() {
        let mut g = running();
        for _ in 0..10 {
            g.place(50.0, 30.0, Faction::Axis, 0.02);
            g.resolve_shot(Vec2::new(50.0, 30.0));
        }
        assert_eq!(g.state(), SessionState::Over);
        g.start();
        assert_eq!(g.state(), SessionState::Running);
        assert_eq!(g.score().total(), 0);
    }
}
