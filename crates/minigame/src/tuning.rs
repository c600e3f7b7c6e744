//! Tunable constants of the minigame. Defaults reproduce the classic feel.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinigameTuning {
    /// Minimum wall-clock gap between spawns.
    #[serde(default = "default_spawn_interval_ms")]
    pub spawn_interval_ms: f64,
    /// No spawn happens while this many targets are live.
    #[serde(default = "default_max_live_targets")]
    pub max_live_targets: usize,
    /// Lower bound of the fall speed, units/ms (inclusive).
    #[serde(default = "default_min_speed")]
    pub min_speed: f32,
    /// Upper bound of the fall speed, units/ms (exclusive).
    #[serde(default = "default_max_speed")]
    pub max_speed: f32,
    /// Half-extent of the square hit box around a target's centre.
    #[serde(default = "default_hit_radius")]
    pub hit_radius: f32,
    #[serde(default = "default_playfield_width")]
    pub playfield_width: f32,
    /// Targets at or below this line escape.
    #[serde(default = "default_playfield_height")]
    pub playfield_height: f32,
    /// Total hits that end the session.
    #[serde(default = "default_hits_to_finish")]
    pub hits_to_finish: u32,
}

fn default_spawn_interval_ms() -> f64 {
    1000.0
}
fn default_max_live_targets() -> usize {
    5
}
fn default_min_speed() -> f32 {
    0.016
}
fn default_max_speed() -> f32 {
    0.056
}
fn default_hit_radius() -> f32 {
    5.0
}
fn default_playfield_width() -> f32 {
    100.0
}
fn default_playfield_height() -> f32 {
    70.0
}
fn default_hits_to_finish() -> u32 {
    10
}

impl Default for MinigameTuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: default_spawn_interval_ms(),
            max_live_targets: default_max_live_targets(),
            min_speed: default_min_speed(),
            max_speed: default_max_speed(),
            hit_radius: default_hit_radius(),
            playfield_width: default_playfield_width(),
            playfield_height: default_playfield_height(),
            hits_to_finish: default_hits_to_finish(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("spawn interval must be positive, got {0} ms")]
    SpawnInterval(f64),
    #[error("at least one live target must be allowed")]
    NoLiveTargets,
    #[error("speed range {min}..{max} is empty or negative")]
    SpeedRange { min: f32, max: f32 },
    #[error("hit radius must be positive, got {0}")]
    HitRadius(f32),
    #[error("playfield must have positive size, got {width}x{height}")]
    Playfield { width: f32, height: f32 },
    #[error("hits to finish must be at least 1")]
    NoHitsToFinish,
}

impl MinigameTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.spawn_interval_ms > 0.0) {
            return Err(TuningError::SpawnInterval(self.spawn_interval_ms));
        }
        if self.max_live_targets == 0 {
            return Err(TuningError::NoLiveTargets);
        }
        if !(self.min_speed >= 0.0 && self.max_speed > self.min_speed) {
            return Err(TuningError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.hit_radius > 0.0) {
            return Err(TuningError::HitRadius(self.hit_radius));
        }
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err(TuningError::Playfield {
                width: self.playfield_width,
                height: self.playfield_height,
            });
        }
        if self.hits_to_finish == 0 {
            return Err(TuningError::NoHitsToFinish);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let t = MinigameTuning::default();
        assert_eq!(t.validate(), Ok(()));
        assert_eq!(t.max_live_targets, 5);
        assert_eq!(t.hits_to_finish, 10);
    }

    #[test]
    fn inverted_speed_range_rejected() {
        let t = MinigameTuning {
            min_speed: 0.05,
            max_speed: 0.01,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::SpeedRange { .. })));
    }

    #[test]
    fn zero_values_rejected() {
        let t = MinigameTuning { spawn_interval_ms: 0.0, ..Default::default() };
        assert_eq!(t.validate(), Err(TuningError::SpawnInterval(0.0)));
        let t = MinigameTuning { max_live_targets: 0, ..Default::default() };
        assert_eq!(t.validate(), Err(TuningError::NoLiveTargets));
        let t = MinigameTuning { hits_to_finish: 0, ..Default::default() };
        assert_eq!(t.validate(), Err(TuningError::NoHitsToFinish));
        let t = MinigameTuning { playfield_height: -1.0, ..Default::default() };
        assert!(matches!(t.validate(), Err(TuningError::Playfield { .. })));
    }

    #[test]
    fn nan_is_rejected() {
        let t = MinigameTuning { hit_radius: f32::NAN, ..Default::default() };
        assert!(matches!(t.validate(), Err(TuningError::HitRadius(_))));
    }
}
