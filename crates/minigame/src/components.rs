//! Components attached to target entities.

use glam::Vec2;

/// Side a target flies for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faction {
    Allied,
    Axis,
}

impl Faction {
    pub fn name(&self) -> &'static str {
        match self {
            Faction::Allied => "Allied",
            Faction::Axis => "Axis",
        }
    }

    /// Short marker drawn next to the sprite.
    pub fn tag(&self) -> &'static str {
        match self {
            Faction::Allied => "US",
            Faction::Axis => "DE",
        }
    }

    pub fn color(&self) -> [f32; 4] {
        match self {
            Faction::Allied => [0.1, 0.2, 0.9, 1.0], // blue
            Faction::Axis => [0.85, 0.1, 0.1, 1.0],  // red
        }
    }
}

/// Monotonic per-game identity. Lower ids were spawned earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(pub u64);

/// Read-only snapshot of one live target, for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub id: TargetId,
    pub position: Vec2,
    pub faction: Faction,
    /// Units per millisecond.
    pub speed: f32,
}
