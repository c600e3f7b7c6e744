//! Per-faction hit counter.

use crate::components::Faction;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub allied: u32,
    pub axis: u32,
}

impl Score {
    pub fn record(&mut self, faction: Faction) {
        match faction {
            Faction::Allied => self.allied += 1,
            Faction::Axis => self.axis += 1,
        }
    }

    pub fn get(&self, faction: Faction) -> u32 {
        match faction {
            Faction::Allied => self.allied,
            Faction::Axis => self.axis,
        }
    }

    pub fn total(&self) -> u32 {
        self.allied + self.axis
    }
}
