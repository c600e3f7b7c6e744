//! Stages of the narrative and the variants that order them.

use serde::{Deserialize, Serialize};

/// One screen of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Intro,
    Scenario,
    Matrix,
    AirplaneGame,
}

impl Stage {
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Intro => "Switzerland in World War II",
            Stage::Scenario => "Switzerland's Dilemma",
            Stage::Matrix => "Payoff Matrix",
            Stage::AirplaneGame => "Defend Swiss Airspace",
        }
    }
}

/// Which edition of the slideshow is running.
///
/// `Classic` asks the scenario question with four fixed answers and ends at
/// the matrix. `Full` replaces the answers with policy toggles and adds the
/// airspace minigame as a fourth stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Variant {
    Classic,
    #[default]
    Full,
}

const CLASSIC_STAGES: [Stage; 3] = [Stage::Intro, Stage::Scenario, Stage::Matrix];
const FULL_STAGES: [Stage; 4] = [
    Stage::Intro,
    Stage::Scenario,
    Stage::Matrix,
    Stage::AirplaneGame,
];

impl Variant {
    /// Stages in presentation order.
    pub fn stages(&self) -> &'static [Stage] {
        match self {
            Variant::Classic => &CLASSIC_STAGES,
            Variant::Full => &FULL_STAGES,
        }
    }

    pub fn contains(&self, stage: Stage) -> bool {
        self.stages().contains(&stage)
    }

    /// Position of `stage` in this variant's ordering.
    pub fn index_of(&self, stage: Stage) -> Option<usize> {
        self.stages().iter().position(|s| *s == stage)
    }

    /// Stage after `stage`, if any.
    pub fn next(&self, stage: Stage) -> Option<Stage> {
        let i = self.index_of(stage)?;
        self.stages().get(i + 1).copied()
    }

    /// Stage before `stage`, if any.
    pub fn previous(&self, stage: Stage) -> Option<Stage> {
        let i = self.index_of(stage)?;
        i.checked_sub(1).and_then(|p| self.stages().get(p).copied())
    }

    /// Whether the scenario offers policy toggles (true) or direct answers (false).
    pub fn uses_decision_toggles(&self) -> bool {
        matches!(self, Variant::Full)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_has_no_minigame() {
        assert_eq!(Variant::Classic.stages().len(), 3);
        assert!(!Variant::Classic.contains(Stage::AirplaneGame));
        assert!(Variant::Full.contains(Stage::AirplaneGame));
    }

    #[test]
    fn next_and_previous_walk_the_order() {
        let v = Variant::Full;
        assert_eq!(v.next(Stage::Intro), Some(Stage::Scenario));
        assert_eq!(v.next(Stage::Matrix), Some(Stage::AirplaneGame));
        assert_eq!(v.next(Stage::AirplaneGame), None);
        assert_eq!(v.previous(Stage::Intro), None);
        assert_eq!(v.previous(Stage::Scenario), Some(Stage::Intro));
        assert_eq!(Variant::Classic.next(Stage::Matrix), None);
    }

    #[test]
    fn stage_outside_variant_has_no_neighbours() {
        assert_eq!(Variant::Classic.index_of(Stage::AirplaneGame), None);
        assert_eq!(Variant::Classic.next(Stage::AirplaneGame), None);
        assert_eq!(Variant::Classic.previous(Stage::AirplaneGame), None);
    }
}
