//! Game-theory payoffs for Germany and Switzerland.

/// Row of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
    Germany,
    Switzerland,
}

/// Column of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    DontInvade,
    Invade,
}

impl Actor {
    pub const ALL: [Actor; 2] = [Actor::Germany, Actor::Switzerland];

    pub fn label(&self) -> &'static str {
        match self {
            Actor::Germany => "Germany",
            Actor::Switzerland => "Switzerland",
        }
    }
}

impl Action {
    pub const ALL: [Action; 2] = [Action::DontInvade, Action::Invade];

    pub fn label(&self) -> &'static str {
        match self {
            Action::DontInvade => "Don't Invade",
            Action::Invade => "Invade",
        }
    }
}

/// Payoff for one actor under each action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payoffs {
    pub dont_invade: i32,
    pub invade: i32,
}

/// 2x2 table keyed by actor and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayoffMatrix {
    pub germany: Payoffs,
    pub switzerland: Payoffs,
}

impl PayoffMatrix {
    /// Build the table for whether Switzerland has cut its economic ties.
    pub fn compute(economic_relationship_ended: bool) -> Self {
        let cut = economic_relationship_ended;
        Self {
            germany: Payoffs {
                dont_invade: if cut { -50 } else { 0 },
                invade: if cut { 0 } else { -50 },
            },
            switzerland: Payoffs {
                dont_invade: if cut { -50 } else { 0 },
                invade: -100,
            },
        }
    }

    pub fn get(&self, actor: Actor, action: Action) -> i32 {
        let row = match actor {
            Actor::Germany => &self.germany,
            Actor::Switzerland => &self.switzerland,
        };
        match action {
            Action::DontInvade => row.dont_invade,
            Action::Invade => row.invade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relationship_ended() {
        let m = PayoffMatrix::compute(true);
        assert_eq!(m.germany, Payoffs { dont_invade: -50, invade: 0 });
        assert_eq!(m.switzerland, Payoffs { dont_invade: -50, invade: -100 });
    }

    #[test]
    fn relationship_kept() {
        let m = PayoffMatrix::compute(false);
        assert_eq!(m.germany, Payoffs { dont_invade: 0, invade: -50 });
        assert_eq!(m.switzerland, Payoffs { dont_invade: 0, invade: -100 });
    }

    #[test]
    fn lookup_by_actor_and_action() {
        let m = PayoffMatrix::compute(false);
        assert_eq!(m.get(Actor::Germany, Action::Invade), -50);
        assert_eq!(m.get(Actor::Switzerland, Action::Invade), -100);
        assert_eq!(m.get(Actor::Switzerland, Action::DontInvade), 0);
        for ended in [false, true] {
            assert_eq!(PayoffMatrix::compute(ended).get(Actor::Switzerland, Action::Invade), -100);
        }
    }
}
