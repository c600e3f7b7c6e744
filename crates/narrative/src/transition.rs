//! The gate that keeps stage changes from overlapping.

use engine_core::{Millis, OneShotTimer};

use crate::stage::Stage;

/// Fixed length of the visual stage transition.
pub const TRANSITION_DURATION_MS: Millis = 500.0;

/// Idle, or on the way to `target` until `timer` fires.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionGate {
    #[default]
    Idle,
    Transitioning { target: Stage, timer: OneShotTimer },
}

impl TransitionGate {
    pub fn is_transitioning(&self) -> bool {
        matches!(self, TransitionGate::Transitioning { .. })
    }

    /// Stage the pending transition will land on.
    pub fn target(&self) -> Option<Stage> {
        match self {
            TransitionGate::Idle => None,
            TransitionGate::Transitioning { target, .. } => Some(*target),
        }
    }

    /// Open the gate towards `target`. Returns false if a transition is already pending.
    pub fn begin(&mut self, target: Stage, now: Millis, duration: Millis) -> bool {
        if self.is_transitioning() {
            return false;
        }
        *self = TransitionGate::Transitioning {
            target,
            timer: OneShotTimer::start(now, duration),
        };
        true
    }

    /// Whether the pending timer has reached its deadline.
    pub fn is_due(&self, now: Millis) -> bool {
        match self {
            TransitionGate::Idle => false,
            TransitionGate::Transitioning { timer, .. } => timer.is_due(now),
        }
    }

    /// Close the gate, handing back the stage it was heading to.
    pub fn complete(&mut self) -> Option<Stage> {
        let target = self.target();
        *self = TransitionGate::Idle;
        target
    }

    /// Animation progress 0..=1 while transitioning.
    pub fn progress(&self, now: Millis) -> Option<f32> {
        match self {
            TransitionGate::Idle => None,
            TransitionGate::Transitioning { timer, .. } => Some(timer.progress(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_begin_is_refused() {
        let mut gate = TransitionGate::default();
        assert!(gate.begin(Stage::Matrix, 0.0, TRANSITION_DURATION_MS));
        assert!(!gate.begin(Stage::Intro, 10.0, TRANSITION_DURATION_MS));
        assert_eq!(gate.target(), Some(Stage::Matrix));
    }

    #[test]
    fn due_after_duration_then_completes() {
        let mut gate = TransitionGate::default();
        gate.begin(Stage::Scenario, 1_000.0, TRANSITION_DURATION_MS);
        assert!(!gate.is_due(1_499.0));
        assert!(gate.is_due(1_500.0));
        assert_eq!(gate.progress(1_250.0), Some(0.5));
        assert_eq!(gate.complete(), Some(Stage::Scenario));
        assert_eq!(gate, TransitionGate::Idle);
        assert_eq!(gate.progress(1_600.0), None);
    }

    #[test]
    fn completing_idle_gate_yields_nothing() {
        let mut gate = TransitionGate::Idle;
        assert_eq!(gate.complete(), None);
    }
}
