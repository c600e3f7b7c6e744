//! Stage controller: owns the current stage, the transition gate and the
//! scenario state, and is the only place the current stage ever changes.
//!
//! Every time-dependent call takes the frame timestamp explicitly; the host
//! polls [`StageController::update`] once per frame to let the pending
//! transition fire.

use engine_core::Millis;

use crate::decisions::{Choice, DecisionFlag, DecisionFlags};
use crate::payoff::PayoffMatrix;
use crate::stage::{Stage, Variant};
use crate::transition::{TransitionGate, TRANSITION_DURATION_MS};

/// Narrative state for one session.
#[derive(Debug, Clone)]
pub struct StageController {
    variant: Variant,
    current: Stage,
    gate: TransitionGate,
    transition_duration: Millis,
    flags: DecisionFlags,
    choice: Option<Choice>,
    economic_relationship_ended: bool,
}

impl Default for StageController {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

impl StageController {
    /// Start at the intro with the standard transition length.
    pub fn new(variant: Variant) -> Self {
        Self::with_transition_duration(variant, TRANSITION_DURATION_MS)
    }

    pub fn with_transition_duration(variant: Variant, transition_duration: Millis) -> Self {
        Self {
            variant,
            current: Stage::Intro,
            gate: TransitionGate::Idle,
            transition_duration,
            flags: DecisionFlags::default(),
            choice: None,
            economic_relationship_ended: false,
        }
    }

    // ── Reads ───────────────────────────────────────────────────────────

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn current_stage(&self) -> Stage {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.gate.is_transitioning()
    }

    pub fn pending_target(&self) -> Option<Stage> {
        self.gate.target()
    }

    /// Wipe progress 0..=1 for the covering effect, `None` when idle.
    pub fn transition_progress(&self, now: Millis) -> Option<f32> {
        self.gate.progress(now)
    }

    pub fn decision_flags(&self) -> DecisionFlags {
        self.flags
    }

    /// Choice stored when the scenario was last confirmed.
    pub fn choice(&self) -> Option<Choice> {
        self.choice
    }

    pub fn economic_relationship_ended(&self) -> bool {
        self.economic_relationship_ended
    }

    // ── Navigation ──────────────────────────────────────────────────────

    /// Ask to move to `target`. Ignored while a transition is pending, when
    /// `target` is already showing, or when the variant has no such stage.
    /// Returns whether a transition started.
    pub fn request_navigate(&mut self, target: Stage, now: Millis) -> bool {
        if self.gate.is_transitioning() {
            log::debug!("Navigation to {:?} ignored: transition in progress", target);
            return false;
        }
        if target == self.current {
            return false;
        }
        if !self.variant.contains(target) {
            log::debug!("Navigation to {:?} ignored: not part of {:?}", target, self.variant);
            return false;
        }
        self.gate.begin(target, now, self.transition_duration);
        log::info!("Transition {:?} -> {:?} started", self.current, target);
        true
    }

    /// Move to the next stage in the variant's order.
    pub fn request_next(&mut self, now: Millis) -> bool {
        match self.variant.next(self.current) {
            Some(next) => self.request_navigate(next, now),
            None => false,
        }
    }

    /// Move to the previous stage in the variant's order.
    pub fn request_previous(&mut self, now: Millis) -> bool {
        match self.variant.previous(self.current) {
            Some(prev) => self.request_navigate(prev, now),
            None => false,
        }
    }

    /// Per-frame poll. Fires the pending transition once its deadline passes
    /// and returns the stage that just became current.
    pub fn update(&mut self, now: Millis) -> Option<Stage> {
        if self.gate.is_due(now) {
            self.on_transition_timer_fired()
        } else {
            None
        }
    }

    /// Commit the pending transition. No-op when idle.
    pub fn on_transition_timer_fired(&mut self) -> Option<Stage> {
        let target = self.gate.complete()?;
        log::info!("Stage {:?} -> {:?}", self.current, target);
        self.current = target;
        Some(target)
    }

    /// Host view is going away: drop the pending timer without committing.
    pub fn teardown(&mut self) {
        if let Some(target) = self.gate.target() {
            log::info!("Transition to {:?} cancelled by teardown", target);
        }
        self.gate = TransitionGate::Idle;
    }

    // ── Scenario ────────────────────────────────────────────────────────

    pub fn set_decision_flag(&mut self, flag: DecisionFlag, value: bool) {
        self.flags.set(flag, value);
    }

    pub fn toggle_decision_flag(&mut self, flag: DecisionFlag) -> bool {
        let value = !self.flags.get(flag);
        self.flags.set(flag, value);
        value
    }

    pub fn compute_choice_classification(&self) -> Choice {
        self.flags.classify()
    }

    /// "Continue" on the scenario: store the classification and head to the matrix.
    pub fn confirm_scenario(&mut self, now: Millis) -> Choice {
        let choice = self.compute_choice_classification();
        self.select_choice(choice, now);
        choice
    }

    /// Store an explicit answer and head to the matrix. The choice is kept
    /// even if the gate refuses the navigation.
    pub fn select_choice(&mut self, choice: Choice, now: Millis) {
        log::info!("Choice {}: {}", choice.number(), choice.description());
        self.choice = Some(choice);
        self.request_navigate(Stage::Matrix, now);
    }

    // ── Matrix ──────────────────────────────────────────────────────────

    pub fn set_economic_relationship_ended(&mut self, ended: bool) {
        self.economic_relationship_ended = ended;
    }

    pub fn payoff_matrix(&self) -> PayoffMatrix {
        self.compute_payoff_matrix(self.economic_relationship_ended)
    }

    pub fn compute_payoff_matrix(&self, economic_relationship_ended: bool) -> PayoffMatrix {
        PayoffMatrix::compute(economic_relationship_ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle_commits_after_duration() {
        let mut c = StageController::new(Variant::Full);
        assert!(c.request_navigate(Stage::Matrix, 0.0));
        assert!(c.is_transitioning());
        assert_eq!(c.current_stage(), Stage::Intro);

        assert_eq!(c.update(499.0), None);
        assert_eq!(c.current_stage(), Stage::Intro);

        assert_eq!(c.update(500.0), Some(Stage::Matrix));
        assert_eq!(c.current_stage(), Stage::Matrix);
        assert!(!c.is_transitioning());
        assert_eq!(c.pending_target(), None);
    }

    #[test]
    fn navigate_while_transitioning_is_ignored() {
        let mut c = StageController::new(Variant::Full);
        c.request_navigate(Stage::Scenario, 0.0);
        assert!(!c.request_navigate(Stage::Matrix, 100.0));
        assert_eq!(c.pending_target(), Some(Stage::Scenario));
        // The original deadline stands.
        assert_eq!(c.update(500.0), Some(Stage::Scenario));
    }

    #[test]
    fn navigate_to_current_stage_is_noop() {
        let mut c = StageController::new(Variant::Full);
        assert!(!c.request_navigate(Stage::Intro, 0.0));
        assert!(!c.is_transitioning());
        assert_eq!(c.update(10_000.0), None);
    }

    #[test]
    fn classic_variant_rejects_minigame_stage() {
        let mut c = StageController::new(Variant::Classic);
        assert!(!c.request_navigate(Stage::AirplaneGame, 0.0));
        assert!(!c.is_transitioning());
    }

    #[test]
    fn teardown_prevents_commit() {
        let mut c = StageController::new(Variant::Full);
        c.request_navigate(Stage::Scenario, 0.0);
        c.teardown();
        assert!(!c.is_transitioning());
        assert_eq!(c.update(1_000.0), None);
        assert_eq!(c.current_stage(), Stage::Intro);
    }

    #[test]
    fn timer_fired_when_idle_changes_nothing() {
        let mut c = StageController::new(Variant::Full);
        assert_eq!(c.on_transition_timer_fired(), None);
        assert_eq!(c.current_stage(), Stage::Intro);
    }

    #[test]
    fn confirm_scenario_stores_choice_and_navigates() {
        let mut c = StageController::new(Variant::Full);
        c.request_navigate(Stage::Scenario, 0.0);
        c.update(500.0);

        c.set_decision_flag(DecisionFlag::MobilizeTroops, true);
        c.set_decision_flag(DecisionFlag::HaltCrossBorderTrade, true);
        let choice = c.confirm_scenario(1_000.0);

        assert_eq!(choice.number(), 1);
        assert_eq!(c.choice(), Some(choice));
        assert_eq!(c.pending_target(), Some(Stage::Matrix));
        c.update(1_500.0);
        assert_eq!(c.current_stage(), Stage::Matrix);
    }

    #[test]
    fn choice_is_kept_when_gate_refuses() {
        let mut c = StageController::new(Variant::Classic);
        c.request_navigate(Stage::Scenario, 0.0);
        c.select_choice(Choice::ContinueTradeOnly, 100.0);
        assert_eq!(c.choice(), Some(Choice::ContinueTradeOnly));
        assert_eq!(c.pending_target(), Some(Stage::Scenario));
    }

    #[test]
    fn toggle_flips_flag() {
        let mut c = StageController::default();
        assert!(c.toggle_decision_flag(DecisionFlag::GrowPotatoes));
        assert!(c.decision_flags().grow_potatoes);
        assert!(!c.toggle_decision_flag(DecisionFlag::GrowPotatoes));
    }

    #[test]
    fn next_and_previous_respect_the_gate() {
        let mut c = StageController::new(Variant::Full);
        assert!(!c.request_previous(0.0));
        assert!(c.request_next(0.0));
        assert!(!c.request_next(10.0));
        c.update(500.0);
        assert_eq!(c.current_stage(), Stage::Scenario);
    }

    #[test]
    fn payoff_follows_relationship_toggle() {
        let mut c = StageController::default();
        assert_eq!(c.payoff_matrix(), PayoffMatrix::compute(false));
        c.set_economic_relationship_ended(true);
        assert_eq!(c.payoff_matrix().germany.invade, 0);
        assert_eq!(c.payoff_matrix(), c.compute_payoff_matrix(true));
    }

    #[test]
    fn custom_duration_is_honoured() {
        let mut c = StageController::with_transition_duration(Variant::Full, 200.0);
        c.request_navigate(Stage::Scenario, 50.0);
        assert_eq!(c.transition_progress(150.0), Some(0.5));
        assert_eq!(c.update(250.0), Some(Stage::Scenario));
    }
}
