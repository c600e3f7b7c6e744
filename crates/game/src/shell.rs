//! The slideshow shell: wires the stage controller to the minigame and
//! turns clicks and keys into controller and game calls.
//!
//! Nothing here touches the window or the GPU, so the whole flow can be
//! driven from tests with a manual clock.

use engine_core::Millis;
use glam::Vec2;
use minigame::{AirplaneGame, MinigameTuning, SessionState};
use narrative::{Stage, StageController};

use crate::config::AppConfig;
use crate::layout::{Layout, UiAction};

/// Side effects the shell asks its host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ToggleMusic,
}

pub struct Shell {
    controller: StageController,
    /// Mounted only while the airspace stage is current.
    minigame: Option<AirplaneGame>,
    tuning: MinigameTuning,
    /// Fixed seed for mounted games; `None` draws from entropy.
    seed: Option<u64>,
}

impl Shell {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            controller: StageController::with_transition_duration(config.variant, config.transition_ms),
            minigame: None,
            tuning: config.minigame.clone(),
            seed: None,
        }
    }

    #[cfg(test)]
    fn with_seed(config: &AppConfig, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::new(config)
        }
    }

    pub fn controller(&self) -> &StageController {
        &self.controller
    }

    pub fn minigame(&self) -> Option<&AirplaneGame> {
        self.minigame.as_ref()
    }

    pub fn session(&self) -> Option<SessionState> {
        self.minigame.as_ref().map(AirplaneGame::state)
    }

    pub fn playfield_units(&self) -> Vec2 {
        Vec2::new(self.tuning.playfield_width, self.tuning.playfield_height)
    }

    /// Layout of the current stage for a window of the given size.
    pub fn layout(&self, sw: f32, sh: f32) -> Layout {
        Layout::new(
            sw,
            sh,
            self.controller.variant(),
            self.controller.current_stage(),
            self.session(),
            self.playfield_units(),
        )
    }

    /// Per-frame poll: commit a due transition, then mount or drop the
    /// minigame to match the current stage.
    pub fn poll(&mut self, now: Millis) -> Option<Stage> {
        let committed = self.controller.update(now);
        self.sync_minigame();
        committed
    }

    fn sync_minigame(&mut self) {
        let on_game_stage = self.controller.current_stage() == Stage::AirplaneGame;
        match (on_game_stage, self.minigame.is_some()) {
            (true, false) => {
                let tuning = self.tuning.clone();
                self.minigame = Some(match self.seed {
                    Some(seed) => AirplaneGame::with_seed(tuning, seed),
                    None => AirplaneGame::new(tuning),
                });
                log::debug!("Minigame mounted");
            }
            (false, true) => {
                self.minigame = None;
                log::debug!("Minigame dropped");
            }
            _ => {}
        }
    }

    /// Handle a left click at `point` (window pixels). While the wipe covers
    /// the page only the music button responds.
    pub fn click(&mut self, layout: &Layout, point: Vec2, now: Millis) -> Option<Effect> {
        let action = layout.hit_test(point)?;
        if self.controller.is_transitioning() && action != UiAction::ToggleMusic {
            log::debug!("Click ignored during transition: {:?}", action);
            return None;
        }
        self.apply(action, now)
    }

    pub fn apply(&mut self, action: UiAction, now: Millis) -> Option<Effect> {
        match action {
            UiAction::Navigate(stage) => {
                self.controller.request_navigate(stage, now);
            }
            UiAction::ToggleFlag(flag) => {
                self.controller.toggle_decision_flag(flag);
            }
            UiAction::Continue => {
                self.controller.confirm_scenario(now);
            }
            UiAction::PickChoice(choice) => self.controller.select_choice(choice, now),
            UiAction::ToggleEconomic => {
                let ended = !self.controller.economic_relationship_ended();
                self.controller.set_economic_relationship_ended(ended);
            }
            UiAction::StartGame => self.start_game(),
            UiAction::Shoot(point) => {
                if let Some(game) = &mut self.minigame {
                    game.resolve_shot(point);
                }
            }
            UiAction::ToggleMusic => return Some(Effect::ToggleMusic),
        }
        None
    }

    pub fn next(&mut self, now: Millis) {
        self.controller.request_next(now);
    }

    pub fn previous(&mut self, now: Millis) {
        self.controller.request_previous(now);
    }

    /// Enter/Space: start the minigame unless a round is already running.
    pub fn confirm(&mut self) {
        if self.session().is_some_and(|s| s != SessionState::Running) {
            self.start_game();
        }
    }

    fn start_game(&mut self) {
        if let Some(game) = &mut self.minigame {
            game.start();
        }
    }

    pub fn advance(&mut self, now: Millis) {
        if let Some(game) = &mut self.minigame {
            game.advance(now);
        }
    }

    /// Cancel the pending transition and stop the minigame's frame loop.
    pub fn teardown(&mut self) {
        self.controller.teardown();
        self.minigame = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use narrative::{Choice, DecisionFlag, Variant};

    const W: f32 = 1280.0;
    const H: f32 = 800.0;

    fn shell(variant: Variant) -> Shell {
        let config = AppConfig {
            variant,
            ..AppConfig::default()
        };
        Shell::with_seed(&config, 9)
    }

    fn click_action(shell: &mut Shell, action: UiAction, now: Millis) -> Option<Effect> {
        let layout = shell.layout(W, H);
        let point = layout.button(action).expect("button on screen").rect.center();
        shell.click(&layout, point, now)
    }

    /// Navigate and let the wipe finish.
    fn go_to(shell: &mut Shell, stage: Stage, now: Millis) -> Millis {
        shell.apply(UiAction::Navigate(stage), now);
        let done = now + 500.0;
        assert_eq!(shell.poll(done), Some(stage));
        done
    }

    #[test]
    fn intro_next_button_reaches_scenario_after_wipe() {
        let mut s = shell(Variant::Full);
        click_action(&mut s, UiAction::Navigate(Stage::Scenario), 0.0);
        assert!(s.controller().is_transitioning());
        assert_eq!(s.poll(499.0), None);
        assert_eq!(s.controller().current_stage(), Stage::Intro);
        assert_eq!(s.poll(500.0), Some(Stage::Scenario));
        assert!(!s.controller().is_transitioning());
    }

    #[test]
    fn toggles_and_continue_store_choice_then_show_matrix() {
        let mut s = shell(Variant::Full);
        let t = go_to(&mut s, Stage::Scenario, 0.0);
        click_action(&mut s, UiAction::ToggleFlag(DecisionFlag::MobilizeTroops), t);
        click_action(&mut s, UiAction::ToggleFlag(DecisionFlag::HaltCrossBorderTrade), t);
        click_action(&mut s, UiAction::Continue, t);
        assert_eq!(s.controller().choice(), Some(Choice::MobilizeAndStopTrade));
        assert_eq!(s.poll(t + 500.0), Some(Stage::Matrix));
    }

    #[test]
    fn classic_answers_navigate_to_matrix() {
        let mut s = shell(Variant::Classic);
        let t = go_to(&mut s, Stage::Scenario, 0.0);
        click_action(&mut s, UiAction::PickChoice(Choice::ContinueTradeOnly), t);
        assert_eq!(s.controller().choice(), Some(Choice::ContinueTradeOnly));
        assert_eq!(s.controller().pending_target(), Some(Stage::Matrix));
    }

    #[test]
    fn page_clicks_are_blocked_during_wipe_but_music_is_not() {
        let mut s = shell(Variant::Full);
        let t = go_to(&mut s, Stage::Scenario, 0.0);
        let layout = s.layout(W, H);
        s.apply(UiAction::Navigate(Stage::Matrix), t);

        let toggle = layout
            .button(UiAction::ToggleFlag(DecisionFlag::GrowPotatoes))
            .expect("toggle")
            .rect
            .center();
        assert_eq!(s.click(&layout, toggle, t + 10.0), None);
        assert!(!s.controller().decision_flags().grow_potatoes);

        let music = layout.button(UiAction::ToggleMusic).expect("music").rect.center();
        assert_eq!(s.click(&layout, music, t + 10.0), Some(Effect::ToggleMusic));
    }

    #[test]
    fn matrix_checkbox_flips_payoffs() {
        let mut s = shell(Variant::Full);
        let t = go_to(&mut s, Stage::Matrix, 0.0);
        click_action(&mut s, UiAction::ToggleEconomic, t);
        assert!(s.controller().economic_relationship_ended());
        assert_eq!(s.controller().payoff_matrix().germany.dont_invade, -50);
        click_action(&mut s, UiAction::ToggleEconomic, t);
        assert!(!s.controller().economic_relationship_ended());
    }

    #[test]
    fn minigame_mounts_on_its_stage_and_drops_on_leave() {
        let mut s = shell(Variant::Full);
        assert!(s.minigame().is_none());
        let t = go_to(&mut s, Stage::AirplaneGame, 0.0);
        assert_eq!(s.session(), Some(SessionState::NotStarted));

        click_action(&mut s, UiAction::StartGame, t);
        assert_eq!(s.session(), Some(SessionState::Running));
        s.advance(t);
        s.advance(t + 1_000.0);
        assert_eq!(s.minigame().map(AirplaneGame::live_count), Some(1));

        let t = go_to(&mut s, Stage::Matrix, t + 1_000.0);
        assert!(s.minigame().is_none());

        // Coming back mounts a fresh, unstarted game.
        go_to(&mut s, Stage::AirplaneGame, t);
        assert_eq!(s.session(), Some(SessionState::NotStarted));
    }

    #[test]
    fn shots_land_through_playfield_mapping() {
        let mut s = shell(Variant::Full);
        let t = go_to(&mut s, Stage::AirplaneGame, 0.0);
        s.confirm();
        s.advance(t);
        s.advance(t + 1_000.0);
        let target = s.minigame().expect("mounted").targets()[0];

        let layout = s.layout(W, H);
        let pf = layout.playfield.expect("playfield");
        let point = layout.from_playfield(pf, target.position + Vec2::new(0.0, 0.5));
        s.click(&layout, point, t + 1_000.0);
        assert_eq!(s.minigame().map(|g| g.score().total()), Some(1));
    }

    #[test]
    fn confirm_only_starts_when_not_running() {
        let mut s = shell(Variant::Full);
        s.confirm();
        assert_eq!(s.session(), None);

        go_to(&mut s, Stage::AirplaneGame, 0.0);
        s.confirm();
        assert_eq!(s.session(), Some(SessionState::Running));
        s.advance(0.0);
        s.advance(1_000.0);
        // A second confirm must not wipe the running round.
        s.confirm();
        assert_eq!(s.minigame().map(AirplaneGame::live_count), Some(1));
    }

    #[test]
    fn arrows_walk_the_variant() {
        let mut s = shell(Variant::Classic);
        s.previous(0.0);
        assert!(!s.controller().is_transitioning());
        s.next(0.0);
        assert_eq!(s.poll(500.0), Some(Stage::Scenario));
        s.next(500.0);
        assert_eq!(s.poll(1_000.0), Some(Stage::Matrix));
        s.next(1_000.0);
        assert!(!s.controller().is_transitioning());
    }

    #[test]
    fn teardown_cancels_wipe_and_game() {
        let mut s = shell(Variant::Full);
        let t = go_to(&mut s, Stage::AirplaneGame, 0.0);
        s.apply(UiAction::Navigate(Stage::Intro), t);
        s.teardown();
        assert!(s.minigame().is_none());
        assert!(!s.controller().is_transitioning());
        assert_eq!(s.poll(t + 10_000.0), None);
        assert_eq!(s.controller().current_stage(), Stage::AirplaneGame);
    }
}
