//! Screen layout for each stage: where every button sits, where the map and
//! the playfield go, and which action a click triggers.
//!
//! The same [`Layout`] feeds both hit-testing and drawing, so what is drawn
//! is exactly what is clickable.

use glam::Vec2;
use minigame::SessionState;
use narrative::{Choice, DecisionFlag, Stage, Variant};

pub const NAV_BAR_H: f32 = 56.0;
pub const TITLE_Y: f32 = 36.0;
pub const BODY_Y: f32 = 100.0;
pub const BODY_SCALE: f32 = 2.0;
pub const BUTTON_H: f32 = 44.0;
const LARGE_BUTTON_H: f32 = 60.0;
const BUTTON_GAP: f32 = 12.0;
const DOT_SIZE: f32 = 18.0;
const DOT_SPACING: f32 = 40.0;
const MAX_CONTENT_W: f32 = 960.0;
const MARGIN: f32 = 40.0;

/// Axis-aligned rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x < self.x + self.w && p.y >= self.y && p.y < self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Largest rect of aspect `aspect` (w/h) centred horizontally inside
    /// `self` and aligned to its top.
    pub fn fit_aspect(&self, aspect: f32) -> Rect {
        let (w, h) = if self.w / self.h > aspect {
            (self.h * aspect, self.h)
        } else {
            (self.w, self.w / aspect)
        };
        Rect::new(self.x + (self.w - w) * 0.5, self.y, w, h)
    }
}

/// What a click on the page asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    Navigate(Stage),
    ToggleFlag(DecisionFlag),
    Continue,
    PickChoice(Choice),
    ToggleEconomic,
    StartGame,
    ToggleMusic,
    /// Click inside the playfield, already in playfield units.
    Shoot(Vec2),
}

/// How a button is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Plain,
    /// Lit while its flag is on.
    Toggle,
    Checkbox,
    NavDot,
    Music,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub action: UiAction,
    pub label: String,
    pub kind: ButtonKind,
}

impl Button {
    fn new(rect: Rect, action: UiAction, label: impl Into<String>, kind: ButtonKind) -> Self {
        Self {
            rect,
            action,
            label: label.into(),
            kind,
        }
    }
}

/// Everything placed on screen for one stage at one window size.
#[derive(Debug, Clone)]
pub struct Layout {
    pub screen: Rect,
    /// Column holding the stage's text and widgets.
    pub content: Rect,
    pub nav_bar: Rect,
    pub buttons: Vec<Button>,
    /// Scenario map, 100 x 70 view box.
    pub map: Option<Rect>,
    /// Payoff table area.
    pub table: Option<Rect>,
    /// Minigame playfield.
    pub playfield: Option<Rect>,
    playfield_units: Vec2,
}

impl Layout {
    /// `session` is the minigame's state when it is mounted.
    pub fn new(
        sw: f32,
        sh: f32,
        variant: Variant,
        stage: Stage,
        session: Option<SessionState>,
        playfield_units: Vec2,
    ) -> Self {
        let sw = sw.max(1.0);
        let sh = sh.max(1.0);
        let content_w = (sw - MARGIN * 2.0).clamp(1.0, MAX_CONTENT_W);
        let content_bottom = (sh - NAV_BAR_H - 16.0).max(BODY_Y + 1.0);
        let content = Rect::new((sw - content_w) * 0.5, TITLE_Y, content_w, content_bottom - TITLE_Y);
        let nav_bar = Rect::new(0.0, sh - NAV_BAR_H, sw, NAV_BAR_H);

        let mut layout = Self {
            screen: Rect::new(0.0, 0.0, sw, sh),
            content,
            nav_bar,
            buttons: Vec::new(),
            map: None,
            table: None,
            playfield: None,
            playfield_units,
        };

        match stage {
            Stage::Intro => layout.place_intro(),
            Stage::Scenario if variant.uses_decision_toggles() => layout.place_scenario_toggles(),
            Stage::Scenario => layout.place_scenario_choices(),
            Stage::Matrix => layout.place_matrix(),
            Stage::AirplaneGame => layout.place_airplane_game(session),
        }
        layout.place_nav_bar(variant);
        layout
    }

    fn bottom_button(&self, w: f32) -> Rect {
        Rect::new(
            self.content.center().x - w * 0.5,
            self.content.bottom() - BUTTON_H,
            w,
            BUTTON_H,
        )
    }

    fn place_intro(&mut self) {
        let rect = self.bottom_button(160.0);
        self.buttons
            .push(Button::new(rect, UiAction::Navigate(Stage::Scenario), "Next", ButtonKind::Plain));
    }

    fn place_scenario_toggles(&mut self) {
        let top = BODY_Y + 90.0;
        let continue_rect = self.bottom_button(200.0);
        let left_w = self.content.w * 0.4 - 16.0;
        let mut y = top;
        for flag in DecisionFlag::ALL {
            let h = match flag {
                DecisionFlag::MobilizeTroops | DecisionFlag::GrowPotatoes => LARGE_BUTTON_H,
                _ => BUTTON_H,
            };
            let rect = Rect::new(self.content.x, y, left_w, h);
            self.buttons
                .push(Button::new(rect, UiAction::ToggleFlag(flag), flag.label(), ButtonKind::Toggle));
            y += h + BUTTON_GAP;
        }

        let map_area = Rect::new(
            self.content.x + self.content.w * 0.4,
            top,
            self.content.w * 0.6,
            (continue_rect.y - BUTTON_GAP - top).max(1.0),
        );
        self.map = Some(map_area.fit_aspect(100.0 / 70.0));
        self.buttons
            .push(Button::new(continue_rect, UiAction::Continue, "Continue", ButtonKind::Plain));
    }

    fn place_scenario_choices(&mut self) {
        let w = self.content.w.min(620.0);
        let x = self.content.center().x - w * 0.5;
        let mut y = BODY_Y + 110.0;
        for choice in Choice::ALL {
            let label = format!("{}. {}", choice.number(), choice.description());
            self.buttons.push(Button::new(
                Rect::new(x, y, w, BUTTON_H),
                UiAction::PickChoice(choice),
                label,
                ButtonKind::Plain,
            ));
            y += BUTTON_H + BUTTON_GAP + 2.0;
        }
    }

    fn place_matrix(&mut self) {
        let label = "Switzerland ends economic relationship";
        let box_w = 28.0 + 12.0 + renderer::text_width(label, BODY_SCALE);
        let checkbox = Rect::new(self.content.center().x - box_w * 0.5, BODY_Y + 40.0, box_w, 28.0);
        self.buttons
            .push(Button::new(checkbox, UiAction::ToggleEconomic, label, ButtonKind::Checkbox));

        let table_w = self.content.w.min(640.0);
        let table_top = checkbox.bottom() + 36.0;
        self.table = Some(Rect::new(
            self.content.center().x - table_w * 0.5,
            table_top,
            table_w,
            (self.content.bottom() - table_top).clamp(1.0, 240.0),
        ));
    }

    fn place_airplane_game(&mut self, session: Option<SessionState>) {
        let top = BODY_Y + 84.0;
        let area = Rect::new(
            self.content.x,
            top,
            self.content.w,
            (self.content.bottom() - top).max(1.0),
        );
        let aspect = self.playfield_units.x / self.playfield_units.y.max(f32::EPSILON);
        let playfield = area.fit_aspect(aspect);
        self.playfield = Some(playfield);

        let label = match session {
            Some(SessionState::Running) => None,
            Some(SessionState::Over) => Some("Play Again"),
            Some(SessionState::NotStarted) | None => Some("Start Game"),
        };
        if let Some(label) = label {
            let c = playfield.center();
            let rect = Rect::new(c.x - 110.0, c.y + 10.0, 220.0, 48.0);
            self.buttons
                .push(Button::new(rect, UiAction::StartGame, label, ButtonKind::Plain));
        }
    }

    fn place_nav_bar(&mut self, variant: Variant) {
        let bar = self.nav_bar;
        let music = Rect::new(16.0, bar.y + 8.0, 40.0, 40.0);
        self.buttons
            .push(Button::new(music, UiAction::ToggleMusic, "Music", ButtonKind::Music));

        let stages = variant.stages();
        let span = (stages.len().saturating_sub(1)) as f32 * DOT_SPACING;
        let cy = bar.y + bar.h * 0.5;
        for (i, stage) in stages.iter().enumerate() {
            let cx = bar.w * 0.5 - span * 0.5 + i as f32 * DOT_SPACING;
            let rect = Rect::new(cx - DOT_SIZE * 0.5, cy - DOT_SIZE * 0.5, DOT_SIZE, DOT_SIZE);
            self.buttons
                .push(Button::new(rect, UiAction::Navigate(*stage), stage.title(), ButtonKind::NavDot));
        }
    }

    /// Action under `point` (window pixels). Buttons take priority over the
    /// playfield.
    pub fn hit_test(&self, point: Vec2) -> Option<UiAction> {
        if let Some(button) = self.buttons.iter().find(|b| b.rect.contains(point)) {
            return Some(button.action);
        }
        let playfield = self.playfield?;
        playfield
            .contains(point)
            .then(|| UiAction::Shoot(self.to_playfield(playfield, point)))
    }

    /// Window pixels to playfield units.
    pub fn to_playfield(&self, playfield: Rect, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - playfield.x) * self.playfield_units.x / playfield.w,
            (point.y - playfield.y) * self.playfield_units.y / playfield.h,
        )
    }

    /// Playfield units to window pixels.
    pub fn from_playfield(&self, playfield: Rect, point: Vec2) -> Vec2 {
        Vec2::new(
            playfield.x + point.x * playfield.w / self.playfield_units.x,
            playfield.y + point.y * playfield.h / self.playfield_units.y,
        )
    }

    /// Map view-box (100 x 70) coordinates to window pixels.
    pub fn from_map(&self, map: Rect, point: Vec2) -> Vec2 {
        Vec2::new(map.x + point.x * map.w / 100.0, map.y + point.y * map.h / 70.0)
    }

    pub fn button(&self, action: UiAction) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }
}
