//! Overlay drawing for every stage, the navigation bar and the stage wipe.

use engine_core::Millis;
use glam::Vec2;
use minigame::{AirplaneGame, SessionState, TargetView};
use narrative::{Action, Actor, DecisionFlag, Stage, StageController};
use renderer::{line_height, text_width, Color, OverlayBuilder};

use crate::content;
use crate::layout::{Button, ButtonKind, Layout, Rect, UiAction, BODY_SCALE, BODY_Y, TITLE_Y};
use crate::Slideshow;

const INK: Color = [0.29, 0.29, 0.29, 1.0];
const INK_SOFT: Color = [0.45, 0.45, 0.45, 1.0];
const WHITE: Color = [1.0, 1.0, 1.0, 1.0];
const PANEL: Color = [1.0, 0.98, 0.94, 1.0];
const SKY: Color = [0.85, 0.92, 0.98, 1.0];
const NAV_BG: Color = [0.93, 0.91, 0.86, 1.0];
const SOLDIER: Color = [0.29, 0.29, 0.29, 1.0];
const POTATO: Color = [0.55, 0.27, 0.07, 1.0];
const MONEY: Color = [0.15, 0.55, 0.2, 1.0];
const FPS_BG: Color = [0.0, 0.0, 0.0, 0.55];
const FPS_FG: Color = [0.0, 1.0, 0.0, 1.0];

/// Build the screen-space overlay for the current frame.
pub fn build(state: &Slideshow, sw: f32, sh: f32) -> OverlayBuilder {
    let mut tb = OverlayBuilder::new(sw, sh);
    let now = state.time.now_millis();
    let controller = state.shell.controller();
    let stage = controller.current_stage();
    let layout = state.shell.layout(sw, sh);

    tb.add_text_centered(layout.content.center().x, TITLE_Y, stage.title(), 3.0, INK);

    match stage {
        Stage::Intro => draw_intro(&mut tb, &layout),
        Stage::Scenario => draw_scenario(&mut tb, &layout, controller, now),
        Stage::Matrix => draw_matrix(&mut tb, &layout, controller),
        Stage::AirplaneGame => draw_airplane_game(&mut tb, &layout, state.shell.minigame()),
    }

    for button in &layout.buttons {
        if button.kind != ButtonKind::NavDot && button.kind != ButtonKind::Music {
            draw_button(&mut tb, button, is_active(button, controller));
        }
    }
    draw_nav_bar(&mut tb, &layout, controller, state.music.is_playing());

    if state.config.show_fps {
        let fps = format!("FPS: {:.0}", state.time.fps());
        tb.add_text_with_bg(4.0, 4.0, &fps, 1.5, FPS_FG, FPS_BG);
    }

    if let Some(progress) = controller.transition_progress(now) {
        tb.add_quad(wipe_corners(progress, sw, sh), INK);
    }

    tb
}

fn is_active(button: &Button, controller: &StageController) -> bool {
    match button.action {
        UiAction::ToggleFlag(flag) => controller.decision_flags().get(flag),
        UiAction::ToggleEconomic => controller.economic_relationship_ended(),
        UiAction::Navigate(stage) => button.kind == ButtonKind::NavDot && controller.current_stage() == stage,
        _ => false,
    }
}

// ---- Stages ----

fn draw_intro(tb: &mut OverlayBuilder, layout: &Layout) {
    let c = layout.content;
    let gap = line_height(BODY_SCALE) * 0.5;
    let mut y = BODY_Y;
    for paragraph in content::INTRO_PARAGRAPHS {
        y += tb.add_text_wrapped(c.x, y, c.w, paragraph, BODY_SCALE, INK) + gap;
    }
}

fn draw_scenario(tb: &mut OverlayBuilder, layout: &Layout, controller: &StageController, now: Millis) {
    let c = layout.content;
    tb.add_text_wrapped(c.x, BODY_Y, c.w, content::SCENARIO_PROMPT, BODY_SCALE, INK);

    if let Some(map) = layout.map {
        draw_map(tb, layout, map, controller, now);
    }
}

fn draw_map(tb: &mut OverlayBuilder, layout: &Layout, map: Rect, controller: &StageController, now: Millis) {
    let flags = controller.decision_flags();
    let to_px = |p: [f32; 2]| layout.from_map(map, Vec2::from(p));
    let unit = map.w / 100.0;

    tb.add_rect(map.x, map.y, map.w, map.h, PANEL);
    for (i, a) in content::BORDER.iter().enumerate() {
        let b = content::BORDER[(i + 1) % content::BORDER.len()];
        tb.add_line(to_px(*a).into(), to_px(b).into(), (0.5 * unit).max(1.5), INK);
    }

    if !flags.get(DecisionFlag::HaltFinancialActivity) {
        let scale = (unit * 1.2).max(1.0);
        for pos in content::money_positions(now) {
            let p = layout.from_map(map, pos);
            tb.add_text_centered(p.x, p.y - 4.0 * scale, "$", scale, MONEY);
        }
    }

    if flags.get(DecisionFlag::MobilizeTroops) {
        for soldier in content::SOLDIERS {
            draw_soldier(tb, to_px(soldier), unit);
        }
    }

    if flags.get(DecisionFlag::GrowPotatoes) {
        for potato in content::POTATOES {
            let p = to_px(potato);
            tb.add_rect(p.x - 2.0 * unit, p.y - 1.5 * unit, 4.0 * unit, 3.0 * unit, POTATO);
        }
    }
}

/// Stick figure: head, body, legs.
fn draw_soldier(tb: &mut OverlayBuilder, at: Vec2, unit: f32) {
    let stroke = (0.5 * unit).max(1.0);
    let head = 3.0 * unit;
    tb.add_rect(at.x - head * 0.5, at.y - head * 0.5, head, head, SOLDIER);
    let hip = at + Vec2::new(0.0, 2.5 * unit);
    let foot_y = at.y + 4.0 * unit;
    tb.add_line((at + Vec2::new(0.0, 1.5 * unit)).into(), [at.x, foot_y], stroke, SOLDIER);
    tb.add_line(hip.into(), [at.x - unit, foot_y], stroke, SOLDIER);
    tb.add_line(hip.into(), [at.x + unit, foot_y], stroke, SOLDIER);
}

fn draw_matrix(tb: &mut OverlayBuilder, layout: &Layout, controller: &StageController) {
    let c = layout.content;
    if let Some(choice) = controller.choice() {
        let text = format!("Your choice: {}. {}", choice.number(), choice.description());
        tb.add_text_centered(c.center().x, BODY_Y, &text, BODY_SCALE, INK_SOFT);
    }

    let Some(table) = layout.table else {
        return;
    };
    let payoffs = controller.payoff_matrix();
    let col_w = [table.w * 0.4, table.w * 0.3, table.w * 0.3];
    let row_h = table.h / 3.0;
    let text_h = 8.0 * BODY_SCALE;

    let mut rows: Vec<[String; 3]> = vec![[
        String::new(),
        Action::DontInvade.label().to_string(),
        Action::Invade.label().to_string(),
    ]];
    for actor in Actor::ALL {
        rows.push([
            actor.label().to_string(),
            payoffs.get(actor, Action::DontInvade).to_string(),
            payoffs.get(actor, Action::Invade).to_string(),
        ]);
    }

    for (r, row) in rows.iter().enumerate() {
        let y = table.y + r as f32 * row_h;
        let mut x = table.x;
        for (col, cell) in row.iter().enumerate() {
            let w = col_w[col];
            let header = r == 0 || col == 0;
            tb.add_rect(x, y, w, row_h, if header { NAV_BG } else { PANEL });
            tb.add_frame(x, y, w, row_h, 2.0, INK);
            let scale = if header { BODY_SCALE } else { BODY_SCALE * 1.25 };
            tb.add_text_centered(x + w * 0.5, y + (row_h - text_h) * 0.5, cell, scale, INK);
            x += w;
        }
    }
}

fn draw_airplane_game(tb: &mut OverlayBuilder, layout: &Layout, game: Option<&AirplaneGame>) {
    let c = layout.content;
    tb.add_text_centered(c.center().x, BODY_Y, content::GAME_INSTRUCTIONS, 1.5, INK);

    let Some(pf) = layout.playfield else {
        return;
    };
    tb.add_rect(pf.x, pf.y, pf.w, pf.h, SKY);
    tb.add_frame(pf.x, pf.y, pf.w, pf.h, 2.0, INK);

    let Some(game) = game else {
        return;
    };
    let score = game.score();
    let line = format!("Score - Allied: {}, Axis: {}", score.allied, score.axis);
    tb.add_text_centered(c.center().x, BODY_Y + 40.0, &line, BODY_SCALE, INK);

    let unit = pf.w / game.tuning().playfield_width;
    for target in game.targets() {
        draw_plane(tb, layout.from_playfield(pf, target.position), unit, &target);
    }

    if game.state() == SessionState::Over {
        let center = pf.center();
        let text = content::game_over(score.total());
        tb.add_text_centered(center.x, center.y - 30.0, &text, BODY_SCALE, INK);
    }
}

/// Fuselage, wings and a cross, tagged with the faction.
fn draw_plane(tb: &mut OverlayBuilder, at: Vec2, unit: f32, target: &TargetView) {
    let color = target.faction.color();
    let stroke = (0.75 * unit).max(1.5);
    let r = 3.0 * unit;
    tb.add_line([at.x, at.y - 4.0 * unit], [at.x, at.y + 4.0 * unit], stroke, color);
    tb.add_line([at.x - 5.0 * unit, at.y - unit], [at.x + 5.0 * unit, at.y - unit], stroke, color);
    tb.add_line([at.x - r, at.y - r], [at.x + r, at.y + r], stroke * 0.6, color);
    tb.add_line([at.x - r, at.y + r], [at.x + r, at.y - r], stroke * 0.6, color);
    tb.add_text(at.x + 5.0 * unit, at.y - 5.0 * unit, target.faction.tag(), 1.0, color);
}

// ---- Widgets ----

fn draw_button(tb: &mut OverlayBuilder, button: &Button, active: bool) {
    let r = button.rect;
    match button.kind {
        ButtonKind::Checkbox => {
            let size = r.h;
            tb.add_rect(r.x, r.y, size, size, WHITE);
            tb.add_frame(r.x, r.y, size, size, 2.0, INK);
            if active {
                let inset = size * 0.25;
                tb.add_rect(r.x + inset, r.y + inset, size - inset * 2.0, size - inset * 2.0, INK);
            }
            let text_y = r.y + (size - 8.0 * BODY_SCALE) * 0.5;
            tb.add_text(r.x + size + 12.0, text_y, &button.label, BODY_SCALE, INK);
        }
        _ => {
            let (fill, text) = if active { (INK, WHITE) } else { (WHITE, INK) };
            tb.add_rect(r.x, r.y, r.w, r.h, fill);
            tb.add_frame(r.x, r.y, r.w, r.h, 2.0, INK);

            let pad = 12.0;
            let scale = if text_width(&button.label, BODY_SCALE) + pad * 2.0 <= r.w {
                BODY_SCALE
            } else {
                1.5
            };
            if text_width(&button.label, scale) + pad * 2.0 <= r.w {
                let y = r.y + (r.h - 8.0 * scale) * 0.5;
                if button.kind == ButtonKind::Toggle {
                    tb.add_text(r.x + pad, y, &button.label, scale, text);
                } else {
                    tb.add_text_centered(r.center().x, y, &button.label, scale, text);
                }
            } else {
                tb.add_text_wrapped(r.x + pad, r.y + 6.0, r.w - pad * 2.0, &button.label, scale, text);
            }
        }
    }
}

fn draw_nav_bar(tb: &mut OverlayBuilder, layout: &Layout, controller: &StageController, music_playing: bool) {
    let bar = layout.nav_bar;
    tb.add_rect(bar.x, bar.y, bar.w, bar.h, NAV_BG);
    tb.add_rect(bar.x, bar.y, bar.w, 2.0, INK);

    for button in &layout.buttons {
        let r = button.rect;
        match button.kind {
            ButtonKind::NavDot => {
                if is_active(button, controller) {
                    tb.add_rect(r.x, r.y, r.w, r.h, INK);
                } else {
                    tb.add_rect(r.x, r.y, r.w, r.h, WHITE);
                    tb.add_frame(r.x, r.y, r.w, r.h, 2.0, INK);
                }
            }
            ButtonKind::Music => {
                tb.add_rect(r.x, r.y, r.w, r.h, WHITE);
                tb.add_frame(r.x, r.y, r.w, r.h, 2.0, INK);
                let glyph = if music_playing { "||" } else { ">" };
                tb.add_text_centered(r.center().x, r.y + (r.h - 16.0) * 0.5, glyph, 2.0, INK);
            }
            _ => {}
        }
    }
}

/// Parallelogram sweeping in from the left. Fully off screen at 0, fully
/// covering the window at 1.
fn wipe_corners(progress: f32, sw: f32, sh: f32) -> [[f32; 2]; 4] {
    let band = sw + sh;
    let lead = progress.clamp(0.0, 1.0) * band;
    [
        [lead - band, 0.0],
        [lead, 0.0],
        [lead - sh, sh],
        [lead - band - sh, sh],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wipe_starts_hidden_and_ends_covering() {
        let (sw, sh) = (800.0, 600.0);
        let start = wipe_corners(0.0, sw, sh);
        assert!(start.iter().all(|p| p[0] <= 0.0));

        let end = wipe_corners(1.0, sw, sh);
        // Top edge spans the window, bottom edge too.
        assert!(end[0][0] <= 0.0 && end[1][0] >= sw);
        assert!(end[3][0] <= 0.0 && end[2][0] >= sw);
    }

    #[test]
    fn wipe_moves_monotonically() {
        let a = wipe_corners(0.25, 1280.0, 800.0);
        let b = wipe_corners(0.5, 1280.0, 800.0);
        assert!(b[1][0] > a[1][0]);
    }
}
