//! Text and map art shown on each stage.

use engine_core::Millis;
use glam::Vec2;

pub const INTRO_PARAGRAPHS: [&str; 5] = [
    "During World War II, Switzerland remained untouched while war ravaged throughout the European continent.",
    "Sure, Switzerland was useful for Nazi Germany as purchaser of gold, and as a hiding place for stolen artworks and jewellery.",
    "But Switzerland purchased even larger quantities of gold from Allied powers, and from 1942 onwards was home to a US intelligence agency base. Therefore one has to wonder why Nazi Germany never followed through with its countless plans to invade Switzerland when they still realistically could before being embattled to such an extent that they couldn't spare any troops.",
    "So how did Switzerland, a country so despised by Hitler, because it had all the characters he so hated: decentralized political power, no great leader fetish - how did it manage to not get invaded?",
    "It can be explained by a combination of military/economic deterrence, economic concessions to Germany and good fortune as larger events during the war delayed an invasion. But deterrence is what interests us today. So, to understand all of this...",
];

pub const SCENARIO_PROMPT: &str = "It's 1939. Germany starts its invasion of Poland. What would you do as Switzerland if your goal is keeping your neutral status and not get involved in the war?";

pub const GAME_INSTRUCTIONS: &str =
    "Click on the airplanes to shoot them down. Be careful not to violate Swiss neutrality!";

pub fn game_over(shot_down: u32) -> String {
    format!("Game Over! You shot down {shot_down} planes.")
}

/// Coarse border of Switzerland in the map's 100 x 70 view box, closed.
pub const BORDER: [[f32; 2]; 23] = [
    [26.0, 2.0],
    [16.0, 9.0],
    [2.5, 22.5],
    [3.5, 31.0],
    [17.0, 40.0],
    [30.5, 49.0],
    [44.0, 58.0],
    [57.5, 67.0],
    [62.0, 68.0],
    [80.0, 62.0],
    [97.5, 55.5],
    [99.0, 52.0],
    [95.0, 38.5],
    [90.5, 25.0],
    [86.0, 11.5],
    [82.5, 3.0],
    [79.0, 1.5],
    [61.0, 7.0],
    [43.0, 13.0],
    [26.0, 19.0],
    [33.0, 28.0],
    [22.0, 40.0],
    [26.0, 44.5],
];

pub const SOLDIERS: [[f32; 2]; 5] = [
    [20.0, 15.0],
    [80.0, 25.0],
    [50.0, 55.0],
    [15.0, 40.0],
    [85.0, 50.0],
];

pub const POTATOES: [[f32; 2]; 5] = [
    [30.0, 20.0],
    [70.0, 30.0],
    [40.0, 50.0],
    [25.0, 45.0],
    [75.0, 40.0],
];

/// One sweep of the money markers.
pub const MONEY_PERIOD_MS: Millis = 2000.0;
const MONEY_LEFT: f32 = 20.0;
const MONEY_RIGHT: f32 = 80.0;
const MONEY_Y: f32 = 35.0;

/// Positions of the two money markers at `now`: one sweeping left to
/// right, the other right to left, each jumping back at the end of a sweep.
pub fn money_positions(now: Millis) -> [Vec2; 2] {
    let phase = (now.rem_euclid(MONEY_PERIOD_MS) / MONEY_PERIOD_MS) as f32;
    let travel = (MONEY_RIGHT - MONEY_LEFT) * phase;
    [
        Vec2::new(MONEY_LEFT + travel, MONEY_Y),
        Vec2::new(MONEY_RIGHT - travel, MONEY_Y),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_sweeps_in_opposite_directions() {
        let [a, b] = money_positions(0.0);
        assert_eq!(a, Vec2::new(20.0, 35.0));
        assert_eq!(b, Vec2::new(80.0, 35.0));

        let [a, b] = money_positions(1000.0);
        assert_eq!(a.x, 50.0);
        assert_eq!(b.x, 50.0);

        let [a, _] = money_positions(2500.0);
        assert_eq!(a.x, 35.0);
    }

    #[test]
    fn text_is_plain_ascii() {
        let all = INTRO_PARAGRAPHS
            .iter()
            .chain([&SCENARIO_PROMPT, &GAME_INSTRUCTIONS]);
        for text in all {
            assert!(text.is_ascii(), "{text}");
        }
    }

    #[test]
    fn game_over_reports_the_count() {
        assert_eq!(game_over(10), "Game Over! You shot down 10 planes.");
    }

    #[test]
    fn markers_sit_inside_view_box() {
        for [x, y] in SOLDIERS.iter().chain(POTATOES.iter()).chain(BORDER.iter()) {
            assert!((0.0..=100.0).contains(x) && (0.0..=70.0).contains(y));
        }
    }
}
