//! UI helper functions for terminal output formatting.

use std::io::Write;

use war_engine::cards::Card;
use war_engine::engine::StepResult;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Placeholder shown when a side has no face card on display.
pub fn card_label(card: Option<Card>) -> String {
    match card {
        Some(card) => card.to_string(),
        None => "--".to_string(),
    }
}

/// One-line rendering of a step snapshot for the terminal.
pub fn format_step(step: &StepResult) -> String {
    let mut line = format!(
        "[{}] You: {} CPU: {} pot={}",
        step.action.as_str(),
        card_label(step.player_card),
        card_label(step.cpu_card),
        step.pot_size
    );
    if step.player_down_count > 0 || step.cpu_down_count > 0 {
        line.push_str(&format!(
            " down={}/{}",
            step.player_down_count, step.cpu_down_count
        ));
    }
    line.push(' ');
    line.push_str(&step.message);
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use war_engine::engine::StepAction;

    fn step() -> StepResult {
        StepResult {
            action: StepAction::Draw,
            player_card: Some("7♦".parse().unwrap()),
            cpu_card: Some("3♣".parse().unwrap()),
            player_down_count: 0,
            cpu_down_count: 0,
            pot_size: 2,
            round_over: false,
            game_over: false,
            winner: None,
            message: "Draw.".to_string(),
        }
    }

    #[test]
    fn formats_a_draw_step() {
        assert_eq!(format_step(&step()), "[draw] You: 7♦ CPU: 3♣ pot=2 Draw.");
    }

    #[test]
    fn formats_face_down_counts_when_present() {
        let mut s = step();
        s.action = StepAction::WarDown;
        s.player_down_count = 3;
        s.cpu_down_count = 2;
        s.pot_size = 7;
        s.message = "War: face-down cards placed.".to_string();
        assert_eq!(
            format_step(&s),
            "[war_down] You: 7♦ CPU: 3♣ pot=7 down=3/2 War: face-down cards placed."
        );
    }

    #[test]
    fn missing_faces_render_as_placeholders() {
        let mut s = step();
        s.player_card = None;
        s.cpu_card = None;
        assert_eq!(format_step(&s), "[draw] You: -- CPU: -- pot=2 Draw.");
    }
}
