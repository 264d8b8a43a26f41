//! Interactive step-driven gameplay.
//!
//! Drives one [`GameEngine`] game by calling `next_step()` once per Enter
//! keypress, printing each snapshot as a single line. With `--auto` the loop
//! runs without prompting, which is also the mode used by tests.

use std::io::{BufRead, Write};

use war_engine::engine::{EngineConfig, GameEngine};

use crate::error::CliError;
use crate::io_utils::read_stdin_line;
use crate::ui;

/// Handle the play command: one game, one visible step at a time.
///
/// Pacing and input belong here, never to the engine: the loop decides when
/// the next transition happens and simply renders what the engine reports.
pub fn handle_play_command(
    seed: Option<u64>,
    war_down: i64,
    auto: bool,
    max_steps: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let config = match EngineConfig::from_raw(war_down, Some(seed)) {
        Ok(config) => config,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    writeln!(
        out,
        "play: seed={} war_down={}",
        seed, config.war_face_down_count
    )?;

    let mut engine = GameEngine::new(config);
    engine.reset_game();

    let mut steps = 0u32;
    loop {
        if steps >= max_steps {
            writeln!(out, "Aborted after {} steps (game unfinished).", steps)?;
            break;
        }
        if !auto {
            write!(out, "[Enter] next step, q quits: ")?;
            out.flush()?;
            match read_stdin_line(stdin) {
                None => {
                    writeln!(out, "Quit.")?;
                    break;
                }
                Some(input)
                    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") =>
                {
                    writeln!(out, "Quit.")?;
                    break;
                }
                Some(_) => {}
            }
        }

        let step = engine.next_step();
        steps += 1;
        writeln!(out, "{}", ui::format_step(&step))?;
        if step.game_over {
            let verdict = step.winner.map(|w| w.as_str()).unwrap_or("none");
            writeln!(out, "Winner: {}", verdict)?;
            break;
        }
    }

    let (player, cpu) = engine.get_scores();
    writeln!(out, "Scores: {}={} {}={}", engine.player().name(), player, engine.cpu().name(), cpu)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn auto_mode_runs_a_seeded_game() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result = handle_play_command(
            Some(42),
            3,
            true,
            10_000,
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("play: seed=42 war_down=3"));
        assert!(output.contains("[draw]"));
        assert!(output.contains("Scores:"));
    }

    #[test]
    fn negative_war_down_is_a_config_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result =
            handle_play_command(Some(1), -1, true, 10, &mut out, &mut err, &mut input);
        assert!(matches!(result, Err(CliError::Config(_))));

        let errors = String::from_utf8(err).unwrap();
        assert!(errors.contains("Error:"));
    }

    #[test]
    fn interactive_mode_quits_on_q() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"q\n");

        let result = handle_play_command(
            Some(7),
            3,
            false,
            10_000,
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Quit."));
        assert!(output.contains("Scores:"));
    }

    #[test]
    fn interactive_mode_quits_at_eof() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result = handle_play_command(
            Some(7),
            3,
            false,
            10_000,
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Quit."));
    }

    #[test]
    fn interactive_mode_steps_on_enter() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"\nq\n");

        let result = handle_play_command(
            Some(7),
            3,
            false,
            10_000,
            &mut out,
            &mut err,
            &mut input,
        );
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[draw]"), "first Enter performs the draw step");
        assert!(output.contains("Quit."));
    }

    #[test]
    fn step_cap_reports_unfinished_game() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(b"");

        let result =
            handle_play_command(Some(42), 3, true, 3, &mut out, &mut err, &mut input);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Aborted after 3 steps"));
    }
}
