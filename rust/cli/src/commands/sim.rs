//! Batch simulation with aggregate reporting and optional JSONL records.

use std::io::Write;

use chrono::Utc;
use war_engine::engine::{EngineConfig, GameEngine, Winner};
use war_engine::logger::{GameLogger, GameRecord};

use crate::error::CliError;
use crate::ui;

/// Handle the sim command: run N games on one engine, resetting between
/// games, and report the win distribution. With an output path, every game
/// is appended as one JSONL [`GameRecord`].
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    war_down: i64,
    output: Option<String>,
    max_steps: u32,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let config = match EngineConfig::from_raw(war_down, Some(seed)) {
        Ok(config) => config,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let mut logger = match &output {
        Some(path) => {
            let date = Utc::now().format("%Y%m%d").to_string();
            Some(GameLogger::create(path, &date)?)
        }
        None => None,
    };

    writeln!(
        out,
        "sim: games={} seed={} war_down={}",
        games, seed, config.war_face_down_count
    )?;

    let mut engine = GameEngine::new(config);
    let mut player_wins = 0u32;
    let mut cpu_wins = 0u32;
    let mut no_winner = 0u32;
    let mut unfinished = 0u32;
    let mut total_steps = 0u64;

    for _ in 0..games {
        engine.reset_game();

        let mut steps = Vec::new();
        let mut finished = false;
        for _ in 0..max_steps {
            let step = engine.next_step();
            let done = step.game_over;
            steps.push(step);
            if done {
                finished = true;
                break;
            }
        }
        total_steps += steps.len() as u64;

        let winner = if finished {
            steps.last().and_then(|s| s.winner)
        } else {
            None
        };
        if !finished {
            unfinished += 1;
        } else {
            match winner {
                Some(Winner::Player) => player_wins += 1,
                Some(Winner::Cpu) => cpu_wins += 1,
                None => no_winner += 1,
            }
        }

        if let Some(logger) = logger.as_mut() {
            let (player_cards, cpu_cards) = engine.get_scores();
            let record = GameRecord {
                game_id: logger.next_id(),
                seed: Some(seed),
                war_face_down_count: config.war_face_down_count,
                steps,
                winner,
                player_cards,
                cpu_cards,
                ts: None,
                meta: None,
            };
            logger.write(&record)?;
        }
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "Player wins: {}", player_wins)?;
    writeln!(out, "CPU wins: {}", cpu_wins)?;
    writeln!(out, "No winner: {}", no_winner)?;
    if unfinished > 0 {
        writeln!(out, "Unfinished (step cap {}): {}", max_steps, unfinished)?;
    }
    writeln!(
        out,
        "Mean steps per game: {:.1}",
        total_steps as f64 / games as f64
    )?;
    Ok(())
}
