//! Aggregate statistics from JSONL game record files.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use war_engine::engine::Winner;
use war_engine::logger::GameRecord;

use crate::error::CliError;
use crate::ui;

/// Handle the stats command: read records written by `sim --output` and
/// print the win distribution. Corrupted lines are skipped with a warning
/// rather than aborting the whole report.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let file = match File::open(&input) {
        Ok(f) => f,
        Err(e) => {
            ui::write_error(err, &format!("cannot open {}: {}", input, e))?;
            return Err(CliError::Io(e));
        }
    };
    let reader = BufReader::new(file);

    let mut total = 0u32;
    let mut player_wins = 0u32;
    let mut cpu_wins = 0u32;
    let mut no_winner = 0u32;
    let mut skipped = 0u32;

    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<GameRecord>(&line) {
            Ok(record) => {
                total += 1;
                match record.winner {
                    Some(Winner::Player) => player_wins += 1,
                    Some(Winner::Cpu) => cpu_wins += 1,
                    None => no_winner += 1,
                }
            }
            Err(e) => {
                skipped += 1;
                ui::display_warning(err, &format!("skipping corrupted record: {}", e))?;
            }
        }
    }

    writeln!(out, "Games: {}", total)?;
    writeln!(out, "Player wins: {}", player_wins)?;
    writeln!(out, "CPU wins: {}", cpu_wins)?;
    writeln!(out, "No winner: {}", no_winner)?;
    if skipped > 0 {
        writeln!(out, "Skipped records: {}", skipped)?;
    }
    Ok(())
}
