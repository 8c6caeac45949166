#![cfg(feature = "std")]

//! Terminal driver: prompts, board output and the turn loop.

use std::io::{BufRead, Write};

use anyhow::Context;
use log::{debug, info};
use rand::Rng;

use crate::{
    common::FireOutcome,
    game::{Game, GameSummary, Turn},
    input::{parse_board_size, parse_command},
};

pub const START_MESSAGE: &str = "Ready to play";
pub const ENTER_SIZE: &str = "enter board size: ";
pub const ENTER_COORDINATES: &str = "enter coordinates: ";
pub const INVALID_MOVE: &str = "Invalid move, try again";
pub const GAME_OVER: &str = "Game over";

/// Run one game over `input` / `output`.
///
/// The board size is read from `input` unless `size` is given. Setup
/// failures are returned before any board is shown. End of input while
/// playing counts as the exit command.
pub fn play<I, O, R>(
    input: &mut I,
    output: &mut O,
    rng: &mut R,
    size: Option<usize>,
) -> anyhow::Result<GameSummary>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(output, "{}", START_MESSAGE)?;
    let size = match size {
        Some(size) => size,
        None => {
            write!(output, "{}", ENTER_SIZE)?;
            output.flush()?;
            let line = read_line(input)?.unwrap_or_default();
            parse_board_size(&line)?
        }
    };
    let mut game = Game::setup(size, rng).context("failed to set up the board")?;
    write!(output, "{}", game.render())?;

    while !game.is_over() {
        write!(output, "{}", ENTER_COORDINATES)?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            game.quit();
            break;
        };
        let command = match parse_command(&line, size) {
            Ok(command) => command,
            Err(e) => {
                debug!("rejected input {:?}: {}", line.trim(), e);
                writeln!(output, "{}", INVALID_MOVE)?;
                continue;
            }
        };
        match game.apply(command)? {
            Turn::Fired(outcome) => {
                writeln!(output, "{}", outcome.message())?;
                if let FireOutcome::Sunk(def) = outcome {
                    info!("sunk the {}", def.name());
                }
                write!(output, "{}", game.render())?;
            }
            Turn::Exited => break,
        }
    }
    writeln!(output, "{}", GAME_OVER)?;
    output.flush()?;
    Ok(game.summary())
}

/// Next line of input, or `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced so the line is rejected by the
/// parser instead of ending the game.
fn read_line<I: BufRead>(input: &mut I) -> anyhow::Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
}
