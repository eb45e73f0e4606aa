//! Console front end.
//!
//! Reads moves such as `a3,b4` line by line, feeds them to a [`Game`] and
//! reports the result. Bad input is answered and re-prompted in a loop.

use std::io::{self, BufRead, Write};

use crate::board::{Color, GameResult};
use crate::engine::{Game, Phase, PlayOutcome, TurnStatus};

pub mod command;
pub mod logger;
pub mod options;

pub use command::{parse_command, parse_move, Command};
pub use options::{Args, GameOptions, DEBUG_ENV};

const FORMAT_HINT: &str = "Please input your move in the correct format, e.g., 'a3,b4'.";

const HELP: &str = "Commands:
  <from>,<to>  move a piece, e.g. a3,b4
  moves        list the moves you can play
  draw         offer your opponent a draw
  help, ?      show this list
  quit, exit   leave the game";

/// How a console session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won(Color),
    /// Both players agreed to a draw
    Draw,
    Quit,
    /// Input ran out before the game was decided
    EndOfInput,
}

/// Play a new game over the given input and output.
pub fn run_game_loop<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &GameOptions,
) -> io::Result<SessionEnd> {
    let mut game = Game::new();
    run_session(&mut game, input, output, options)
}

/// Drive `game` until it is decided or the players stop.
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    output: &mut W,
    options: &GameOptions,
) -> io::Result<SessionEnd> {
    loop {
        if let GameResult::Win(winner) = game.result() {
            writeln!(output, "{}", game.board())?;
            writeln!(output, "{winner} won!")?;
            return Ok(SessionEnd::Won(winner));
        }

        if options.show_board {
            writeln!(output, "{}", game.board())?;
        }
        if let Phase::Continuing { from, .. } = game.phase() {
            writeln!(output, "You must continue jumping from {from}!")?;
        }
        writeln!(
            output,
            "{} moves, declare your move (e.g., a3,b4):",
            game.side_to_move()
        )?;

        let Some(line) = read_line(input)? else {
            return Ok(SessionEnd::EndOfInput);
        };

        match parse_command(&line) {
            Err(err) => {
                writeln!(output, "{err}")?;
                writeln!(output, "{FORMAT_HINT}")?;
            }
            Ok(Command::Quit) => return Ok(SessionEnd::Quit),
            Ok(Command::Help) => writeln!(output, "{HELP}")?,
            Ok(Command::Moves) => {
                let moves: Vec<String> = game.legal_moves().iter().map(ToString::to_string).collect();
                writeln!(output, "Available moves: {}", moves.join(" "))?;
            }
            Ok(Command::Draw) => {
                if offer_draw(input, output)? {
                    writeln!(output, "Game ended in a draw.")?;
                    return Ok(SessionEnd::Draw);
                }
            }
            Ok(Command::Move(mv)) => {
                log::debug!("move attempted: {mv}");
                match game.play(mv) {
                    Ok(outcome) => report(output, &outcome)?,
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
        }
    }
}

/// Ask the opponent to accept a draw. Repeats until `y` or `n`; end of
/// input counts as a refusal.
fn offer_draw<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<bool> {
    writeln!(
        output,
        "Draw requested by player. Opponent, do you agree to a draw? (y/n)"
    )?;
    while let Some(answer) = read_line(input)? {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => {
                writeln!(output, "Draw declined.")?;
                return Ok(false);
            }
            _ => writeln!(output, "Invalid input. Please answer 'y' or 'n'.")?,
        }
    }
    Ok(false)
}

fn report<W: Write>(output: &mut W, outcome: &PlayOutcome) -> io::Result<()> {
    if let Some(captured) = outcome.captured {
        writeln!(output, "Captured the piece at {captured}.")?;
    }
    if outcome.promoted {
        writeln!(output, "Piece at {} promoted to King!", outcome.mv.to)?;
    }
    if let TurnStatus::MustContinue { jumps, .. } = &outcome.status {
        log::debug!("{} continuation(s) available", jumps.len());
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        Ok(None)
    } else {
        Ok(Some(line))
    }
}
