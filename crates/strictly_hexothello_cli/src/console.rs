//! Interactive hot-seat session.
//!
//! Reads one command per line and drives the engine. All rules live in
//! `strictly_hexothello`; this module only prompts, parses and prints.

use crate::input::{self, Input};
use crate::render::render;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use strictly_hexothello::{Cell, Game, Player};
use tracing::{debug, info, instrument};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Nobody can move any more.
    Finished,
    /// The player typed `quit`.
    Quit,
    /// Input ran out mid-game.
    InputClosed,
}

/// Runs the prompt loop until the game ends or input stops.
#[instrument(skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    game: &mut Game,
    input: R,
    out: &mut W,
) -> std::io::Result<SessionEnd> {
    let mut lines = input.lines();
    announce_skips(out, game.opening_skips())?;

    while !game.is_game_over() {
        writeln!(out, "{}", render(game.board()))?;
        let player = game.current_player();
        writeln!(out, "Player {player}'s turn")?;
        writeln!(out, "Available moves: {}", format_moves(&game.legal_moves()))?;
        write!(out, "Enter your move (q r), 'undo' or 'quit': ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("Input closed, leaving game unfinished");
            return Ok(SessionEnd::InputClosed);
        };
        let line = line?;

        match input::parse(&line) {
            Err(err) => {
                debug!(%err, "Unparseable input");
                writeln!(out, "Invalid input! {err}")?;
            }
            Ok(Input::Quit) => return Ok(SessionEnd::Quit),
            Ok(Input::Undo) => match game.undo() {
                Ok(()) => writeln!(out, "Move undone.")?,
                Err(err) => writeln!(out, "Cannot undo: {}", err.kind())?,
            },
            Ok(Input::Place(cell)) => match game.apply_move(cell) {
                Ok(report) => announce_skips(out, report.skipped())?,
                Err(err) => writeln!(out, "Invalid move! {}", err.kind())?,
            },
        }
    }

    writeln!(out, "{}", render(game.board()))?;
    writeln!(out, "Game over!")?;
    writeln!(out, "Final scores: {}", game.scores())?;
    if let Some(winner) = game.winner() {
        let leaders = game.scores().leaders();
        if leaders.len() > 1 {
            let names: Vec<String> = leaders.iter().map(Player::to_string).collect();
            writeln!(
                out,
                "Tie between {}; Player {winner} wins on turn order!",
                names.join(", ")
            )?;
        } else {
            writeln!(out, "The winner is Player {winner}!")?;
        }
    }
    Ok(SessionEnd::Finished)
}

/// Prints the legal moves for every player at the opening.
pub fn describe_opening<W: Write>(game: &Game, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", render(game.board()))?;
    writeln!(out, "Scores: {}", game.scores())?;
    for player in Player::ALL {
        writeln!(out, "{player}: {}", format_moves(&game.legal_moves_for(player)))?;
    }
    Ok(())
}

fn announce_skips<W: Write>(out: &mut W, skipped: &[Player]) -> std::io::Result<()> {
    for player in skipped {
        writeln!(out, "Player {player} has no valid moves and skips this turn.")?;
    }
    Ok(())
}

fn format_moves(moves: &BTreeSet<Cell>) -> String {
    if moves.is_empty() {
        return "none".to_string();
    }
    moves
        .iter()
        .map(|cell| format!("{} {}", cell.q, cell.r))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_hexothello::new_game;

    fn run(game: &mut Game, script: &str) -> (SessionEnd, String) {
        let mut out = Vec::new();
        let end = run_session(game, Cursor::new(script.to_string()), &mut out).expect("io");
        (end, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_move_and_undo() {
        let mut game = new_game(3, true).expect("standard game");
        let (end, text) = run(&mut game, "0 -3\nundo\nquit\n");

        assert_eq!(end, SessionEnd::Quit);
        assert!(text.contains("Player Black's turn"));
        assert!(text.contains("Player White's turn"));
        assert!(text.contains("Move undone."));
        assert_eq!(game.current_player(), Player::Black);
    }

    #[test]
    fn test_bad_input_keeps_prompting() {
        let mut game = new_game(3, false).expect("standard game");
        let (end, text) = run(&mut game, "hello\n-3 0\nundo\n");

        assert_eq!(end, SessionEnd::InputClosed);
        assert!(text.contains("Invalid input! expected two integers"));
        assert!(text.contains("Invalid move! Illegal move: Placing at (-3, 0) captures nothing"));
        assert!(text.contains("Cannot undo: History recording is disabled"));
        assert_eq!(game.scores().total(), 9);
    }

    #[test]
    fn test_opening_listing() {
        let game = new_game(3, false).expect("standard game");
        let mut out = Vec::new();
        describe_opening(&game, &mut out).expect("io");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("Black: 0 -3, 0 2, 2 -2, 2 0, 3 -2, 4 -1"));
    }
}
