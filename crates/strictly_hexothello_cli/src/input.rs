//! Parsing of console commands.

use derive_more::{Display, Error};
use strictly_hexothello::Cell;

/// A line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a piece at axial `(q, r)`.
    Place(Cell),
    /// Take back the last move.
    Undo,
    /// Abandon the game.
    Quit,
}

/// The line could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not a command and not two integers.
    #[display("expected two integers separated by a space, got {input:?}")]
    Malformed {
        /// The offending line, trimmed.
        input: String,
    },
}

/// Parses `q r`, `undo` or `quit`.
pub fn parse(line: &str) -> Result<Input, InputError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "undo" | "u" => return Ok(Input::Undo),
        "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let malformed = || InputError::Malformed {
        input: trimmed.to_string(),
    };
    let mut parts = trimmed.split_whitespace();
    let (Some(q), Some(r), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let q = q.parse::<i32>().map_err(|_| malformed())?;
    let r = r.parse::<i32>().map_err(|_| malformed())?;
    Ok(Input::Place(Cell::new(q, r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        assert_eq!(parse("0 -3"), Ok(Input::Place(Cell::new(0, -3))));
        assert_eq!(parse("  4   -1 \n"), Ok(Input::Place(Cell::new(4, -1))));
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse("undo"), Ok(Input::Undo));
        assert_eq!(parse("QUIT"), Ok(Input::Quit));
    }

    #[test]
    fn test_malformed() {
        for line in ["", "3", "1 2 3", "a b", "1,2"] {
            assert!(matches!(parse(line), Err(InputError::Malformed { .. })), "{line:?}");
        }
    }
}
