use arrayvec::ArrayVec;
use derive_more::{Display, Error, From};
use lib::chess::{Move, ParseMoveError, ParseSquareError};
use std::str::FromStr;

/// A command issued on the terminal.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Set up the board for a new game.
    #[display(fmt = "start")]
    Start,

    /// Move a piece on the board.
    #[display(fmt = "move {} {}", "_0.whence()", "_0.whither()")]
    Move(Move),

    /// Report the score of both sides.
    #[display(fmt = "status")]
    Status,

    /// Leave the game.
    #[display(fmt = "end")]
    End,
}

/// The reason why parsing a [`Command`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseCommandError {
    #[display(fmt = "unknown command `{}`", _0)]
    #[from(ignore)]
    Unknown(#[error(not(source))] String),

    #[display(fmt = "{}", _0)]
    InvalidSquare(ParseSquareError),

    #[display(fmt = "{}", _0)]
    InvalidMove(ParseMoveError),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let args: ArrayVec<&str, 3> = tokens.by_ref().take(3).collect();

        if tokens.next().is_some() {
            return Err(ParseCommandError::Unknown(s.trim().into()));
        }

        match args.as_slice() {
            ["start"] => Ok(Command::Start),
            ["status"] => Ok(Command::Status),
            ["end"] => Ok(Command::End),
            ["move", m] => Ok(Command::Move(m.parse()?)),
            ["move", wc, wt] => Ok(Command::Move(Move(wc.parse()?, wt.parse()?))),
            _ => Err(ParseCommandError::Unknown(s.trim().into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::Square;

    #[test]
    fn parses_commands_without_arguments() {
        assert_eq!("start".parse(), Ok(Command::Start));
        assert_eq!("status".parse(), Ok(Command::Status));
        assert_eq!("end".parse(), Ok(Command::End));
    }

    #[test]
    fn parses_move_from_pair_of_squares() {
        let m = Move(Square::E2, Square::E4);
        assert_eq!("move e2 e4".parse(), Ok(Command::Move(m)));
        assert_eq!("  move   e2 e4  ".parse(), Ok(Command::Move(m)));
    }

    #[test]
    fn parses_move_in_coordinate_notation() {
        let m = Move(Square::G1, Square::F3);
        assert_eq!("move g1f3".parse(), Ok(Command::Move(m)));
    }

    #[test]
    fn parsing_printed_command_is_an_identity() {
        for c in [
            Command::Start,
            Command::Move(Move(Square::B8, Square::C6)),
            Command::Status,
            Command::End,
        ] {
            assert_eq!(c.to_string().parse(), Ok(c));
        }
    }

    #[test]
    fn parsing_move_fails_for_invalid_square() {
        assert!(matches!(
            "move e9 e4".parse::<Command>(),
            Err(ParseCommandError::InvalidSquare(_))
        ));

        assert!(matches!(
            "move z2 e4".parse::<Command>(),
            Err(ParseCommandError::InvalidSquare(_))
        ));
    }

    #[test]
    fn parsing_fails_for_unknown_commands() {
        for s in ["", "quit", "move", "start now", "move e2 e4 e5"] {
            assert_eq!(
                s.parse::<Command>(),
                Err(ParseCommandError::Unknown(s.trim().into()))
            );
        }
    }
}
