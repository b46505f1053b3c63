use crate::chess::{Board, Color, IllegalMove, Move, Outcome, Setup};
use derive_more::{Display, Error, From};
use tracing::instrument;

/// The reason why a [`Move`] was rejected by the [`Game`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[error(ignore)]
pub enum InvalidAction {
    #[display(fmt = "the board has not been set up yet")]
    #[from(ignore)]
    NotInitialized,

    #[display(fmt = "the game has already ended, {}", _0)]
    GameHasEnded(Outcome),

    #[display(fmt = "it's the turn of the {} player", _0)]
    #[from(ignore)]
    TurnOfTheOpponent(Color),

    #[display(fmt = "{}", _0)]
    PlayerAttemptedIllegalMove(IllegalMove),
}

/// The score of each side.
#[derive(Debug, Display, Copy, Clone, PartialEq)]
#[display(fmt = "white: {}, black: {}", white, black)]
pub struct Scoreboard {
    pub white: f64,
    pub black: f64,
}

/// A game session that alternates turns between the two sides.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Option<Board>,
    turn: Color,
    outcome: Option<Outcome>,
}

impl Default for Game {
    fn default() -> Self {
        Game {
            board: None,
            turn: Color::White,
            outcome: None,
        }
    }
}

impl Game {
    /// Sets up the board, discarding any game in progress.
    ///
    /// The white side always moves first.
    #[instrument(level = "debug", skip(self, setup))]
    pub fn setup<S: Setup>(&mut self, setup: &S) {
        *self = Game {
            board: Some(Board::new(setup.placement())),
            turn: Color::White,
            outcome: None,
        };
    }

    /// The side whose turn it is.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The current board, if it has been set up.
    pub fn board(&self) -> Result<&Board, InvalidAction> {
        self.board.as_ref().ok_or(InvalidAction::NotInitialized)
    }

    /// The outcome of the game, if it has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The current score of both sides.
    pub fn score(&self) -> Result<Scoreboard, InvalidAction> {
        let board = self.board()?;
        Ok(Scoreboard {
            white: board.score(Color::White),
            black: board.score(Color::Black),
        })
    }

    /// Plays a [`Move`] on behalf of the side whose turn it is.
    ///
    /// The turn only passes to the opponent if the move is accepted.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn play(&mut self, m: Move) -> Result<Option<Outcome>, InvalidAction> {
        if let Some(o) = self.outcome {
            return Err(InvalidAction::GameHasEnded(o));
        }

        let turn = self.turn;
        let board = self.board.as_mut().ok_or(InvalidAction::NotInitialized)?;

        if board[m.whence()].is_some_and(|p| p.color() != turn) {
            return Err(InvalidAction::TurnOfTheOpponent(turn));
        }

        let outcome = board.play(m)?;
        self.outcome = outcome;
        self.turn = !turn;

        Ok(outcome)
    }
}
