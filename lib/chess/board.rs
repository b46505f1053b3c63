use crate::chess::{Bitboard, Color, File, Move, Outcome, Piece, Placement, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Deref, Display, Error};
use std::fmt::{self, Write};
use std::ops::Index;
use tracing::{debug, instrument};

/// Represents an illegal [`Move`] on a given [`Board`].
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum IllegalMove {
    #[display(fmt = "there is no piece on square `{}`", _0)]
    EmptySquare(#[error(not(source))] Square),

    #[display(fmt = "move `{}` does not follow the movement of the piece", _0)]
    Unreachable(#[error(not(source))] Move),

    #[display(fmt = "move `{}` would capture a piece of the same color", _0)]
    SelfCapture(#[error(not(source))] Move),
}

/// The chess board.
///
/// Holds the [`Placement`] of pieces along with the material each side has lost so far.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Board {
    #[deref]
    placement: Placement,
    lost: [f64; 2],
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        any::<Placement>().prop_map(Board::new).boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Placement::default())
    }
}

impl Board {
    /// The material value of a full side.
    ///
    /// Scores are computed relative to this total rather than from the pieces on the board.
    pub const MATERIAL: f64 = 38.;

    /// The penalty for each pawn that shares its file with another pawn of the same color.
    pub const DOUBLED_PAWN_PENALTY: f64 = 0.5;

    /// Sets up a board with the given [`Placement`] and no material lost.
    pub fn new(placement: Placement) -> Self {
        Board {
            placement,
            lost: [0.; 2],
        }
    }

    /// A read-only view of the [`Placement`] of pieces.
    #[inline(always)]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// The material value a [`Color`] has lost to captures.
    #[inline(always)]
    pub fn lost(&self, side: Color) -> f64 {
        self.lost[side.get() as usize]
    }

    /// The score of a [`Color`].
    ///
    /// The full material value, minus what was lost to captures,
    /// minus a penalty for every pawn on a file with other pawns of the same color.
    pub fn score(&self, side: Color) -> f64 {
        let pawns = self.by_piece(Piece(side, Role::Pawn));
        let doubled: usize = File::iter()
            .map(|f| (pawns & f.bitboard()).len())
            .filter(|&n| n > 1)
            .sum();

        Self::MATERIAL - self.lost(side) - doubled as f64 * Self::DOUBLED_PAWN_PENALTY
    }

    /// The squares the piece on `whence` may move to, if any.
    pub fn destinations(&self, whence: Square) -> Bitboard {
        match self[whence] {
            None => Bitboard::empty(),
            Some(p) => p
                .reach(whence, self)
                .into_iter()
                .filter(|&sq| p.can_move(sq, self))
                .collect(),
        }
    }

    /// Plays a [`Move`] if legal, otherwise returns the reason why not.
    ///
    /// The board is left untouched if the move is rejected or if it captures a king,
    /// in which case the game is over and the [`Outcome`] is returned.
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn play(&mut self, m: Move) -> Result<Option<Outcome>, IllegalMove> {
        let (whence, whither) = (m.whence(), m.whither());
        let piece = self[whence].ok_or(IllegalMove::EmptySquare(whence))?;

        if !piece.reach(whence, self).contains(whither) {
            return Err(IllegalMove::Unreachable(m));
        } else if !piece.can_move(whither, self) {
            return Err(IllegalMove::SelfCapture(m));
        }

        if let Some(captured) = self[whither] {
            if captured.role() == Role::King {
                return Ok(Some(Outcome::KingCaptured(piece.color())));
            }

            debug!(%captured, square = %whither, "capture");
            self.lost[captured.color().get() as usize] += captured.value();
        }

        let promoted = piece.promote(whither);
        if promoted != piece {
            debug!(%piece, %promoted, square = %whither, "promotion");
        }

        self.placement[whither] = Some(promoted);
        self.placement[whence] = None;

        Ok(None)
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Board {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.placement[sq]
    }
}

/// Renders a diagram of the board, with figurines in alternate mode.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let files = |f: &mut fmt::Formatter<'_>| {
            f.write_str("   ")?;
            for file in File::iter() {
                write!(f, "  {} ", file)?;
            }

            f.write_char('\n')
        };

        files(f)?;
        writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    Some(p) if f.alternate() => write!(f, " {:#} |", p)?,
                    Some(p) => write!(f, " {} |", p)?,
                    None => f.write_str("   |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +---+---+---+---+---+---+---+---+")?;
        }

        files(f)
    }
}
