use crate::chess::{Bitboard, Board, Color, Role, Square};
use derive_more::{Display, Error};
use std::fmt::{self, Write};
use std::str::FromStr;

/// A chess [piece][`Role`] of a certain [`Color`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece(pub Color, pub Role);

impl Piece {
    /// This piece's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.0
    }

    /// This piece's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.1
    }

    /// This piece's material value.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        self.role().value()
    }

    /// The squares this piece can reach from `whence` on the given [`Board`].
    ///
    /// This follows the movement pattern alone,
    /// squares occupied by pieces of the same color may still be included.
    #[inline(always)]
    pub fn reach(&self, whence: Square, board: &Board) -> Bitboard {
        let theirs = board.by_color(!self.color());
        self.role()
            .movement()
            .reach(self.color(), whence, board.occupied(), theirs)
    }

    /// Whether this piece may land on `whither`, that is the square is either empty
    /// or occupied by a piece of the opposite color.
    #[inline(always)]
    pub fn can_move(&self, whither: Square, board: &Board) -> bool {
        board[whither].map_or(true, |p| p.color() != self.color())
    }

    /// The piece this one becomes upon landing on `whither`.
    #[inline(always)]
    pub fn promote(self, whither: Square) -> Self {
        match self {
            Piece(c, Role::Pawn) if whither.is_back_rank(c) => Piece(c, Role::Queen),
            p => p,
        }
    }

    fn figurine(&self) -> char {
        match self {
            Piece(Color::White, Role::Pawn) => '♙',
            Piece(Color::White, Role::Knight) => '♘',
            Piece(Color::White, Role::Bishop) => '♗',
            Piece(Color::White, Role::Rook) => '♖',
            Piece(Color::White, Role::Queen) => '♕',
            Piece(Color::White, Role::King) => '♔',
            Piece(Color::Black, Role::Pawn) => '♟',
            Piece(Color::Black, Role::Knight) => '♞',
            Piece(Color::Black, Role::Bishop) => '♝',
            Piece(Color::Black, Role::Rook) => '♜',
            Piece(Color::Black, Role::Queen) => '♛',
            Piece(Color::Black, Role::King) => '♚',
        }
    }
}

/// Renders the piece as a letter in [FEN] notation, or as a figurine in alternate mode.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_char(self.figurine())
        } else {
            match self.color() {
                Color::White => write!(f, "{}", self.role().to_string().to_uppercase()),
                Color::Black => write!(f, "{}", self.role()),
            }
        }
    }
}

/// The reason why parsing [`Piece`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece, expected one of `PNBRQK` or `pnbrqk`")]
pub struct ParsePieceError;

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Piece(Color::White, Role::Pawn)),
            "N" => Ok(Piece(Color::White, Role::Knight)),
            "B" => Ok(Piece(Color::White, Role::Bishop)),
            "R" => Ok(Piece(Color::White, Role::Rook)),
            "Q" => Ok(Piece(Color::White, Role::Queen)),
            "K" => Ok(Piece(Color::White, Role::King)),
            "p" => Ok(Piece(Color::Black, Role::Pawn)),
            "n" => Ok(Piece(Color::Black, Role::Knight)),
            "b" => Ok(Piece(Color::Black, Role::Bishop)),
            "r" => Ok(Piece(Color::Black, Role::Rook)),
            "q" => Ok(Piece(Color::Black, Role::Queen)),
            "k" => Ok(Piece(Color::Black, Role::King)),
            _ => Err(ParsePieceError),
        }
    }
}
