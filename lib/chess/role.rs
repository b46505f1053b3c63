use crate::chess::Movement;
use std::fmt::{self, Formatter, Write};

/// The type of a chess [`Piece`][`crate::chess::Piece`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(u8)]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    /// The material value of a piece of this role.
    ///
    /// The king is priceless, its capture ends the game.
    #[inline(always)]
    pub fn value(&self) -> f64 {
        match self {
            Role::Pawn => 1.,
            Role::Knight => 2.5,
            Role::Bishop => 3.,
            Role::Rook => 5.,
            Role::Queen => 9.,
            Role::King => 0.,
        }
    }

    /// How a piece of this role moves across the board.
    #[inline(always)]
    pub fn movement(&self) -> Movement {
        match self {
            Role::Pawn => Movement::March,
            Role::Knight => Movement::Jump(&Movement::KNIGHT),
            Role::Bishop => Movement::Slide(&Movement::DIAGONAL),
            Role::Rook => Movement::Slide(&Movement::ORTHOGONAL),
            Role::Queen => Movement::Slide(&Movement::OMNIDIRECTIONAL),
            Role::King => Movement::Jump(&Movement::OMNIDIRECTIONAL),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Pawn => f.write_char('p'),
            Role::Knight => f.write_char('n'),
            Role::Bishop => f.write_char('b'),
            Role::Rook => f.write_char('r'),
            Role::Queen => f.write_char('q'),
            Role::King => f.write_char('k'),
        }
    }
}
