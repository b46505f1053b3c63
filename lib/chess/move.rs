use crate::chess::{ParseSquareError, Square};
use derive_more::{Display, Error, From};
use std::{fmt, str::FromStr};

/// A chess move in [pure coordinate notation].
///
/// [pure coordinate notation]: https://www.chessprogramming.org/Algebraic_Chess_Notation#Pure_coordinate_notation
#[derive(Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl Move {
    /// The source [`Square`].
    #[inline(always)]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The destination [`Square`].
    #[inline(always)]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, {}", _0)]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move, expected a pair of squares")]
    #[from(ignore)]
    InvalidSyntax,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(2).map_or_else(|| s.len(), |(i, _)| i);
        if i == s.len() {
            return Err(ParseMoveError::InvalidSyntax);
        }

        Ok(Move(s[..i].parse()?, s[i..].parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_has_a_source_square(m: Move) {
        assert_eq!(m.whence(), m.0);
    }

    #[proptest]
    fn move_has_a_destination_square(m: Move) {
        assert_eq!(m.whither(), m.1);
    }

    #[proptest]
    fn move_is_printed_as_a_pair_of_squares(m: Move) {
        assert_eq!(m.to_string(), format!("{}{}", m.whence(), m.whither()));
    }

    #[proptest]
    fn parsing_printed_move_is_an_identity(m: Move) {
        assert_eq!(m.to_string().parse(), Ok(m));
    }

    #[proptest]
    fn parsing_move_fails_if_source_square_is_invalid(
        #[strategy("[i-z][1-8]")] whence: String,
        whither: Square,
    ) {
        assert!(matches!(
            [whence, whither.to_string()].concat().parse::<Move>(),
            Err(ParseMoveError::InvalidSquare(_))
        ));
    }

    #[proptest]
    fn parsing_move_fails_if_destination_square_is_invalid(
        whence: Square,
        #[strategy("[a-h][09]")] whither: String,
    ) {
        assert!(matches!(
            [whence.to_string(), whither].concat().parse::<Move>(),
            Err(ParseMoveError::InvalidSquare(_))
        ));
    }

    #[proptest]
    fn parsing_move_fails_if_shorter_than_three_characters(#[strategy(".{0,2}")] s: String) {
        assert_eq!(s.parse::<Move>(), Err(ParseMoveError::InvalidSyntax));
    }
}
