use crate::chess::{Bitboard, Color, File, Perspective, Piece, Rank, Role, Square};
use crate::util::Integer;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// The piece placement on the board.
///
/// Every one of the 64 squares either holds a single [`Piece`] or is empty.
/// This type does not validate whether the placement it holds is valid
/// according to any set of chess rules.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct Placement([Option<Piece>; 64]);

// Deriving Arbitrary for large arrays overflows the stack.
#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Placement {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Placement>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{collection::vec, prelude::*};

        vec(any::<Option<Piece>>(), 64)
            .prop_map(|v| {
                let mut placement = Placement::empty();
                placement.0.iter_mut().zip(v).for_each(|(s, p)| *s = p);
                placement
            })
            .boxed()
    }
}

/// The standard starting position.
impl Default for Placement {
    fn default() -> Self {
        use Role::*;

        let mut placement = Placement::empty();
        let back = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for (f, r) in File::iter().zip(back) {
            for c in Color::iter() {
                let first = Rank::First.perspective(c);
                let second = Rank::Second.perspective(c);
                placement[Square::new(f, first)] = Some(Piece(c, r));
                placement[Square::new(f, second)] = Some(Piece(c, Pawn));
            }
        }

        placement
    }
}

impl Placement {
    /// A placement without any pieces.
    #[inline(always)]
    pub fn empty() -> Self {
        Placement([None; 64])
    }

    /// An iterator over all occupied squares and the pieces on them.
    #[inline(always)]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(|sq| Some((sq, self[sq]?)))
    }

    /// [`Square`]s occupied.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.iter().map(|(sq, _)| sq).collect()
    }

    /// [`Square`]s occupied by a [`Color`].
    #[inline(always)]
    pub fn by_color(&self, c: Color) -> Bitboard {
        self.iter()
            .filter(|(_, p)| p.color() == c)
            .map(|(sq, _)| sq)
            .collect()
    }

    /// [`Square`]s occupied by a [`Piece`].
    #[inline(always)]
    pub fn by_piece(&self, p: Piece) -> Bitboard {
        self.iter()
            .filter(|&(_, q)| p == q)
            .map(|(sq, _)| sq)
            .collect()
    }
}

/// Retrieves the [`Piece`] at a given [`Square`], if any.
impl Index<Square> for Placement {
    type Output = Option<Piece>;

    #[inline(always)]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[sq.get() as usize]
    }
}

impl IndexMut<Square> for Placement {
    #[inline(always)]
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[sq.get() as usize]
    }
}

/// Renders the placement as the first field of a [FEN] record.
///
/// [FEN]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut skip = 0;
            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            write!(f, "{}", skip)?;
                            skip = 0;
                        }

                        write!(f, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                write!(f, "{}", skip)?;
            }

            if rank > Rank::First {
                f.write_char('/')?;
            }
        }

        Ok(())
    }
}

/// The reason why parsing [`Placement`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "failed to parse piece placement")]
pub struct ParsePlacementError;

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ranks: Vec<_> = s.split('/').rev().collect();
        let ranks @ [_1, _2, _3, _4, _5, _6, _7, _8] = &ranks[..] else {
            return Err(ParsePlacementError);
        };

        let mut placement = Placement::empty();
        for (rank, segment) in Rank::iter().zip(ranks) {
            let mut file = 0;
            for c in segment.chars() {
                let mut buffer = [0; 4];

                if file >= 8 {
                    return Err(ParsePlacementError);
                } else if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as i8;
                } else if let Ok(p) = Piece::from_str(c.encode_utf8(&mut buffer)) {
                    placement[Square::new(File::new(file), rank)] = Some(p);
                    file += 1;
                } else {
                    return Err(ParsePlacementError);
                }
            }

            if file != 8 {
                return Err(ParsePlacementError);
            }
        }

        Ok(placement)
    }
}

impl From<Placement> for String {
    fn from(p: Placement) -> Self {
        p.to_string()
    }
}

impl TryFrom<String> for Placement {
    type Error = ParsePlacementError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
