use crate::chess::Color;
use derive_more::Display;

/// One of the possible outcomes of a chess game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Outcome {
    /// The king of the opponent was captured by the given side.
    #[display(fmt = "the {} player captured the king", _0)]
    KingCaptured(Color),
}

impl Outcome {
    /// The winning side.
    pub fn winner(&self) -> Color {
        match *self {
            Outcome::KingCaptured(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn side_that_captures_the_king_wins(c: Color) {
        assert_eq!(Outcome::KingCaptured(c).winner(), c);
    }

    #[proptest]
    fn outcome_names_the_winner(c: Color) {
        assert!(Outcome::KingCaptured(c).to_string().contains(&c.to_string()));
    }
}
