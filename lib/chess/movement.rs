use crate::chess::{Bitboard, Color, Perspective, Rank, Square};

/// How a piece moves across the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Movement {
    /// Steps repeatedly along each direction, up to and including the first occupied square.
    Slide(&'static [(i8, i8)]),

    /// Jumps once by each offset, regardless of what lies in between.
    Jump(&'static [(i8, i8)]),

    /// Advances one square forward, or two from the starting rank, onto empty squares only,
    /// and captures one square diagonally forward.
    March,
}

impl Movement {
    /// Steps along files and ranks.
    pub const ORTHOGONAL: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

    /// Steps along diagonals.
    pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

    /// Steps along files, ranks and diagonals.
    pub const OMNIDIRECTIONAL: [(i8, i8); 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];

    /// The L-shaped leaps of the knight.
    pub const KNIGHT: [(i8, i8); 8] = [
        (1, 2),
        (2, 1),
        (2, -1),
        (1, -2),
        (-1, -2),
        (-2, -1),
        (-2, 1),
        (-1, 2),
    ];

    /// The set of squares reachable from `whence` by a piece of the given [`Color`].
    ///
    /// Only slides and pawn marches are blocked by `occupied` squares,
    /// whereas `theirs` determines where pawns may capture.
    /// Whether a reachable square may actually be moved into is up to the caller,
    /// this set includes occupied squares irrespective of who occupies them.
    pub fn reach(
        &self,
        side: Color,
        whence: Square,
        occupied: Bitboard,
        theirs: Bitboard,
    ) -> Bitboard {
        match *self {
            Movement::Slide(steps) => steps.iter().fold(Bitboard::empty(), |mut bb, &(df, dr)| {
                let mut sq = whence;
                while let Some(next) = sq.offset(df, dr) {
                    bb = bb.with(next);
                    if occupied.contains(next) {
                        break;
                    }

                    sq = next;
                }

                bb
            }),

            Movement::Jump(steps) => steps
                .iter()
                .filter_map(|&(df, dr)| whence.offset(df, dr))
                .collect(),

            Movement::March => {
                let dr = match side {
                    Color::White => 1,
                    Color::Black => -1,
                };

                let mut bb = Bitboard::empty();
                if let Some(sq) = whence.offset(0, dr).filter(|&sq| !occupied.contains(sq)) {
                    bb = bb.with(sq);
                    if whence.rank() == Rank::Second.perspective(side) {
                        if let Some(sq) = sq.offset(0, dr).filter(|&sq| !occupied.contains(sq)) {
                            bb = bb.with(sq);
                        }
                    }
                }

                for df in [-1, 1] {
                    if let Some(sq) = whence.offset(df, dr).filter(|&sq| theirs.contains(sq)) {
                        bb = bb.with(sq);
                    }
                }

                bb
            }
        }
    }
}
