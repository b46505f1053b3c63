use crate::chess::Placement;

/// Trait for types that supply the initial [`Placement`] of a game.
#[cfg_attr(test, mockall::automock)]
pub trait Setup {
    /// The [`Placement`] a new game starts from.
    fn placement(&self) -> Placement;
}

impl Setup for Placement {
    #[inline(always)]
    fn placement(&self) -> Placement {
        *self
    }
}
