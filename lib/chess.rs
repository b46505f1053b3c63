mod bitboard;
mod board;
mod color;
mod file;
mod game;
mod r#move;
mod movement;
mod outcome;
mod perspective;
mod piece;
mod placement;
mod rank;
mod role;
mod setup;
mod square;

pub use bitboard::*;
pub use board::*;
pub use color::*;
pub use file::*;
pub use game::*;
pub use movement::*;
pub use outcome::*;
pub use perspective::*;
pub use piece::*;
pub use placement::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use setup::*;
pub use square::*;
