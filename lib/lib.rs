/// Chess domain types.
pub mod chess;
/// Assorted utilities.
pub mod util;
