use crate::io::Io;
use anyhow::{Context, Error as Anyhow};
use clap::Parser;
use lib::chess::{Board, Placement, Square};
use std::io::{stdin, stdout, Read, Write};
use tracing::{info, instrument};

/// Lists the squares a piece may move to.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Reach {
    /// The piece placement in FEN notation.
    placement: Placement,

    /// The square the piece stands on.
    square: Square,
}

impl Reach {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.run(&mut Io::new(stdout(), stdin()))
    }

    fn run<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        let board = Board::new(self.placement);
        let piece = board[self.square]
            .with_context(|| format!("there is no piece on square `{}`", self.square))?;

        let destinations: Vec<_> = board
            .destinations(self.square)
            .into_iter()
            .map(|sq| sq.to_string())
            .collect();

        info!(%piece, square = %self.square, count = destinations.len());
        io.send(destinations.join(" "))?;
        io.flush()?;

        Ok(())
    }
}
