use crate::{command::Command, config::Config, io::Io};
use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Board, Game};
use std::io::{stdin, stdout, ErrorKind, Read, Write};
use tracing::{info, instrument, warn};

/// Plays a game of chess on the terminal.
///
/// Commands are read from the standard input, one per line:
/// `start`, `move <from> <to>`, `status` and `end`.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The game configuration in RON notation.
    #[clap(short, long, default_value_t)]
    config: Config,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        self.run(&mut Io::new(stdout(), stdin()))
    }

    fn render<W: Write, R: Read>(&self, io: &mut Io<W, R>, board: &Board) -> Result<(), Anyhow> {
        if self.config.figurines {
            io.send(format_args!("{:#}", board))?;
        } else {
            io.send(board)?;
        }

        Ok(())
    }

    fn run<W: Write, R: Read>(&self, io: &mut Io<W, R>) -> Result<(), Anyhow> {
        let mut game = Game::default();

        loop {
            io.flush()?;

            let line = match io.recv() {
                Ok(line) => line,
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break Ok(()),
                Err(e) => break Err(e.into()),
            };

            if line.trim().is_empty() {
                continue;
            }

            match line.parse() {
                Err(e) => warn!("{}", e),
                Ok(Command::End) => break Ok(()),

                Ok(Command::Start) => {
                    game.setup(&self.config.setup);
                    self.render(io, game.board()?)?;
                }

                Ok(Command::Status) => match game.score() {
                    Ok(score) => io.send(score)?,
                    Err(e) => warn!("{}", e),
                },

                Ok(Command::Move(m)) => match game.play(m) {
                    Ok(None) => self.render(io, game.board()?)?,
                    Ok(Some(outcome)) => {
                        info!(
                            %outcome,
                            winner = %outcome.winner(),
                            score = %game.score()?,
                        );
                        io.send(outcome)?;
                    }
                    Err(e) => warn!("{}", e),
                },
            }
        }
    }
}
