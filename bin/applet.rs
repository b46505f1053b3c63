use anyhow::Error as Anyhow;
use clap::Subcommand;
use derive_more::From;

mod play;
mod reach;

#[derive(Debug, From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Reach(reach::Reach),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Reach(a) => a.execute(),
        }
    }
}
