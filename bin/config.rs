use derive_more::{Display, Error, From};
use lib::chess::Placement;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The reason why parsing the game configuration failed.
#[derive(Debug, Display, Eq, PartialEq, Error, From)]
#[display(fmt = "failed to parse game configuration")]
pub struct ParseConfigError(ron::de::SpannedError);

/// Runtime configuration for a game on the terminal.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The initial placement of pieces in FEN notation.
    pub setup: Placement,

    /// Whether to render pieces as figurines.
    pub figurines: bool,
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ron::ser::to_string(self).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for Config {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ron::de::from_str(s)?)
    }
}
