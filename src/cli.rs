use crate::config::{Config, ConfigError};
use lexopt::prelude::*;
use std::num::NonZeroU64;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub(crate) static USAGE: &str = "\
Usage: torsnake [options]

Snake on a wraparound grid.  Steer with the arrow keys, WASD, or HJKL; quit
with q.

Options:
  -c, --config <PATH>   Read configuration from <PATH>
  -d, --delay <MS>      Milliseconds between moves [default: 100]
      --seed <N>        Seed the apple placement for a reproducible game
  -h, --help            Show this help and exit
  -V, --version         Show the program version and exit
";

/// What the command line asked the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Cli {
    Run(RunArgs),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunArgs {
    pub(crate) config: Option<PathBuf>,
    pub(crate) delay: Option<NonZeroU64>,
    pub(crate) seed: Option<u64>,
}

impl Cli {
    pub(crate) fn from_parser(mut parser: lexopt::Parser) -> Result<Cli, UsageError> {
        let mut args = RunArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Short('d') | Long("delay") => args.delay = Some(parser.value()?.parse()?),
                Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Short('h') | Long("help") => return Ok(Cli::Help),
                Short('V') | Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected().into()),
            }
        }
        Ok(Cli::Run(args))
    }
}

impl RunArgs {
    /// Load the configuration file (the one given on the command line, or
    /// else the default one if it exists) and apply command-line overrides
    pub(crate) fn config(&self) -> Result<Config, ConfigError> {
        let mut config = match self.config {
            Some(ref path) => Config::load(path, false)?,
            None => Config::load(&Config::default_path()?, true)?,
        };
        if let Some(delay) = self.delay {
            config.tick_period = Duration::from_millis(delay.get());
        }
        Ok(config)
    }
}

#[derive(Debug, Error)]
#[error("{0}\n\nRun `torsnake --help` for usage.")]
pub(crate) struct UsageError(#[from] lexopt::Error);
