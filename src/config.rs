//! Command-line configuration for the terminal host.

use std::path::PathBuf;
use thiserror::Error;

/// Runtime options. Gameplay tuning lives in `core::constants`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed RNG seed for a reproducible run.
    pub seed: Option<u64>,
    /// File to write tracing output to. No logging without it.
    pub log_path: Option<PathBuf>,
}

/// What the command line asks the binary to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Play(GameConfig),
    Version,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("Missing value for {0}")]
    MissingValue(&'static str),
    #[error("Invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),
}

pub const USAGE: &str = "\
Friend Quest - help your friends, one mini-game at a time

Usage: friend-quest [options]

Options:
  --seed <N>     Use a fixed random seed
  --log <PATH>   Write logs to PATH (filter with RUST_LOG)
  --version      Show version information
  --help         Show this help message";

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = GameConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--seed"))?;
                let seed = value
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(value.clone()))?;
                config.seed = Some(seed);
            }
            "--log" => {
                let value = args.next().ok_or(ConfigError::MissingValue("--log"))?;
                config.log_path = Some(PathBuf::from(value));
            }
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(Command::Play(config))
}
