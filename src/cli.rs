//! The beacon server's command line: `-h/--help` and `-c/--config-file`.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use thiserror::Error;

use crate::args::{action_fn, ArgError, ArgumentParser};
use crate::config::{BeaconConfig, ConfigError};

pub const PROGRAM: &str = "beacon-server";

/// Exit code for configuration failures.
pub const EXIT_CONFIG: u8 = 1;

/// What the process should do after argument handling.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Help was requested; print the text and exit successfully.
    Help(String),
    /// Start the beacon with this configuration.
    Start(BeaconConfig),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] ArgError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CliError {
    /// Process exit code; config problems share one code however they surface.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Config(_) => EXIT_CONFIG,
            CliError::Args(ArgError::ActionFailure { source, .. })
                if source.is::<ConfigError>() =>
            {
                EXIT_CONFIG
            }
            CliError::Args(e) => e.exit_code(),
        }
    }
}

/// Config produced by the `--config-file` action, if it ran.
pub type ConfigSlot = Rc<RefCell<Option<BeaconConfig>>>;

/// Parser with the beacon server's flags registered.
///
/// A successful `--config-file` stores the loaded config in `slot`; a
/// repeated flag overwrites the earlier value.
pub fn build_parser(slot: &ConfigSlot) -> Result<ArgumentParser, ArgError> {
    let mut parser = ArgumentParser::new(PROGRAM);

    parser.register(
        "-h",
        0,
        "get help for program",
        action_fn(|inv| {
            let help = inv.help().to_string();
            inv.emit(help);
            Ok(true)
        }),
        Some("--help"),
    )?;

    let slot = Rc::clone(slot);
    parser.register(
        "-c",
        1,
        "specify path to configuration file",
        action_fn(move |inv| {
            let config = BeaconConfig::load(Path::new(&inv.values[0]))?;
            tracing::info!(path = %inv.values[0], "Configuration file accepted");
            *slot.borrow_mut() = Some(config);
            Ok(true)
        }),
        Some("--config-file"),
    )?;

    Ok(parser)
}

/// Interpret the process arguments (without the program name).
///
/// Without `--config-file` the default config path is tried, falling back
/// to built-in defaults when that file does not exist.
pub fn run<I, S>(argv: I) -> Result<Outcome, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    run_with_default_path(argv, &BeaconConfig::default_path())
}

/// Like [`run`], with `default_path` standing in for the per-user config file.
pub fn run_with_default_path<I, S>(argv: I, default_path: &Path) -> Result<Outcome, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let slot = ConfigSlot::default();
    let mut parser = build_parser(&slot)?;
    let result = parser.parse(argv)?;

    if result.contains("-h") {
        return Ok(Outcome::Help(result.output.concat()));
    }

    let loaded = slot.borrow_mut().take();
    let config = match loaded {
        Some(config) => config,
        None => BeaconConfig::load_or_default(default_path)?,
    };
    Ok(Outcome::Start(config))
}
