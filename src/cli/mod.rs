//! Contains the definition of command line arguments, and the program entry.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use log::LevelFilter;
use logger::Logger;

use crate::applog::*;
use crate::core::config_mk::{self, CONFIG_MK};
use crate::core::prefix::{
    EnvPrefix, InstallPrefix, Lookup, PrefixResolver, PrefixSource, PREFIX_ENV,
};

/// Environment variable controlling how much diagnostic output is printed.
pub const LOG_LEVEL_ENV: &str = "CONFIGURE_LOG";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Generate `config.mk` for the build.
///
/// When the `PREFIX` environment variable is set, it is used instead and
/// the command line is not looked at.
#[derive(Parser, Debug)]
#[command(version, about, infer_long_args = true, args_override_self = true)]
pub struct Configure {
    /// Directory prefix for installation
    #[arg(short, long, value_name = "PATH", value_hint = ValueHint::DirPath)]
    prefix: OsString,
}

impl Configure {
    pub fn prefix(&self) -> &OsStr {
        &self.prefix
    }
}

/// Prefix given through `-p/--prefix` on the command line.
///
/// Parsing only happens on [`lookup`](PrefixSource::lookup), a missing flag
/// surfaces there as a [`clap::Error`].
#[derive(Debug, Clone)]
pub struct ArgPrefix {
    args: Vec<OsString>,
}

impl ArgPrefix {
    pub fn from_args() -> Self {
        Self::new(env::args_os())
    }

    /// `args` includes the program name, as in [`std::env::args_os`].
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl PrefixSource for ArgPrefix {
    fn name(&self) -> &str {
        "command line"
    }

    fn lookup(&self) -> Result<Lookup> {
        debug!("{PREFIX_ENV} from argv");
        let args = Configure::try_parse_from(&self.args)?;
        debug!("{args:?}");

        Ok(InstallPrefix::probe(args.prefix()).map_or(Lookup::Unresolved, Lookup::Resolved))
    }
}

/// Read the log level from [`LOG_LEVEL_ENV`], returning the rejected value if it is not a level.
fn log_level(raw: Option<String>) -> (LevelFilter, Option<String>) {
    match raw {
        None => (DEFAULT_LOG_LEVEL, None),
        Some(raw) => match raw.trim().parse::<LevelFilter>() {
            Ok(level) => (level, None),
            Err(_) => (DEFAULT_LOG_LEVEL, Some(raw)),
        },
    }
}

fn setup_logger() -> Result<()> {
    let (level, rejected) = log_level(env::var(LOG_LEVEL_ENV).ok());
    Logger::new_with_level(level)
        .colored(io::stderr().is_terminal())
        .init()
        .context("unable to set up logger")?;

    if let Some(raw) = rejected {
        warn!("ignoring unknown {LOG_LEVEL_ENV} value '{raw}', using '{DEFAULT_LOG_LEVEL}'");
    }
    Ok(())
}

/// Resolve the prefix from the environment or the command line, then write [`CONFIG_MK`].
///
/// Usage errors terminate the process through clap, with its exit status and message.
pub fn run() -> Result<()> {
    setup_logger()?;

    let resolver = PrefixResolver::new()
        .source(EnvPrefix::from_env())
        .source(ArgPrefix::from_args());
    let prefix = match resolver.resolve() {
        Ok(prefix) => prefix,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(usage) => usage.exit(),
            Err(e) => return Err(e),
        },
    };

    config_mk::emit(CONFIG_MK, prefix.as_ref())
}
