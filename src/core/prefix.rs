//! Resolving the installation prefix.
//!
//! A prefix may come from several places, which are consulted in order through a
//! [`PrefixResolver`]. The first source that applies decides the outcome, even when
//! the value it holds turns out to be unusable.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::applog::*;

/// Name of the environment variable that overrides any command line input.
pub const PREFIX_ENV: &str = "PREFIX";

/// Directory under which the software is going to be installed.
///
/// The raw value is kept exactly as supplied, relative paths stay relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPrefix(PathBuf);

impl InstallPrefix {
    /// Returns `None` unless `raw` names an existing directory at this moment.
    pub fn probe<P: Into<PathBuf>>(raw: P) -> Option<Self> {
        let path = raw.into();
        path.is_dir().then_some(Self(path))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl AsRef<Path> for InstallPrefix {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl fmt::Display for InstallPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

/// Outcome of asking a single [`PrefixSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Resolved(InstallPrefix),
    /// The source applies, but its value is not an existing directory.
    /// Resolution stops here without a prefix.
    Unresolved,
    /// The source does not apply, move on to the next one.
    Skipped,
}

pub trait PrefixSource {
    /// Short description used in log messages.
    fn name(&self) -> &str;
    fn lookup(&self) -> Result<Lookup>;
}

/// Prefix taken from the `PREFIX` environment variable.
#[derive(Debug, Clone, Default)]
pub struct EnvPrefix {
    value: Option<OsString>,
}

impl EnvPrefix {
    pub fn from_env() -> Self {
        Self::new(env::var_os(PREFIX_ENV))
    }

    pub fn new(value: Option<OsString>) -> Self {
        Self { value }
    }
}

impl PrefixSource for EnvPrefix {
    fn name(&self) -> &str {
        "environment"
    }

    fn lookup(&self) -> Result<Lookup> {
        // an empty value still counts as set
        let Some(value) = &self.value else {
            return Ok(Lookup::Skipped);
        };
        debug!("{PREFIX_ENV} from environment");

        Ok(match InstallPrefix::probe(value) {
            Some(prefix) => {
                debug!("{PREFIX_ENV} from environment: {prefix}");
                Lookup::Resolved(prefix)
            }
            None => {
                debug!(
                    "{PREFIX_ENV} from environment is not a directory: '{}'",
                    Path::new(value).display()
                );
                Lookup::Unresolved
            }
        })
    }
}

/// An ordered chain of [`PrefixSource`]s.
#[derive(Default)]
pub struct PrefixResolver {
    sources: Vec<Box<dyn PrefixSource>>,
}

impl PrefixResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source, it will be consulted after every source added before it.
    pub fn source<S: PrefixSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Walk the chain until a source applies.
    ///
    /// `Ok(None)` means either that the deciding source held something other than an
    /// existing directory, or that no source applied at all.
    ///
    /// # Errors
    ///
    /// Errors from a source are returned as is and stop the walk, so that callers can
    /// downcast them (e.g. to [`clap::Error`]).
    pub fn resolve(&self) -> Result<Option<InstallPrefix>> {
        for source in &self.sources {
            match source.lookup()? {
                Lookup::Skipped => continue,
                Lookup::Resolved(prefix) => return Ok(Some(prefix)),
                Lookup::Unresolved => {
                    debug!("no usable prefix from {}", source.name());
                    return Ok(None);
                }
            }
        }
        debug!("no prefix source applied");
        Ok(None)
    }
}
