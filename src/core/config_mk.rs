//! Generation of `config.mk`, the build configuration fragment included by the Makefile.

use std::path::Path;

use anyhow::Result;

use super::prefix::InstallPrefix;
use crate::applog::*;
use crate::utils;

/// File name of the generated fragment, relative to the current directory.
pub const CONFIG_MK: &str = "config.mk";

const HEADER: &str = "# this file is autogenerated by ./configure";

/// Text written when no prefix could be resolved.
pub const UNRESOLVED: &str = "None";

/// Render the content of `config.mk`.
pub fn render(prefix: Option<&InstallPrefix>) -> String {
    let value = prefix.map_or_else(|| UNRESOLVED.to_string(), ToString::to_string);
    format!("{HEADER}\nprefix={value}\n")
}

/// Write `config.mk` to `path`, replacing whatever was there.
pub fn emit<P: AsRef<Path>>(path: P, prefix: Option<&InstallPrefix>) -> Result<()> {
    let path = path.as_ref();
    if prefix.is_none() {
        debug!("no prefix resolved, writing '{UNRESOLVED}'");
    }
    utils::write_file(path, &render(prefix))?;
    info!("generated '{}'", path.display());
    Ok(())
}
