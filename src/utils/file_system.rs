use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Wrapper to [`std::fs::read_to_string`] but with additional error context.
pub fn read_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path.as_ref())
        .with_context(|| format!("failed to read '{}'", path.as_ref().display()))
}

/// Create `path` (or truncate it if it already exists) and write `content` into it.
///
/// The file handle is dropped before returning, on success and on every error path.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .with_context(|| format!("unable to open '{}' for writing", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    file.sync_data()
        .with_context(|| format!("failed to flush '{}'", path.display()))?;
    Ok(())
}
