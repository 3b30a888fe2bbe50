use std::path::PathBuf;

pub trait SnapboxCommandExt {
    /// Command for the `configure` binary, with `PREFIX` removed from the inherited environment.
    fn configure() -> Self;
}

impl SnapboxCommandExt for snapbox::cmd::Command {
    fn configure() -> Self {
        Self::new(configure_bin()).env_remove("PREFIX")
    }
}

/// Path to the configure binary
fn configure_bin() -> PathBuf {
    snapbox::cmd::cargo_bin("configure")
}
