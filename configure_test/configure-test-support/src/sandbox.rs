use std::fs;
use std::path::{Path, PathBuf};

use crate::paths::{next_test_root, TestPathExt};
use crate::t;

/// Per-test working area.
///
/// The layout is `<root>/work`, which is used as the current directory of the
/// `configure` process, plus any directories created through [`Sandbox::dir`].
pub struct Sandbox {
    root: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = next_test_root();
        root.join("work").mkdir_p();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where `configure` runs, and where `config.mk` lands.
    pub fn work_dir(&self) -> PathBuf {
        self.root.join("work")
    }

    /// Create (if needed) a directory under the sandbox root and return its path.
    pub fn dir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        path.mkdir_p();
        path
    }

    /// A path under the sandbox root that is guaranteed not to exist.
    pub fn missing(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        path.rm_rf();
        path
    }

    pub fn config_mk(&self) -> PathBuf {
        self.work_dir().join("config.mk")
    }

    pub fn read_config_mk(&self) -> String {
        t!(fs::read_to_string(self.config_mk()))
    }

    pub fn write_config_mk(&self, content: &str) {
        t!(fs::write(self.config_mk(), content))
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}
