use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::env;

use crate::t;

const GLOBAL_ROOT_TEST_DIR: &str = "configure";

static GLOBAL_ROOT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Directory holding every test root of this run.
///
/// example: target/debug/tmp/configure
fn global_root_dir() -> &'static Path {
    GLOBAL_ROOT_DIR.get_or_init(|| {
        let mut path = t!(env::current_exe());
        path.pop(); // chop off exe name
        if path.ends_with("deps") {
            path.pop();
        }
        path.push("tmp");
        path.push(GLOBAL_ROOT_TEST_DIR);
        path.mkdir_p();
        path
    })
}

/// Allocate a fresh, empty root for one test.
///
/// example: target/debug/tmp/configure/t0
pub fn next_test_root() -> PathBuf {
    static NEXT_TEST_ID: AtomicUsize = AtomicUsize::new(0);

    let id = NEXT_TEST_ID.fetch_add(1, Ordering::SeqCst);
    let root = global_root_dir().join(format!("t{id}"));
    root.rm_rf();
    root.mkdir_p();
    root
}

pub trait TestPathExt {
    fn mkdir_p(&self);
    fn rm_rf(&self);
}

impl TestPathExt for Path {
    fn mkdir_p(&self) {
        fs::create_dir_all(self)
            .unwrap_or_else(|e| panic!("failed to mkdir dir {}: \n cause: \n {e}", self.display()))
    }

    fn rm_rf(&self) {
        let meta = match self.symlink_metadata() {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return,
            Err(e) => panic!("failed to remove {self:?}, could not read: {e:?}"),
        };

        let res = if meta.is_dir() {
            fs::remove_dir_all(self)
        } else {
            fs::remove_file(self)
        };
        if let Err(e) = res {
            panic!("failed to remove {self:?}: {e:?}")
        }
    }
}

impl TestPathExt for PathBuf {
    fn mkdir_p(&self) {
        self.as_path().mkdir_p()
    }

    fn rm_rf(&self) {
        self.as_path().rm_rf()
    }
}
