use std::fmt::Write;

pub use snapbox::str;

pub mod paths;
pub mod sandbox;
pub mod worker;

pub mod prelude {
    pub use crate::paths::TestPathExt;
    pub use crate::sandbox::Sandbox;
    pub use crate::worker::SnapboxCommandExt;
}

/// Unwrap a `Result` with a useful panic message
///
/// # Example
///
/// ```rust
/// use configure_test_support::t;
/// t!(std::fs::read_to_string("Cargo.toml"));
/// ```
#[macro_export]
macro_rules! t {
    ($e:expr) => {
        match $e {
            Ok(e) => e,
            Err(e) => $crate::panic_error(&format!("failed running {}", stringify!($e)), e),
        }
    };
}

/// `panic!`, reporting the specified error and its causes, see also [`t!`]
#[track_caller]
pub fn panic_error(what: &str, err: impl Into<anyhow::Error>) -> ! {
    let err = err.into();
    let mut result = format!("{what}\nerror: {err}");
    for cause in err.chain().skip(1) {
        let _ = write!(result, "\n\nCaused by:\n{cause}");
    }
    panic!("\n{result}");
}
