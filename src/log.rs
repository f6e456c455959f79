// src/log.rs
//
// Logging bootstrap. The crate logs through the `logf!` / `logd!` / `loge!`
// macros, which forward to `tracing`. Frontends call `init` once at startup:
// the GUI points it at a file, the CLI leaves it on stderr.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

const DEFAULT_FILTER: &str = "disaster_dash=info";

/// Install the global subscriber. Calling it twice is harmless (second call is a no-op).
/// `RUST_LOG` overrides the default filter.
pub fn init(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let res = match log_file.and_then(open_log_file) {
        Some(file) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init(),
        None => builder
            .with_writer(std::io::stderr)
            .try_init(),
    };

    if res.is_err() {
        logd!("Log: subscriber already installed");
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).ok()?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .ok()
}
