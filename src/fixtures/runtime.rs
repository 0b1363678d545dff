//! Session-scoped test runtime
//!
//! A single Tokio runtime shared by every test in a session that needs an
//! async context, built lazily on first use and torn down with the process.
//! Current-thread flavor: tests drive it one at a time. Parallel test
//! runners that want concurrent async execution need their own runtimes.

use once_cell::sync::Lazy;
use tokio::runtime::{Builder, Runtime};

static SESSION_RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build session test runtime")
});

/// Shared runtime for tests needing an async context.
///
/// Every call returns the same runtime instance. Do not call `block_on`
/// from inside another async context.
pub fn session_runtime() -> &'static Runtime {
    &SESSION_RUNTIME
}
