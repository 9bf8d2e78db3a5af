//! Tokio runtime for the `adamup` binary.
//!
//! Prompt answers are read from stdin on a blocking thread, and a blocking
//! read cannot be interrupted. Shutting the runtime down must not wait for
//! such a thread, or `watch` would hang after Ctrl-C until the user pressed
//! Enter.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// How long shutdown waits for blocking tasks before abandoning them.
pub const SHUTDOWN_GRACE: Duration = Duration::from_millis(250);

/// Multi-threaded runtime with IO and timers enabled.
pub fn build_runtime() -> io::Result<Runtime> {
    Builder::new_multi_thread().enable_all().build()
}

/// Drive `future` to completion, then shut the runtime down.
///
/// Blocking tasks still running after [`SHUTDOWN_GRACE`] are left behind;
/// they end with the process.
pub fn run_to_completion<F: Future>(runtime: Runtime, future: F) -> F::Output {
    let output = runtime.block_on(future);
    debug!(grace_ms = SHUTDOWN_GRACE.as_millis(), "Shutting down runtime");
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    output
}
