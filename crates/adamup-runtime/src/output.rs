//! Output channel backed by `tracing`.

use adamup_core::OutputChannelPort;
use tracing::info;

/// Target used for every output channel line.
pub const OUTPUT_TARGET: &str = "adamup::output";

/// Forwards output channel lines to `tracing` at info level.
///
/// Filter with `RUST_LOG=adamup::output=info` to see only what the editor's
/// output panel would show.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOutputChannel;

impl OutputChannelPort for TracingOutputChannel {
    fn append_line(&self, line: &str) {
        info!(target: OUTPUT_TARGET, "{line}");
    }
}
