//! User notification port.
//!
//! Toasts and prompts shown by the host. Adapters decide how they look: an
//! editor shows notification popups, a terminal prints and reads stdin.
//!
//! # Design
//!
//! `show_info` and `show_error` must not block. `ask` waits for the user
//! without a timeout and returns `None` when the prompt is dismissed.

use async_trait::async_trait;

/// A question with a fixed set of answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRequest {
    /// Text shown to the user.
    pub message: String,
    /// Button labels, in display order.
    pub actions: Vec<String>,
}

impl PromptRequest {
    /// Create a prompt with the given actions.
    pub fn new(message: impl Into<String>, actions: &[&str]) -> Self {
        Self {
            message: message.into(),
            actions: actions.iter().map(|a| (*a).to_string()).collect(),
        }
    }
}

/// Trait for showing notifications and asking questions.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserNotifierPort: Send + Sync {
    /// Show an informational toast.
    fn show_info(&self, message: &str);

    /// Show an error toast.
    fn show_error(&self, message: &str);

    /// Ask a question and wait for the chosen action label.
    ///
    /// Returns `None` if the user dismissed the prompt.
    async fn ask(&self, request: PromptRequest) -> Option<String>;
}

/// Notifier that shows nothing and dismisses every prompt.
///
/// Suitable for background contexts with nobody to answer. An update is
/// reported through the output channel but never installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

#[async_trait]
impl UserNotifierPort for SilentNotifier {
    fn show_info(&self, _message: &str) {}

    fn show_error(&self, _message: &str) {}

    async fn ask(&self, _request: PromptRequest) -> Option<String> {
        None
    }
}
