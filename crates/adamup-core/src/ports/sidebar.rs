//! Sidebar port.
//!
//! The webview application that renders tasks lives outside this workspace.
//! Commands and callback URIs are forwarded to it through this trait.

use async_trait::async_trait;

use crate::domain::WebviewAction;

/// The sidebar/tab webview provider.
#[async_trait]
pub trait SidebarPort: Send + Sync {
    /// Whether a sidebar or tab instance is currently visible.
    fn is_visible(&self) -> bool;

    /// Drop the current task.
    async fn clear_task(&self);

    /// Push the full state to the webview.
    async fn post_state_to_webview(&self);

    /// Send a UI action to the webview.
    async fn post_action(&self, action: WebviewAction);

    /// Open a new webview instance in an editor tab next to the last
    /// visible editor.
    async fn open_in_new_tab(&self);

    /// Complete the OpenRouter sign-in with an authorization code.
    async fn handle_openrouter_callback(&self, code: &str);
}
