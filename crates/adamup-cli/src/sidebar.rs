//! Sidebar stand-in for the terminal.
//!
//! There is no webview here. Messages that would be posted to it are printed
//! as JSON; everything else is logged.

use adamup_core::{SidebarPort, WebviewAction, WebviewMessage};
use async_trait::async_trait;
use tracing::{info, warn};

/// Logs sidebar calls and prints webview messages.
#[derive(Debug, Clone, Copy)]
pub struct LoggingSidebar {
    visible: bool,
}

impl LoggingSidebar {
    pub const fn new(visible: bool) -> Self {
        Self { visible }
    }
}

/// Wire form of the message posted for `action`.
pub fn action_message_json(action: WebviewAction) -> Result<String, serde_json::Error> {
    serde_json::to_string(&WebviewMessage::action(action))
}

#[async_trait]
impl SidebarPort for LoggingSidebar {
    fn is_visible(&self) -> bool {
        self.visible
    }

    async fn clear_task(&self) {
        info!("Sidebar: clear task");
    }

    async fn post_state_to_webview(&self) {
        info!("Sidebar: post state");
    }

    async fn post_action(&self, action: WebviewAction) {
        match action_message_json(action) {
            Ok(json) => println!("{json}"),
            Err(e) => warn!(action = action.as_str(), error = %e, "Failed to encode webview message"),
        }
    }

    async fn open_in_new_tab(&self) {
        info!("Sidebar: open in new tab");
    }

    async fn handle_openrouter_callback(&self, code: &str) {
        info!(code_len = code.len(), "Sidebar: OpenRouter authorization code received");
    }
}
