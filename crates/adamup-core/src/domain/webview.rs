//! Messages posted to the sidebar webview.

use serde::{Deserialize, Serialize};

/// A UI action the webview reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebviewAction {
    ChatButtonTapped,
    SettingsButtonTapped,
    HistoryButtonTapped,
}

impl WebviewAction {
    /// Wire name of the action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChatButtonTapped => "chatButtonTapped",
            Self::SettingsButtonTapped => "settingsButtonTapped",
            Self::HistoryButtonTapped => "historyButtonTapped",
        }
    }
}

/// Envelope for messages sent to the webview.
///
/// Serialises as `{"type":"action","action":"chatButtonTapped"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum WebviewMessage {
    Action { action: WebviewAction },
}

impl WebviewMessage {
    /// Wrap an action in its message envelope.
    pub const fn action(action: WebviewAction) -> Self {
        Self::Action { action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serde_name() {
        for action in [
            WebviewAction::ChatButtonTapped,
            WebviewAction::SettingsButtonTapped,
            WebviewAction::HistoryButtonTapped,
        ] {
            assert_eq!(
                serde_json::to_value(action).unwrap(),
                serde_json::Value::String(action.as_str().to_string())
            );
        }
    }

    #[test]
    fn test_action_message_wire_shape() {
        let json = serde_json::to_value(WebviewMessage::action(WebviewAction::ChatButtonTapped))
            .unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "action", "action": "chatButtonTapped" })
        );
    }

    #[test]
    fn test_history_action_name() {
        let json = serde_json::to_string(&WebviewAction::HistoryButtonTapped).unwrap();
        assert_eq!(json, "\"historyButtonTapped\"");
    }
}
