//! Wire DTOs for the chamber WebSocket protocol.
//!
//! The server pushes JSON objects tagged by a `type` field; the client sends
//! typing notices tagged by `message_type`. One socket is opened per chamber.

use serde::{Deserialize, Serialize};

/// Server-pushed event, discriminated by the `type` field.
///
/// Event types the client does not understand deserialize to [`Unknown`]
/// instead of failing, so new server-side broadcasts never break the session.
///
/// [`Unknown`]: ServerEvent::Unknown
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type")]
pub enum ServerEvent {
    /// Presence-count push: the number of currently connected users.
    #[serde(rename = "chat.active")]
    Active { content: u64 },

    /// Typing-indicator broadcast. `content` is the display string
    /// (e.g. "alice is typing...") or `null` once the user goes idle.
    #[serde(rename = "chat.typing")]
    Typing {
        content: Option<String>,
        username: String,
    },

    /// Any other `type` value.
    #[serde(other)]
    Unknown,
}

/// Outbound typing notice sent on the chamber socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypingNotice {
    pub message: &'static str,
    pub message_type: &'static str,
}

impl TypingNotice {
    /// Notice sent on the first keystroke of a typing burst.
    pub fn typing() -> Self {
        Self {
            message: "typing",
            message_type: "typing",
        }
    }

    /// Notice sent when the input loses focus.
    pub fn not_typing() -> Self {
        Self {
            message: "not_typing",
            message_type: "typing",
        }
    }
}
