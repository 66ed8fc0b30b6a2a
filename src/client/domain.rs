//! Domain logic for the presence/typing client.
//!
//! This module contains the pure client state machine. It has no socket or
//! terminal dependencies, making it easy to test.

use crate::client::protocol::{ServerEvent, TypingNotice};
use crate::client::status::StatusFormatter;

/// Local typing state.
///
/// `Typing` means a "typing" notice has been sent for the current keystroke
/// burst and no further notice is due until the input loses focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Typing,
}

/// Per-session client state.
///
/// Holds the cached presence string used as the fallback status while a
/// typing indicator is displayed, and the local typing flag.
#[derive(Debug)]
pub struct ClientState {
    username: String,
    last_presence: String,
    typing: TypingState,
}

impl ClientState {
    /// Create the initial state for the given local username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            last_presence: String::new(),
            typing: TypingState::Idle,
        }
    }

    /// Apply a server-pushed event.
    ///
    /// Returns the new status text to render, or `None` when the event
    /// requires no render (unknown event types).
    pub fn apply_server_event(&mut self, event: &ServerEvent) -> Option<String> {
        match event {
            ServerEvent::Active { content } => {
                self.last_presence = StatusFormatter::format_presence(*content);
                Some(self.last_presence.clone())
            }
            ServerEvent::Typing { content, username } => match content {
                Some(text) if !text.is_empty() && *username == self.username => Some(text.clone()),
                // Other users' indicators and idle notices fall back to the
                // cached presence string.
                _ => Some(self.last_presence.clone()),
            },
            ServerEvent::Unknown => None,
        }
    }

    /// Register a local keystroke.
    ///
    /// The first keystroke of a burst transitions `Idle -> Typing` and emits
    /// one notice; further keystrokes emit nothing until the next blur.
    pub fn on_key(&mut self) -> Option<TypingNotice> {
        match self.typing {
            TypingState::Idle => {
                self.typing = TypingState::Typing;
                Some(TypingNotice::typing())
            }
            TypingState::Typing => None,
        }
    }

    /// Register an input blur.
    ///
    /// `Typing -> Idle` emits one "not_typing" notice and re-arms the flag.
    /// Blur while already idle is a no-op.
    pub fn on_blur(&mut self) -> Option<TypingNotice> {
        match self.typing {
            TypingState::Typing => {
                self.typing = TypingState::Idle;
                Some(TypingNotice::not_typing())
            }
            TypingState::Idle => None,
        }
    }

    /// The current typing state.
    pub fn typing_state(&self) -> TypingState {
        self.typing
    }

    /// The cached presence string (empty until the first `chat.active`).
    pub fn last_presence(&self) -> &str {
        &self.last_presence
    }
}
