//! Terminal input capture and prompt handling.

use std::io::{Read, Write};

use tokio::sync::mpsc;

/// Local input activity observed on stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A single non-newline byte was typed.
    Key,
    /// The current line was submitted; the input loses focus.
    Blur,
}

/// Spawn a blocking thread that forwards stdin activity as [`InputEvent`]s.
///
/// Every non-newline byte becomes a `Key`, a newline becomes a `Blur`.
/// The thread exits on stdin EOF or when the receiver is dropped, which
/// closes the channel and ends the session's input side.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<InputEvent> {
    let (input_tx, input_rx) = mpsc::unbounded_channel();

    std::thread::spawn(move || {
        for byte in std::io::stdin().lock().bytes() {
            let event = match byte {
                Ok(b'\n') => InputEvent::Blur,
                Ok(b'\r') => continue,
                Ok(_) => InputEvent::Key,
                Err(e) => {
                    tracing::warn!("stdin read error: {}", e);
                    break;
                }
            };
            if input_tx.send(event).is_err() {
                // Channel closed, exit thread
                break;
            }
        }
    });

    input_rx
}

/// Redisplay the prompt after a status update
pub fn redisplay_prompt(username: &str) {
    print!("{}> ", username);
    std::io::stdout().flush().ok();
}
