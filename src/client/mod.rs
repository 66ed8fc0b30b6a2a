//! WebSocket presence/typing client implementation.

pub mod domain;
pub mod error;
pub mod protocol;
pub mod runner;
pub mod session;
pub mod status;
pub mod ui;

pub use error::ClientError;
pub use runner::{ClientConfig, run_client};
