//! Client execution: chamber URL construction and a single session run.

use crate::client::{error::ClientError, session::run_client_session, ui};

/// Configuration for one chamber session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host (and port) of the chamber server
    pub host: String,
    /// Chamber identifier that scopes presence and typing broadcasts
    pub chamber_id: String,
    /// Display name of the chamber; falls back to the chamber id
    pub chamber_name: Option<String>,
    /// Local username, matched against inbound typing indicators
    pub username: String,
    /// Bearer token carried on the WebSocket handshake
    pub token: Option<String>,
    /// Use plain `ws://` instead of `wss://`
    pub debug: bool,
}

/// Build the WebSocket URL for a chamber.
pub fn chamber_url(host: &str, chamber_id: &str, debug: bool) -> String {
    let scheme = if debug { "ws" } else { "wss" };
    format!("{}://{}/ws/chamber/{}/", scheme, host, chamber_id)
}

/// Run the chamber client for one session.
///
/// The session is run exactly once: an unexpected disconnect ends it with
/// no retry and no backoff.
pub async fn run_client(config: ClientConfig) -> Result<(), ClientError> {
    let url = chamber_url(&config.host, &config.chamber_id, config.debug);
    let chamber_name = config
        .chamber_name
        .as_deref()
        .unwrap_or(&config.chamber_id);

    tracing::info!("Connecting to {} as '{}'", url, config.username);

    let input_rx = ui::spawn_stdin_reader();
    run_client_session(
        &url,
        chamber_name,
        &config.username,
        config.token.as_deref(),
        input_rx,
    )
    .await
}
