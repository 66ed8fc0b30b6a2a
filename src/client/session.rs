//! WebSocket session for a single chamber connection.

use futures_util::{Sink, SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{
        client::IntoClientRequest,
        http::{HeaderValue, header::AUTHORIZATION},
        protocol::Message,
    },
};

use crate::{
    client::{
        domain::ClientState,
        error::ClientError,
        protocol::{ServerEvent, TypingNotice},
        status::StatusFormatter,
        ui::{InputEvent, redisplay_prompt},
    },
    common::time::now_utc_millis,
};

/// Close code sent by the server when the user is not a chamber member
const NOT_IN_CHAMBER_CLOSE_CODE: u16 = 4001;

/// Run one chamber session: connect, then pump socket and input events until
/// the socket closes or stdin reaches EOF.
///
/// Disconnection is terminal: an unexpected close is logged and ends the
/// session with no reconnect. A close with code 4001 means the server
/// rejected the user's chamber membership and is surfaced as an error.
pub async fn run_client_session(
    url: &str,
    chamber_name: &str,
    username: &str,
    token: Option<&str>,
    mut input_rx: mpsc::UnboundedReceiver<InputEvent>,
) -> Result<(), ClientError> {
    let mut request = url
        .into_client_request()
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;
    if let Some(token) = token {
        let value = format!("Bearer {}", token)
            .parse::<HeaderValue>()
            .map_err(|e| ClientError::InvalidToken(e.to_string()))?;
        request.headers_mut().insert(AUTHORIZATION, value);
    }

    let (ws_stream, _response) = connect_async(request)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chamber '{}' as '{}'", chamber_name, username);
    print!(
        "{}",
        StatusFormatter::format_join_banner(chamber_name, username, now_utc_millis())
    );
    // Focus the input on load
    redisplay_prompt(username);

    let (mut write, mut read) = ws_stream.split();
    let mut state = ClientState::new(username);

    loop {
        tokio::select! {
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        match serde_json::from_str::<ServerEvent>(&text) {
                            Ok(event) => {
                                if let Some(status) = state.apply_server_event(&event) {
                                    print!("{}", StatusFormatter::format_status_line(&status));
                                    redisplay_prompt(username);
                                }
                            }
                            Err(e) => {
                                tracing::debug!("Ignoring malformed frame: {}", e);
                            }
                        }
                    }
                    Some(Ok(Message::Close(close_frame))) => {
                        if let Some(frame) = &close_frame
                            && u16::from(frame.code) == NOT_IN_CHAMBER_CLOSE_CODE
                        {
                            return Err(ClientError::NotInChamber(chamber_name.to_string()));
                        }
                        tracing::error!("Chat socket closed unexpectedly.");
                        return Ok(());
                    }
                    Some(Ok(_)) => {
                        // Binary frames and pings carry nothing to render
                    }
                    Some(Err(e)) => {
                        tracing::error!("Chat socket closed unexpectedly: {}", e);
                        return Ok(());
                    }
                    None => {
                        tracing::error!("Chat socket closed unexpectedly.");
                        return Ok(());
                    }
                }
            }
            input = input_rx.recv() => {
                match input {
                    Some(InputEvent::Key) => {
                        if let Some(notice) = state.on_key() {
                            send_notice(&mut write, &notice).await?;
                        }
                    }
                    Some(InputEvent::Blur) => {
                        if let Some(notice) = state.on_blur() {
                            send_notice(&mut write, &notice).await?;
                        }
                    }
                    None => {
                        // stdin reached EOF: go idle and leave the chamber
                        if let Some(notice) = state.on_blur() {
                            send_notice(&mut write, &notice).await?;
                        }
                        write.close().await.ok();
                        tracing::info!("Input closed, leaving chamber '{}'", chamber_name);
                        return Ok(());
                    }
                }
            }
        }
    }
}

async fn send_notice<S>(write: &mut S, notice: &TypingNotice) -> Result<(), ClientError>
where
    S: Sink<Message> + Unpin,
    S::Error: std::fmt::Display,
{
    let json = serde_json::to_string(notice)
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    write
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(format!("Failed to send notice: {}", e)))
}
