//! Presence/typing client for a chamber chat room.
//!
//! Connects to the chamber WebSocket endpoint, renders presence-count and
//! typing-indicator pushes on the status line, and reports local typing
//! activity back to the server. Disconnection ends the session; there is
//! no reconnect.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin client -- --chamber-id 42 --username alice --debug
//! cargo run --bin client -- -c 42 -u alice -H chat.example.com -t $TOKEN
//! ```

use clap::Parser;

use chamber_client::client::{ClientConfig, run_client};
use chamber_client::common::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Presence/typing client for a chamber chat room", long_about = None)]
struct Args {
    /// Chamber identifier that scopes presence and typing broadcasts
    #[arg(short = 'c', long)]
    chamber_id: String,

    /// Local username, matched against inbound typing indicators
    #[arg(short = 'u', long)]
    username: String,

    /// Host (and port) of the chamber server
    #[arg(short = 'H', long, default_value = "127.0.0.1:8000")]
    host: String,

    /// Bearer token sent on the WebSocket handshake
    #[arg(short = 't', long)]
    token: Option<String>,

    /// Display name of the chamber (defaults to the chamber id)
    #[arg(long)]
    chamber_name: Option<String>,

    /// Connect with plain ws:// instead of wss://
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let config = ClientConfig {
        host: args.host,
        chamber_id: args.chamber_id,
        chamber_name: args.chamber_name,
        username: args.username,
        token: args.token,
        debug: args.debug,
    };

    // Run the client
    if let Err(e) = run_client(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
