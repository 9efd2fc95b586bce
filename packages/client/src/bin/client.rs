//! Terminal chat client for Hiroba rooms.
//!
//! Connects to a Hiroba server, joins one room and sends every line typed at
//! the prompt as a chat message. Messages from the room are printed as
//! `sender: message`.
//! Automatically reconnects on disconnection (max 5 attempts with 5 second interval).
//! A rejected connection (e.g. missing name) is not retried.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-client -- --room lobby --identity-id u1 --name Alice
//! cargo run --bin hiroba-client -- -r lobby -i guest-42 -n Bob --guest
//! ```

use clap::Parser;

use hiroba_client::{ConnectOptions, run_client};
use hiroba_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "hiroba-client")]
#[command(about = "Terminal chat client for Hiroba rooms", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Room to join
    #[arg(short = 'r', long)]
    room: String,

    /// Identity id issued by the authentication provider
    #[arg(short = 'i', long)]
    identity_id: String,

    /// Display name shown to other participants
    #[arg(short = 'n', long)]
    name: String,

    /// Connect as a guest
    #[arg(long)]
    guest: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    let options = ConnectOptions {
        url: args.url,
        room_id: args.room,
        identity_id: args.identity_id,
        name: args.name,
        is_guest: args.guest,
    };

    if let Err(e) = run_client(options).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
