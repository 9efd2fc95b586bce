//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use hiroba_server::infrastructure::dto::websocket::{
    ChatPayload, DecodedFrame, WireMessage, decode_frame,
};
use reqwest::Url;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::sync::mpsc;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};

use crate::error::ClientError;

use super::{
    formatter::MessageFormatter,
    ui::{prompt, redisplay_prompt},
};

/// Sender label put on outgoing frames; the server replaces it with the
/// authenticated display name.
const OUTGOING_SENDER: &str = "You";

/// Where to connect and which claims to present
#[derive(Debug, Clone)]
pub struct ConnectOptions {
    pub url: String,
    pub room_id: String,
    pub identity_id: String,
    pub name: String,
    pub is_guest: bool,
}

impl ConnectOptions {
    /// Build the connection URL with room and claims in the query string
    pub fn connect_url(&self) -> Result<Url, ClientError> {
        let is_guest = self.is_guest.to_string();
        Url::parse_with_params(
            &self.url,
            [
                ("room_id", self.room_id.as_str()),
                ("identity_id", self.identity_id.as_str()),
                ("name", self.name.as_str()),
                ("is_guest", is_guest.as_str()),
            ],
        )
        .map_err(|e| ClientError::InvalidUrl(e.to_string()))
    }
}

/// Encode one line typed by the user as a chat frame
fn encode_outgoing(line: &str) -> Result<String, serde_json::Error> {
    WireMessage::Chat(ChatPayload {
        message: line.to_string(),
        sender: OUTGOING_SENDER.to_string(),
    })
    .encode()
}

/// Render an incoming text frame, or `None` if there is nothing to show
fn render_incoming(text: &str) -> Option<String> {
    match decode_frame(text) {
        Ok(DecodedFrame::Chat(payload)) => Some(MessageFormatter::format_chat_message(
            &payload.sender,
            &payload.message,
        )),
        Ok(DecodedFrame::Unsupported(kind)) => {
            tracing::debug!("Ignoring '{}' frame", kind);
            None
        }
        Err(e) => {
            tracing::warn!("Discarding frame from server: {}", e);
            None
        }
    }
}

fn classify_connect_error(error: WsError, name: &str) -> ClientError {
    match error {
        WsError::Http(response) => match response.status().as_u16() {
            401 => ClientError::Unauthorized(name.to_string()),
            status => ClientError::Rejected(status),
        },
        other => ClientError::ConnectionError(other.to_string()),
    }
}

/// Run the WebSocket client session
///
/// Returns `Ok(())` when the user ends the session (Ctrl+C / Ctrl+D) and an
/// error when the connection is refused or lost.
pub async fn run_client_session(options: &ConnectOptions) -> Result<(), ClientError> {
    let url = options.connect_url()?;

    let (ws_stream, _response) = connect_async(url.as_str())
        .await
        .map_err(|e| classify_connect_error(e, &options.name))?;

    tracing::info!("Connected to chat server!");
    println!(
        "{}",
        MessageFormatter::format_welcome(&options.name, &options.room_id)
    );

    let (mut write, mut read) = ws_stream.split();

    let name_for_read = options.name.clone();

    // Spawn a task to handle incoming frames
    let mut read_task = tokio::spawn(async move {
        let mut connection_error = false;

        while let Some(message) = read.next().await {
            match message {
                Ok(Message::Text(text)) => {
                    if let Some(formatted) = render_incoming(text.as_str()) {
                        print!("{}", formatted);
                        redisplay_prompt(&name_for_read);
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    connection_error = true;
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    connection_error = true;
                    break;
                }
                _ => {}
            }
        }

        connection_error
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt = prompt(&options.name);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let line = line.trim();
                    if !line.is_empty() {
                        rl.add_history_entry(line).ok();
                        if input_tx.send(line.to_string()).is_err() {
                            break;
                        }
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to forward typed lines to the server
    let mut write_task = tokio::spawn(async move {
        let mut write_error = false;

        while let Some(line) = input_rx.recv().await {
            let json = match encode_outgoing(&line) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                    continue;
                }
            };

            if let Err(e) = write.send(Message::Text(json.into())).await {
                tracing::warn!("Failed to send message: {}", e);
                write_error = true;
                break;
            }
        }

        // Input ended: close politely so the server leaves the room right away
        if !write_error {
            write.send(Message::Close(None)).await.ok();
        }

        write_error
    });

    // If any one of the tasks completes, abort the other
    let connection_lost = tokio::select! {
        read_result = &mut read_task => {
            write_task.abort();
            read_result.unwrap_or(false)
        }
        write_result = &mut write_task => {
            read_task.abort();
            write_result.unwrap_or(false)
        }
    };

    if connection_lost {
        return Err(ClientError::ConnectionError("Connection lost".to_string()));
    }

    Ok(())
}
