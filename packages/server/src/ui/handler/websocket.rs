//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::mpsc;

use crate::{
    domain::{AuthenticationError, CredentialClaims, Participant, ParticipantFactory, RoomId},
    infrastructure::{
        connection::WebSocketConnection,
        dto::websocket::{DecodedFrame, decode_frame},
    },
    ui::state::AppState,
};

/// Query parameters for WebSocket connection
///
/// Everything except `room_id` is the credential claims handed over by the
/// authentication layer in front of this server.
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub room_id: Option<String>,
    pub identity_id: Option<String>,
    pub name: Option<String>,
    pub is_guest: Option<bool>,
}

impl ConnectQuery {
    fn claims(&self) -> CredentialClaims {
        CredentialClaims {
            identity_id: self.identity_id.clone(),
            name: self.name.clone(),
            is_guest: self.is_guest,
        }
    }
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // Create the connection handle before authenticating; the receiver feeds
    // the socket writer once the upgrade completes.
    let (connection, rx) = WebSocketConnection::channel();

    let participant = match ParticipantFactory::authenticate(
        Arc::new(connection),
        query.claims(),
        state.clock.as_ref(),
    ) {
        Ok(participant) => participant,
        Err(AuthenticationError::InvalidCredential(claim)) => {
            tracing::warn!("Rejecting connection: missing or empty claim '{}'", claim);
            return Err(StatusCode::UNAUTHORIZED);
        }
    };

    let room_id = match RoomId::try_from(query.room_id.unwrap_or_default()) {
        Ok(room_id) => room_id,
        Err(e) => {
            tracing::warn!(
                "Rejecting connection of '{}': {}",
                participant.identity_id,
                e
            );
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    tracing::info!(
        "Participant '{}' ({}) authenticated as session {}",
        participant.identity_id,
        participant.display_name,
        participant.session_id
    );

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, participant, room_id, rx)))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This is the outbound side of one connection: broadcasts addressed to this
/// participant arrive on `rx` and are written to the socket in order.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(
    socket: WebSocket,
    state: Arc<AppState>,
    participant: Participant,
    room_id: RoomId,
    rx: mpsc::UnboundedReceiver<String>,
) {
    let (sender, mut receiver) = socket.split();

    state
        .join_room_usecase
        .execute(participant.clone(), room_id)
        .await;

    let mut send_task = pusher_loop(rx, sender);

    let recv_state = state.clone();
    let recv_participant = participant.clone();

    // Spawn a task to receive frames from this participant
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!(
                        "WebSocket error on session {}: {}",
                        recv_participant.session_id,
                        e
                    );
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text_frame(&recv_state, &recv_participant, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::info!(
                        "Participant '{}' (session {}) requested close",
                        recv_participant.identity_id,
                        recv_participant.session_id
                    );
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    state.leave_room_usecase.execute(&participant).await;
}

/// Decode one inbound text frame and dispatch it.
///
/// Malformed frames and unknown message types are logged and dropped.
async fn handle_text_frame(state: &AppState, participant: &Participant, text: &str) {
    match decode_frame(text) {
        Ok(DecodedFrame::Chat(payload)) => {
            state
                .send_message_usecase
                .execute(participant, payload.message)
                .await;
        }
        Ok(DecodedFrame::Unsupported(kind)) => {
            tracing::debug!(
                "Ignoring '{}' frame from session {}",
                kind,
                participant.session_id
            );
        }
        Err(e) => {
            tracing::warn!(
                "Discarding frame from session {}: {}",
                participant.session_id,
                e
            );
        }
    }
}
