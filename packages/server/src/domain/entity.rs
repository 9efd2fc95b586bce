//! Domain entities.

use std::{fmt, sync::Arc};

use super::{
    connection::ConnectionHandle,
    error::ConnectionError,
    value_object::{DisplayName, IdentityId, RoomId, SessionId, Timestamp},
};

/// One connected, authenticated caller.
///
/// Cloning a participant clones the handle, not the connection: every clone
/// pushes into the same transport.
#[derive(Clone)]
pub struct Participant {
    pub session_id: SessionId,
    pub identity_id: IdentityId,
    pub display_name: DisplayName,
    /// Informational only
    pub is_guest: bool,
    /// When the connection was authenticated
    pub connected_at: Timestamp,
    connection: Arc<dyn ConnectionHandle>,
}

impl Participant {
    pub fn new(
        session_id: SessionId,
        identity_id: IdentityId,
        display_name: DisplayName,
        is_guest: bool,
        connected_at: Timestamp,
        connection: Arc<dyn ConnectionHandle>,
    ) -> Self {
        Self {
            session_id,
            identity_id,
            display_name,
            is_guest,
            connected_at,
            connection,
        }
    }

    /// Push an encoded frame to this participant's connection.
    pub fn send(&self, frame: &str) -> Result<(), ConnectionError> {
        self.connection.send(frame)
    }

    /// Whether `other` is the very same connection session.
    pub fn is_same_session(&self, other: &Participant) -> bool {
        self.session_id == other.session_id
    }
}

impl fmt::Debug for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Participant")
            .field("session_id", &self.session_id)
            .field("identity_id", &self.identity_id)
            .field("display_name", &self.display_name)
            .field("is_guest", &self.is_guest)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}

/// A chat message as it is fanned out to a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: DisplayName,
    pub message: String,
}

impl ChatMessage {
    pub fn new(sender: DisplayName, message: String) -> Self {
        Self { sender, message }
    }
}

/// Snapshot of one room and its members in join order
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub participants: Vec<Participant>,
}

impl Room {
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }
}
