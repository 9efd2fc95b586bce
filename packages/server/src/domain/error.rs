//! Domain error types.

use thiserror::Error;

/// Value object validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// Identity ID is empty or whitespace only
    #[error("identity ID cannot be empty")]
    IdentityIdEmpty,

    /// Display name is empty or whitespace only
    #[error("display name cannot be empty")]
    DisplayNameEmpty,

    /// Room ID is empty or whitespace only
    #[error("room ID cannot be empty")]
    RoomIdEmpty,
}

/// Raised while turning credential claims into a participant.
///
/// This is the only error that leaves the room core: the transport must refuse
/// the connection when it sees one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    #[error("invalid credential: missing claim '{0}'")]
    InvalidCredential(&'static str),
}

/// Failure to hand a frame to one participant's connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The transport side of the connection has gone away
    #[error("connection is closed")]
    Closed,
}
