//! UseCase layer errors.
//!
//! Room operations report anomalies through logs rather than errors, so only
//! lookups that can be refused to an HTTP caller have an error type.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetRoomDetailError {
    #[error("invalid room id")]
    InvalidRoomId,

    #[error("room not found")]
    RoomNotFound,
}
