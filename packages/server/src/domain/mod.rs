//! Domain layer for the chat server.
//!
//! This module contains room membership rules that are independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod connection;
pub mod entity;
pub mod error;
pub mod factory;
pub mod membership;
pub mod repository;
pub mod value_object;

pub use connection::ConnectionHandle;
pub use entity::{ChatMessage, Participant, Room};
pub use error::{AuthenticationError, ConnectionError, ValueObjectError};
pub use factory::{CredentialClaims, ParticipantFactory};
pub use membership::{JoinOutcome, LeaveOutcome, RoomMembership};
pub use repository::RoomRepository;
pub use value_object::{DisplayName, IdentityId, RoomId, SessionId, Timestamp};
