//! Room-based WebSocket chat server library.
//!
//! Tracks which connected participants are in which room and fans chat
//! messages out to every member of the sender's room.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
