//! Connection handle trait.

use super::error::ConnectionError;

/// Send capability for one participant's connection.
///
/// The transport layer owns the underlying socket; the room core only keeps
/// this handle to push encoded frames. Sending must not block.
#[cfg_attr(test, mockall::automock)]
pub trait ConnectionHandle: Send + Sync {
    /// Push one encoded frame to the connection.
    fn send(&self, frame: &str) -> Result<(), ConnectionError>;
}
