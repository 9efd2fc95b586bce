//! Reconnection policy.
//!
//! Pure functions, kept apart from the session so they can be tested without
//! a server.

use crate::error::ClientError;

/// Check if the client should exit immediately based on the error type.
///
/// Rejections are final: retrying with the same claims would be rejected again.
pub fn should_exit_immediately(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::Unauthorized(_) | ClientError::Rejected(_) | ClientError::InvalidUrl(_)
    )
}

/// Check if the client should attempt to reconnect.
///
/// # Arguments
///
/// * `error` - The client error that occurred
/// * `current_attempt` - The number of failed attempts so far
/// * `max_attempts` - The maximum number of attempts allowed
pub fn should_attempt_reconnect(
    error: &ClientError,
    current_attempt: u32,
    max_attempts: u32,
) -> bool {
    if should_exit_immediately(error) {
        return false;
    }

    current_attempt < max_attempts
}
