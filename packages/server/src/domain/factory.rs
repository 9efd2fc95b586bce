//! Participant construction from credential claims.

use std::sync::Arc;

use hiroba_shared::time::Clock;

use super::{
    connection::ConnectionHandle,
    entity::Participant,
    error::AuthenticationError,
    value_object::{DisplayName, IdentityId, SessionId, Timestamp},
};

/// Claims decoded by the authentication collaborator.
///
/// Every field is optional here so that a missing claim can be reported as
/// [`AuthenticationError::InvalidCredential`] rather than a decoding failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialClaims {
    pub identity_id: Option<String>,
    pub name: Option<String>,
    pub is_guest: Option<bool>,
}

/// Builds participants for freshly accepted connections
pub struct ParticipantFactory;

impl ParticipantFactory {
    /// Turn a connection and its claims into a participant with a new session ID.
    ///
    /// Does not touch room state.
    ///
    /// # Errors
    ///
    /// [`AuthenticationError::InvalidCredential`] when `identity_id` or `name`
    /// is missing or blank.
    pub fn authenticate(
        connection: Arc<dyn ConnectionHandle>,
        claims: CredentialClaims,
        clock: &dyn Clock,
    ) -> Result<Participant, AuthenticationError> {
        let identity_id = claims
            .identity_id
            .and_then(|value| IdentityId::new(value).ok())
            .ok_or(AuthenticationError::InvalidCredential("identity_id"))?;
        let display_name = claims
            .name
            .and_then(|value| DisplayName::new(value).ok())
            .ok_or(AuthenticationError::InvalidCredential("name"))?;

        Ok(Participant::new(
            SessionId::generate(),
            identity_id,
            display_name,
            claims.is_guest.unwrap_or(false),
            Timestamp::new(clock.now_millis()),
            connection,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::connection::MockConnectionHandle;
    use hiroba_shared::time::FixedClock;

    fn claims(
        identity_id: Option<&str>,
        name: Option<&str>,
        is_guest: Option<bool>,
    ) -> CredentialClaims {
        CredentialClaims {
            identity_id: identity_id.map(str::to_string),
            name: name.map(str::to_string),
            is_guest,
        }
    }

    #[test]
    fn test_authenticate_success() {
        // テスト項目: 必要なクレームが揃っていれば Participant が作成される
        // given (前提条件):
        let clock = FixedClock::new(1000);
        let connection = Arc::new(MockConnectionHandle::new());

        // when (操作):
        let result = ParticipantFactory::authenticate(
            connection,
            claims(Some("u1"), Some("Alice"), Some(true)),
            &clock,
        );

        // then (期待する結果):
        let participant = result.unwrap();
        assert_eq!(participant.identity_id.as_str(), "u1");
        assert_eq!(participant.display_name.as_str(), "Alice");
        assert!(participant.is_guest);
        assert_eq!(participant.connected_at, Timestamp::new(1000));
    }

    #[test]
    fn test_authenticate_guest_flag_defaults_to_false() {
        // テスト項目: is_guest が省略された場合は false になる
        // given (前提条件):
        let clock = FixedClock::new(0);

        // when (操作):
        let participant = ParticipantFactory::authenticate(
            Arc::new(MockConnectionHandle::new()),
            claims(Some("u1"), Some("Alice"), None),
            &clock,
        )
        .unwrap();

        // then (期待する結果):
        assert!(!participant.is_guest);
    }

    #[test]
    fn test_authenticate_generates_new_session_per_connection() {
        // テスト項目: 同じクレームでも接続ごとに別の SessionId が割り当てられる
        // given (前提条件):
        let clock = FixedClock::new(0);
        let same_claims = claims(Some("u1"), Some("Alice"), None);

        // when (操作):
        let first = ParticipantFactory::authenticate(
            Arc::new(MockConnectionHandle::new()),
            same_claims.clone(),
            &clock,
        )
        .unwrap();
        let second = ParticipantFactory::authenticate(
            Arc::new(MockConnectionHandle::new()),
            same_claims,
            &clock,
        )
        .unwrap();

        // then (期待する結果):
        assert_eq!(first.identity_id, second.identity_id);
        assert!(!first.is_same_session(&second));
    }

    #[test]
    fn test_authenticate_missing_identity_id() {
        // テスト項目: identity_id が無い場合は InvalidCredential になる
        // given (前提条件):
        let clock = FixedClock::new(0);

        // when (操作):
        let result = ParticipantFactory::authenticate(
            Arc::new(MockConnectionHandle::new()),
            claims(None, Some("Alice"), None),
            &clock,
        );

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            AuthenticationError::InvalidCredential("identity_id")
        );
    }

    #[test]
    fn test_authenticate_blank_name() {
        // テスト項目: name が空白のみの場合も欠落として扱われる
        // given (前提条件):
        let clock = FixedClock::new(0);

        // when (操作):
        let result = ParticipantFactory::authenticate(
            Arc::new(MockConnectionHandle::new()),
            claims(Some("u1"), Some("  "), None),
            &clock,
        );

        // then (期待する結果):
        assert_eq!(
            result.unwrap_err(),
            AuthenticationError::InvalidCredential("name")
        );
    }
}
