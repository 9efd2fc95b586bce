//! Value objects for the chat domain.

use std::fmt;

use uuid::Uuid;

use super::error::ValueObjectError;

/// Per-connection session identifier.
///
/// Generated when a connection authenticates and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Caller identity taken from the credential.
///
/// Stable across reconnects of the same caller, but two simultaneous
/// connections may carry the same identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityId(String);

impl IdentityId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::IdentityIdEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for IdentityId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Human-readable participant label shown as the chat sender
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::DisplayNameEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Room key. Rooms have no state of their own beyond their member list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(value: String) -> Result<Self, ValueObjectError> {
        if value.trim().is_empty() {
            return Err(ValueObjectError::RoomIdEmpty);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_generate_is_unique() {
        // テスト項目: 生成される SessionId は毎回異なる
        // given (前提条件):
        let first = SessionId::generate();

        // when (操作):
        let second = SessionId::generate();

        // then (期待する結果):
        assert_ne!(first, second);
        assert_eq!(first.to_string(), first.as_uuid().to_string());
    }

    #[test]
    fn test_identity_id_rejects_blank() {
        // テスト項目: 空白のみの IdentityId は作成できない
        // given (前提条件):
        let blank = "   ".to_string();

        // when (操作):
        let result = IdentityId::new(blank);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::IdentityIdEmpty));
    }

    #[test]
    fn test_display_name_keeps_value() {
        // テスト項目: DisplayName は渡された値をそのまま保持する
        // given (前提条件):
        let name = "Alice".to_string();

        // when (操作):
        let display_name = DisplayName::try_from(name).unwrap();

        // then (期待する結果):
        assert_eq!(display_name.as_str(), "Alice");
        assert_eq!(display_name.to_string(), "Alice");
    }

    #[test]
    fn test_display_name_rejects_empty() {
        // テスト項目: 空の DisplayName は作成できない
        // given (前提条件):
        let empty = String::new();

        // when (操作):
        let result = DisplayName::new(empty);

        // then (期待する結果):
        assert_eq!(result, Err(ValueObjectError::DisplayNameEmpty));
    }

    #[test]
    fn test_room_id_rejects_empty_and_accepts_any_other_key() {
        // テスト項目: RoomId は空文字を拒否し、それ以外は任意の文字列を受け付ける
        // given (前提条件):
        let empty = String::new();
        let key = "room 1/general".to_string();

        // when (操作):
        let rejected = RoomId::new(empty);
        let accepted = RoomId::new(key);

        // then (期待する結果):
        assert_eq!(rejected, Err(ValueObjectError::RoomIdEmpty));
        assert_eq!(accepted.unwrap().as_str(), "room 1/general");
    }
}
