//! Conversion logic between DTOs and domain entities.

use hiroba_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::entity;
use crate::infrastructure::dto::{http, websocket as dto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::ChatMessage> for dto::WireMessage {
    fn from(model: entity::ChatMessage) -> Self {
        Self::Chat(dto::ChatPayload {
            message: model.message,
            sender: model.sender.into_string(),
        })
    }
}

impl From<&entity::Participant> for http::ParticipantDetailDto {
    fn from(model: &entity::Participant) -> Self {
        Self {
            session_id: model.session_id.to_string(),
            identity_id: model.identity_id.as_str().to_string(),
            name: model.display_name.as_str().to_string(),
            is_guest: model.is_guest,
            connected_at: timestamp_to_jst_rfc3339(model.connected_at.value()),
        }
    }
}

impl From<entity::Room> for http::RoomSummaryDto {
    fn from(model: entity::Room) -> Self {
        Self {
            participant_count: model.participant_count(),
            participants: model
                .participants
                .iter()
                .map(|p| p.display_name.as_str().to_string())
                .collect(),
            id: model.id.into_string(),
        }
    }
}

impl From<entity::Room> for http::RoomDetailDto {
    fn from(model: entity::Room) -> Self {
        Self {
            participants: model
                .participants
                .iter()
                .map(http::ParticipantDetailDto::from)
                .collect(),
            id: model.id.into_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        DisplayName, IdentityId, RoomId, SessionId, Timestamp, connection::MockConnectionHandle,
    };

    fn participant(identity_id: &str, name: &str, is_guest: bool) -> entity::Participant {
        entity::Participant::new(
            SessionId::generate(),
            IdentityId::new(identity_id.to_string()).unwrap(),
            DisplayName::new(name.to_string()).unwrap(),
            is_guest,
            Timestamp::new(1672498800000),
            Arc::new(MockConnectionHandle::new()),
        )
    }

    #[test]
    fn test_domain_chat_message_to_wire() {
        // テスト項目: ドメインの ChatMessage が chat フレームに変換される
        // given (前提条件):
        let domain_msg = entity::ChatMessage::new(
            DisplayName::new("Bob".to_string()).unwrap(),
            "Hi!".to_string(),
        );

        // when (操作):
        let wire: dto::WireMessage = domain_msg.into();

        // then (期待する結果):
        assert_eq!(
            wire,
            dto::WireMessage::Chat(dto::ChatPayload {
                message: "Hi!".to_string(),
                sender: "Bob".to_string(),
            })
        );
    }

    #[test]
    fn test_domain_room_to_summary() {
        // テスト項目: Room が参加順の表示名リストを持つサマリーに変換される
        // given (前提条件):
        let room = entity::Room {
            id: RoomId::new("room1".to_string()).unwrap(),
            participants: vec![participant("u2", "Bob", false), participant("u1", "Alice", false)],
        };

        // when (操作):
        let summary: http::RoomSummaryDto = room.into();

        // then (期待する結果):
        assert_eq!(summary.id, "room1");
        assert_eq!(summary.participants, vec!["Bob", "Alice"]);
        assert_eq!(summary.participant_count, 2);
    }

    #[test]
    fn test_domain_room_to_detail() {
        // テスト項目: Room が参加者の詳細付きの DTO に変換される
        // given (前提条件):
        let guest = participant("g1", "Guest", true);
        let session_id = guest.session_id.to_string();
        let room = entity::Room {
            id: RoomId::new("lobby".to_string()).unwrap(),
            participants: vec![guest],
        };

        // when (操作):
        let detail: http::RoomDetailDto = room.into();

        // then (期待する結果):
        assert_eq!(detail.id, "lobby");
        assert_eq!(detail.participants.len(), 1);
        let p = &detail.participants[0];
        assert_eq!(p.session_id, session_id);
        assert_eq!(p.identity_id, "g1");
        assert_eq!(p.name, "Guest");
        assert!(p.is_guest);
        assert_eq!(p.connected_at, "2023-01-01T00:00:00+09:00");
    }
}
