//! UseCase: ルームへのブロードキャスト
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - BroadcastUseCase::execute() メソッド
//! - ルームの全メンバーへ参加順に 1 回ずつ送信されること
//!
//! ### なぜこのテストが必要か
//! - 一部の接続への送信失敗が他のメンバーへの配信を止めないことを保証する
//! - 存在しないルームへのブロードキャストが異常扱いにならないことを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：複数メンバーへの配信
//! - 異常系：途中のメンバーの接続が閉じている
//! - エッジケース：存在しないルーム

use std::sync::Arc;

use crate::domain::{RoomId, RoomRepository};

/// Per-call delivery counts. Informational only: failures are never retried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    pub delivered: usize,
    pub failed: usize,
}

/// ブロードキャストのユースケース
pub struct BroadcastUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl BroadcastUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// エンコード済みのフレームをルームの全メンバーへ送信する
    ///
    /// 送信対象は呼び出し時点のメンバーのスナップショット（参加順）。
    /// 各送信は独立しており、失敗してもメンバーシップは変更しない。
    pub async fn execute(&self, room_id: &RoomId, frame: &str) -> BroadcastReport {
        let Some(room) = self.repository.find_room(room_id).await else {
            tracing::warn!("No participants in room '{}'; broadcast dropped", room_id);
            return BroadcastReport::default();
        };

        let mut report = BroadcastReport::default();
        for participant in &room.participants {
            match participant.send(frame) {
                Ok(()) => {
                    report.delivered += 1;
                    tracing::debug!(
                        "Broadcasted to '{}' (session {}) in room '{}'",
                        participant.identity_id,
                        participant.session_id,
                        room_id
                    );
                }
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        "Failed to send to '{}' (session {}) in room '{}': {}",
                        participant.identity_id,
                        participant.session_id,
                        room_id,
                        e
                    );
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use mockall::Sequence;

    use super::*;
    use crate::{
        domain::{
            ConnectionError, DisplayName, IdentityId, Participant, SessionId, Timestamp,
            connection::MockConnectionHandle,
        },
        infrastructure::{connection::WebSocketConnection, repository::InMemoryRoomRepository},
    };

    const FRAME: &str = r#"{"type":"chat","payload":{"message":"hi","sender":"Alice"}}"#;

    fn participant_with(identity_id: &str, connection: MockConnectionHandle) -> Participant {
        Participant::new(
            SessionId::generate(),
            IdentityId::new(identity_id.to_string()).unwrap(),
            DisplayName::new(identity_id.to_uppercase()).unwrap(),
            false,
            Timestamp::new(1000),
            Arc::new(connection),
        )
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_broadcast_delivers_once_to_each_member_in_order() {
        // テスト項目: ルームの全メンバーに参加順で 1 回ずつ送信される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = BroadcastUseCase::new(repository.clone());
        let mut seq = Sequence::new();
        let mut members = Vec::new();
        for id in ["u1", "u2", "u3"] {
            let mut connection = MockConnectionHandle::new();
            connection
                .expect_send()
                .withf(|frame: &str| frame == FRAME)
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
            members.push(participant_with(id, connection));
        }
        for member in members {
            repository.join(member, room("room1")).await;
        }

        // when (操作):
        let report = usecase.execute(&room("room1"), FRAME).await;

        // then (期待する結果):
        assert_eq!(
            report,
            BroadcastReport {
                delivered: 3,
                failed: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_broadcast_continues_after_failed_send() {
        // テスト項目: 途中のメンバーへの送信が失敗しても残りのメンバーに配信される
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = BroadcastUseCase::new(repository.clone());

        let mut closed = MockConnectionHandle::new();
        closed
            .expect_send()
            .times(1)
            .returning(|_| Err(ConnectionError::Closed));
        let mut healthy = MockConnectionHandle::new();
        healthy.expect_send().times(1).returning(|_| Ok(()));

        let closed_member = participant_with("u1", closed);
        repository.join(closed_member.clone(), room("room1")).await;
        repository
            .join(participant_with("u2", healthy), room("room1"))
            .await;

        // when (操作):
        let report = usecase.execute(&room("room1"), FRAME).await;

        // then (期待する結果): 失敗したメンバーもメンバーシップに残る
        assert_eq!(
            report,
            BroadcastReport {
                delivered: 1,
                failed: 1,
            }
        );
        let snapshot = repository.find_room(&room("room1")).await.unwrap();
        assert_eq!(snapshot.participant_count(), 2);
        assert!(snapshot.participants[0].is_same_session(&closed_member));
    }

    #[tokio::test]
    async fn test_broadcast_to_nonexistent_room() {
        // テスト項目: 存在しないルームへのブロードキャストは何もせずに終わる
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = BroadcastUseCase::new(repository.clone());

        // when (操作):
        let report = usecase.execute(&room("nonexistent"), FRAME).await;

        // then (期待する結果):
        assert_eq!(report, BroadcastReport::default());
        assert!(repository.list_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn test_broadcast_through_websocket_connections() {
        // テスト項目: WebSocketConnection 経由で各メンバーのチャンネルにフレームが届く
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = BroadcastUseCase::new(repository.clone());
        let (alice_conn, mut alice_rx) = WebSocketConnection::channel();
        let (bob_conn, mut bob_rx) = WebSocketConnection::channel();
        for (id, conn) in [("u1", alice_conn), ("u2", bob_conn)] {
            let participant = Participant::new(
                SessionId::generate(),
                IdentityId::new(id.to_string()).unwrap(),
                DisplayName::new(id.to_string()).unwrap(),
                false,
                Timestamp::new(1000),
                Arc::new(conn),
            );
            repository.join(participant, room("room1")).await;
        }

        // when (操作):
        let report = usecase.execute(&room("room1"), FRAME).await;

        // then (期待する結果):
        assert_eq!(report.delivered, 2);
        assert_eq!(alice_rx.recv().await.as_deref(), Some(FRAME));
        assert_eq!(bob_rx.recv().await.as_deref(), Some(FRAME));
        assert!(alice_rx.try_recv().is_err());
    }
}
