//! UseCase: ルーム退出処理

use std::sync::Arc;

use crate::domain::{LeaveOutcome, Participant, RoomRepository};

/// ルーム退出のユースケース
pub struct LeaveRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl LeaveRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 参加者を現在のルームから外す
    ///
    /// 参加していない参加者の退出は異常としてログに残すだけで、状態は変えない。
    /// 何度呼んでも安全。
    pub async fn execute(&self, participant: &Participant) -> LeaveOutcome {
        let outcome = self.repository.leave(participant).await;

        match &outcome {
            LeaveOutcome::Left {
                room_id,
                room_closed,
            } => {
                tracing::info!(
                    "Participant '{}' (session {}) left room '{}'",
                    participant.identity_id,
                    participant.session_id,
                    room_id
                );
                if *room_closed {
                    tracing::debug!("Room '{}' is empty and was removed", room_id);
                }
            }
            LeaveOutcome::NotJoined => {
                tracing::warn!(
                    "Participant '{}' (session {}) asked to leave but is not in any room",
                    participant.identity_id,
                    participant.session_id
                );
            }
            LeaveOutcome::StaleSession { room_id } => {
                tracing::warn!(
                    "Session {} of '{}' asked to leave, but room '{}' is held by a newer session; ignoring",
                    participant.session_id,
                    participant.identity_id,
                    room_id
                );
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            DisplayName, IdentityId, RoomId, SessionId, Timestamp,
            connection::MockConnectionHandle,
        },
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn participant(identity_id: &str, name: &str) -> Participant {
        Participant::new(
            SessionId::generate(),
            IdentityId::new(identity_id.to_string()).unwrap(),
            DisplayName::new(name.to_string()).unwrap(),
            false,
            Timestamp::new(1000),
            Arc::new(MockConnectionHandle::new()),
        )
    }

    fn room(id: &str) -> RoomId {
        RoomId::new(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_leave_room_success() {
        // テスト項目: 参加中の参加者が退出でき、空になったルームは消える
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = LeaveRoomUseCase::new(repository.clone());
        let alice = participant("u1", "Alice");
        repository.join(alice.clone(), room("room1")).await;

        // when (操作):
        let outcome = usecase.execute(&alice).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            LeaveOutcome::Left {
                room_id: room("room1"),
                room_closed: true,
            }
        );
        assert!(repository.list_rooms().await.is_empty());
    }

    #[tokio::test]
    async fn test_leave_room_never_joined() {
        // テスト項目: 参加していないルームからの退出は例外にならず、状態も変わらない
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = LeaveRoomUseCase::new(repository.clone());
        repository.join(participant("u1", "Alice"), room("room1")).await;
        let carol = participant("u3", "Carol");

        // when (操作):
        let outcome = usecase.execute(&carol).await;

        // then (期待する結果):
        assert_eq!(outcome, LeaveOutcome::NotJoined);
        let rooms = repository.list_rooms().await;
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].participant_count(), 1);
    }

    #[tokio::test]
    async fn test_leave_room_twice() {
        // テスト項目: 2 回目の退出は何もしない
        // given (前提条件):
        let repository = Arc::new(InMemoryRoomRepository::new());
        let usecase = LeaveRoomUseCase::new(repository.clone());
        let alice = participant("u1", "Alice");
        let bob = participant("u2", "Bob");
        repository.join(alice.clone(), room("room1")).await;
        repository.join(bob.clone(), room("room1")).await;
        usecase.execute(&alice).await;

        // when (操作):
        let outcome = usecase.execute(&alice).await;

        // then (期待する結果):
        assert_eq!(outcome, LeaveOutcome::NotJoined);
        let snapshot = repository.find_room(&room("room1")).await.unwrap();
        assert_eq!(snapshot.participant_count(), 1);
        assert!(snapshot.participants[0].is_same_session(&bob));
    }
}
