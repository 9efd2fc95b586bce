//! UseCase: ルーム参加処理

use std::sync::Arc;

use crate::domain::{JoinOutcome, Participant, RoomId, RoomRepository};

/// ルーム参加のユースケース
pub struct JoinRoomUseCase {
    repository: Arc<dyn RoomRepository>,
}

impl JoinRoomUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 参加者を `room_id` に追加する
    ///
    /// 既に別のルーム（または別セッションで同じルーム）にいる identity は、
    /// 先にそのメンバーシップが外される。他の参加者への通知は行わない。
    pub async fn execute(&self, participant: Participant, room_id: RoomId) -> JoinOutcome {
        let session_id = participant.session_id;
        let identity_id = participant.identity_id.clone();
        let outcome = self.repository.join(participant, room_id.clone()).await;

        match &outcome {
            JoinOutcome::Joined => {
                tracing::info!(
                    "Participant '{}' (session {}) joined room '{}'",
                    identity_id,
                    session_id,
                    room_id
                );
            }
            JoinOutcome::Moved {
                previous_room,
                previous_session,
            } => {
                tracing::warn!(
                    "Participant '{}' joined room '{}' while still in room '{}' (session {}); previous membership removed",
                    identity_id,
                    room_id,
                    previous_room,
                    previous_session
                );
            }
        }

        outcome
    }
}
