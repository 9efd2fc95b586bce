//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `RoomMembership` を 1 つの Mutex で保護し、join / leave / スナップショット取得を
//! すべて同じロックの下で行います。

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    IdentityId, JoinOutcome, LeaveOutcome, Participant, Room, RoomId, RoomMembership,
    RoomRepository,
};

/// インメモリ Room Repository 実装
#[derive(Default)]
pub struct InMemoryRoomRepository {
    membership: Mutex<RoomMembership>,
}

impl InMemoryRoomRepository {
    /// 空の InMemoryRoomRepository を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 既存のメンバーシップから作成
    pub fn with_membership(membership: RoomMembership) -> Self {
        Self {
            membership: Mutex::new(membership),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join(&self, participant: Participant, room_id: RoomId) -> JoinOutcome {
        let mut membership = self.membership.lock().await;
        membership.join(participant, room_id)
    }

    async fn leave(&self, participant: &Participant) -> LeaveOutcome {
        let mut membership = self.membership.lock().await;
        membership.leave(participant)
    }

    async fn room_of(&self, identity_id: &IdentityId) -> Option<RoomId> {
        let membership = self.membership.lock().await;
        membership.room_of(identity_id).cloned()
    }

    async fn current_room(&self, participant: &Participant) -> Option<RoomId> {
        let membership = self.membership.lock().await;
        membership.current_room(participant).cloned()
    }

    async fn find_room(&self, room_id: &RoomId) -> Option<Room> {
        let membership = self.membership.lock().await;
        membership.room(room_id)
    }

    async fn list_rooms(&self) -> Vec<Room> {
        let membership = self.membership.lock().await;
        membership.rooms()
    }
}
