//! Repository trait 定義
//!
//! ドメイン層が必要とするルームメンバーシップへのアクセスを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{IdentityId, JoinOutcome, LeaveOutcome, Participant, Room, RoomId};

/// Room Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
/// 各メソッドは一貫したメンバーシップのスナップショットに対して動作すること。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 参加者をルームに追加（既に別ルームにいる identity は先に退出させる）
    async fn join(&self, participant: Participant, room_id: RoomId) -> JoinOutcome;

    /// 参加者を現在のルームから削除
    async fn leave(&self, participant: &Participant) -> LeaveOutcome;

    /// identity が現在いるルームを取得
    async fn room_of(&self, identity_id: &IdentityId) -> Option<RoomId>;

    /// このセッション自身が参加しているルームを取得
    async fn current_room(&self, participant: &Participant) -> Option<RoomId>;

    /// ルームのスナップショットを取得（存在しなければ None）
    async fn find_room(&self, room_id: &RoomId) -> Option<Room>;

    /// 全ルームのスナップショットを取得（ルーム ID 順）
    async fn list_rooms(&self) -> Vec<Room>;
}
