//! UseCase: チャットメッセージ処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - 送信者のルームを解決し、chat フレームを組み立ててブロードキャストすること
//!
//! ### なぜこのテストが必要か
//! - 送信者自身を含むルームの全員に、認証済みの表示名で配信されることを保証する
//! - ルームに参加していない送信者のメッセージが破棄されることを確認する
//!
//! ### どのような状況を想定しているか
//! - 正常系：2 人のルームで 1 人がメッセージを送信
//! - 異常系：未参加の参加者からのメッセージ
//! - エッジケース：別セッションに置き換えられた古いセッションからのメッセージ

use std::sync::Arc;

use crate::{
    domain::{ChatMessage, Participant, RoomRepository},
    infrastructure::dto::websocket::WireMessage,
};

use super::broadcast::{BroadcastReport, BroadcastUseCase};

/// チャットメッセージ処理のユースケース
pub struct SendMessageUseCase {
    repository: Arc<dyn RoomRepository>,
    broadcast: Arc<BroadcastUseCase>,
}

impl SendMessageUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, broadcast: Arc<BroadcastUseCase>) -> Self {
        Self {
            repository,
            broadcast,
        }
    }

    /// 送信者のルームへ chat フレームをブロードキャストする
    ///
    /// 送信者自身も受信対象に含まれる。
    ///
    /// # Returns
    ///
    /// * `Some(BroadcastReport)` - ブロードキャストした
    /// * `None` - 送信者がルームにいないため破棄した
    pub async fn execute(
        &self,
        sender: &Participant,
        raw_text: String,
    ) -> Option<BroadcastReport> {
        let Some(room_id) = self.repository.current_room(sender).await else {
            tracing::warn!(
                "Participant '{}' (session {}) sent a message but is not in any room; dropped",
                sender.identity_id,
                sender.session_id
            );
            return None;
        };

        let message = ChatMessage::new(sender.display_name.clone(), raw_text);
        let frame = match WireMessage::from(message).encode() {
            Ok(frame) => frame,
            Err(e) => {
                tracing::error!("Failed to encode chat message: {}", e);
                return None;
            }
        };

        tracing::info!(
            "Broadcasting message from '{}' to room '{}'",
            sender.display_name,
            room_id
        );
        Some(self.broadcast.execute(&room_id, &frame).await)
    }
}
