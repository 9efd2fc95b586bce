//! WebSocket を使った ConnectionHandle 実装
//!
//! ## 設計ノート
//!
//! WebSocket の受付とソケットへの書き込みは UI 層（`ui/handler/websocket.rs`）が行います。
//! この実装は書き込みタスクへ繋がる `UnboundedSender` だけを保持するため、
//! ドメイン層はソケットの寿命を所有しません。
//! 書き込みタスクが終了した後の送信は `ConnectionError::Closed` になります。

use tokio::sync::mpsc;

use crate::domain::{ConnectionError, ConnectionHandle};

/// 書き込みタスクへのチャンネル
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// WebSocket 接続へのハンドル
#[derive(Debug, Clone)]
pub struct WebSocketConnection {
    sender: PusherChannel,
}

impl WebSocketConnection {
    pub fn new(sender: PusherChannel) -> Self {
        Self { sender }
    }

    /// ハンドルと、書き込みタスクが読み出す受信側を同時に作成
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl ConnectionHandle for WebSocketConnection {
    fn send(&self, frame: &str) -> Result<(), ConnectionError> {
        self.sender
            .send(frame.to_string())
            .map_err(|_| ConnectionError::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_reaches_receiver() {
        // テスト項目: 送信したフレームが受信側に届く
        // given (前提条件):
        let (connection, mut rx) = WebSocketConnection::channel();

        // when (操作):
        let result = connection.send("Hello");

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(rx.recv().await, Some("Hello".to_string()));
    }

    #[tokio::test]
    async fn test_send_after_receiver_dropped() {
        // テスト項目: 書き込みタスク終了後の送信は Closed エラーになる
        // given (前提条件):
        let (connection, rx) = WebSocketConnection::channel();
        drop(rx);

        // when (操作):
        let result = connection.send("Hello");

        // then (期待する結果):
        assert!(connection.is_closed());
        assert_eq!(result, Err(ConnectionError::Closed));
    }
}
