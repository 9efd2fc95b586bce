//! 接続ハンドル（ConnectionHandle）の実装
//!
//! - `websocket`: WebSocket 書き込みタスクへのチャンネルを使った実装

pub mod websocket;

pub use websocket::{PusherChannel, WebSocketConnection};
