//! UseCase 層
//!
//! ルームへの参加・退出、ブロードキャスト、チャットメッセージ処理、
//! ルーム情報の参照を提供します。

mod broadcast;
mod error;
mod get_room_detail;
mod get_rooms;
mod join_room;
mod leave_room;
mod send_message;

pub use broadcast::{BroadcastReport, BroadcastUseCase};
pub use error::GetRoomDetailError;
pub use get_room_detail::GetRoomDetailUseCase;
pub use get_rooms::GetRoomsUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_message::SendMessageUseCase;
