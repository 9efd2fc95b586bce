//! Room-based WebSocket chat server.
//!
//! Participants connect to `/ws` with their credential claims and a room id,
//! and every chat frame they send is broadcast to the members of that room.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin hiroba-server
//! cargo run --bin hiroba-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use hiroba_server::{
    infrastructure::repository::InMemoryRoomRepository,
    ui::Server,
    usecase::{
        BroadcastUseCase, GetRoomDetailUseCase, GetRoomsUseCase, JoinRoomUseCase,
        LeaveRoomUseCase, SendMessageUseCase,
    },
};
use hiroba_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "hiroba-server")]
#[command(about = "Room-based WebSocket chat server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Repository
    // 2. UseCases
    // 3. Server

    // 1. Create Repository (in-memory room membership)
    let repository = Arc::new(InMemoryRoomRepository::new());

    // 2. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(repository.clone()));
    let leave_room_usecase = Arc::new(LeaveRoomUseCase::new(repository.clone()));
    let broadcast_usecase = Arc::new(BroadcastUseCase::new(repository.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        repository.clone(),
        broadcast_usecase,
    ));
    let get_rooms_usecase = Arc::new(GetRoomsUseCase::new(repository.clone()));
    let get_room_detail_usecase = Arc::new(GetRoomDetailUseCase::new(repository));

    // 3. Create and run the server
    let server = Server::new(
        join_room_usecase,
        leave_room_usecase,
        send_message_usecase,
        get_rooms_usecase,
        get_room_detail_usecase,
        Arc::new(SystemClock),
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
