//! UI layer: HTTP / WebSocket endpoints.

mod handler;
mod server;
mod signal;
mod state;

pub use server::Server;
pub use state::AppState;
