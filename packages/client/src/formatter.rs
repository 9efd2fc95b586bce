//! Message formatting utilities for client display.

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Banner printed once a session is established
    pub fn format_welcome(name: &str, room_id: &str) -> String {
        format!(
            "\nYou are '{}' in room '{}'. Type messages and press Enter to send. Press Ctrl+C to exit.\n",
            name, room_id
        )
    }

    /// Format a chat message as `sender: message`
    pub fn format_chat_message(sender: &str, message: &str) -> String {
        format!("\n{}: {}\n", sender, message)
    }
}
