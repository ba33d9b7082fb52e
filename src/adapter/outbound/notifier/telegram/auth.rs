//! Authorization for Telegram command handling.

use teloxide::types::ChatId;
use tracing::{debug, warn};

use super::command::{parse_command, CommandParseError};
use super::control::{Reply, TelegramControl};

pub const NOT_ADMIN: &str = "Kamu bukan admin 😅";

/// Process a message and return a reply if it is a known command.
///
/// Returns `None` for:
/// - Messages that are not commands (don't start with `/`)
/// - Unknown commands
///
/// Returns `Some(reply)` for:
/// - Known commands the chat may run (the command's own reply)
/// - Admin-only commands from any other chat (a rejection, nothing executed)
pub async fn command_response_for_message(
    text: &str,
    incoming_chat: ChatId,
    admin_chat: ChatId,
    control: &TelegramControl,
) -> Option<Reply> {
    let command = match parse_command(text) {
        Ok(command) => command,
        Err(CommandParseError::NotACommand) => return None,
        Err(err) => {
            debug!(chat_id = incoming_chat.0, error = %err, "Ignoring Telegram message");
            return None;
        }
    };

    if command.requires_admin() && !is_authorized_chat(incoming_chat, admin_chat) {
        return Some(Reply::plain(NOT_ADMIN));
    }

    Some(control.execute(command).await)
}

/// Check if a chat is authorized to run admin commands.
fn is_authorized_chat(incoming_chat: ChatId, admin_chat: ChatId) -> bool {
    if incoming_chat == admin_chat {
        return true;
    }

    warn!(
        chat_id = incoming_chat.0,
        "Rejecting admin command from unauthorized chat"
    );
    false
}
