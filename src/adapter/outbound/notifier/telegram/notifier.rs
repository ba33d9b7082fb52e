//! Telegram notification and command handling.
//!
//! Provides the [`TelegramNotifier`] for pushing monitor events to the admin
//! chat, and [`run_command_listener`] for answering bot commands.

use teloxide::prelude::*;
use teloxide::types::{BotCommand, ParseMode};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::port::outbound::notifier::{Event, Notifier};

use super::auth::command_response_for_message;
use super::command::bot_commands;
use super::control::{Reply, TelegramControl};
use super::format::format_event_message;

/// Configuration for the Telegram bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Admin chat: receives notifications and may run `/addproduk`.
    pub admin_chat_id: i64,
}

/// Telegram notifier that sends messages to the admin chat.
///
/// Implements the [`Notifier`] trait and spawns a background worker for
/// message delivery, so callers never wait on the Telegram API.
pub struct TelegramNotifier {
    /// Channel sender for queuing outbound notifications.
    sender: mpsc::UnboundedSender<Event>,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier and spawn the background worker.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(telegram_worker(config, receiver));
        Self { sender }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, event: Event) {
        if self.sender.send(event).is_err() {
            warn!("Telegram notifier channel closed");
        }
    }
}

/// Background worker that sends Telegram messages.
async fn telegram_worker(config: TelegramConfig, mut receiver: mpsc::UnboundedReceiver<Event>) {
    let bot = Bot::new(&config.bot_token);
    let chat_id = ChatId(config.admin_chat_id);

    info!(chat_id = config.admin_chat_id, "Telegram notifier started");

    while let Some(event) = receiver.recv().await {
        let text = format_event_message(&event);

        if let Err(e) = bot
            .send_message(chat_id, &text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            error!(error = %e, "Failed to send Telegram message");
        }
    }

    warn!("Telegram notifier worker shutting down");
}

/// Answer bot commands until the process is stopped.
///
/// Anyone may run `/start` and `/listproduk`; `/addproduk` is limited to the
/// admin chat.
pub async fn run_command_listener(config: TelegramConfig, control: TelegramControl) {
    let bot = Bot::new(&config.bot_token);
    let admin_chat = ChatId(config.admin_chat_id);

    // Register commands with Telegram so they appear in the "/" menu
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!(
        chat_id = config.admin_chat_id,
        "Telegram command listener started"
    );

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let control = control.clone();
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            if let Some(reply) =
                command_response_for_message(text, msg.chat.id, admin_chat, &control).await
            {
                if let Err(e) = send_reply(&bot, msg.chat.id, reply).await {
                    error!(error = %e, "Failed to send Telegram command response");
                }
            }

            respond(())
        }
    })
    .await;
}

async fn send_reply(
    bot: &Bot,
    chat_id: ChatId,
    reply: Reply,
) -> Result<(), teloxide::RequestError> {
    let request = bot.send_message(chat_id, reply.text);
    if reply.markdown {
        request.parse_mode(ParseMode::MarkdownV2).await?;
    } else {
        request.await?;
    }
    Ok(())
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands: Vec<BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
