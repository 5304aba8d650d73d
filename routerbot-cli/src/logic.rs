//! Demo logics registered by the `routerbot` binary.

use async_trait::async_trait;
use routerbot_core::{ChatContext, ChatLogic, DefaultLogic, Result};
use teloxide::types::{ChatAction, ChatId, Update, UpdateKind};
use tracing::info;

/// Text of a plain message update, if any.
fn message_text(update: &Update) -> Option<&str> {
    match &update.kind {
        UpdateKind::Message(m) => m.text(),
        _ => None,
    }
}

/// Echoes text messages back into its chat.
pub struct EchoLogic {
    chat_id: ChatId,
}

impl EchoLogic {
    pub fn new(chat_id: i64) -> Self {
        Self {
            chat_id: ChatId(chat_id),
        }
    }
}

#[async_trait]
impl ChatLogic for EchoLogic {
    fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    async fn process_update(&self, ctx: &ChatContext, update: &Update) -> Result<()> {
        if let Some(text) = message_text(update) {
            info!(chat_id = ctx.chat_id().0, message_content = %text, "Echoing message");
            ctx.send_chat_action(ChatAction::Typing).await;
            ctx.send_message(&format!("Echo: {}", text)).await;
        }
        Ok(())
    }
}

/// Tells chats without a registered logic their id, so it can be passed to `--chat`.
pub struct UnknownChatLogic;

#[async_trait]
impl DefaultLogic for UnknownChatLogic {
    async fn process_update(&self, ctx: &ChatContext, update: &Update) -> Result<()> {
        if message_text(update).is_some() {
            info!(chat_id = ctx.chat_id().0, "Message from unregistered chat");
            ctx.send_message(&format!(
                "This chat is not registered. Chat id: {}",
                ctx.chat_id().0
            ))
            .await;
        }
        Ok(())
    }
}
