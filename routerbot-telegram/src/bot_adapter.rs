//! Wraps teloxide::Bot and implements [`routerbot_core::Bot`]. Production code executes actions via Telegram;
//! tests can substitute another Bot impl.

use async_trait::async_trait;
use routerbot_core::{Action, Bot as CoreBot, MediaKind, Result, RouterError};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InputFile, InputPollOption};
use teloxide::RequestError;

/// Thin wrapper around teloxide::Bot that implements core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }

    async fn send_media(
        &self,
        chat_id: ChatId,
        kind: MediaKind,
        file: InputFile,
        caption: Option<String>,
    ) -> std::result::Result<(), RequestError> {
        match kind {
            MediaKind::Photo => {
                let mut req = self.bot.send_photo(chat_id, file);
                req.caption = caption;
                req.await?;
            }
            MediaKind::Video => {
                let mut req = self.bot.send_video(chat_id, file);
                req.caption = caption;
                req.await?;
            }
            MediaKind::Audio => {
                let mut req = self.bot.send_audio(chat_id, file);
                req.caption = caption;
                req.await?;
            }
            MediaKind::Voice => {
                let mut req = self.bot.send_voice(chat_id, file);
                req.caption = caption;
                req.await?;
            }
            MediaKind::Animation => {
                let mut req = self.bot.send_animation(chat_id, file);
                req.caption = caption;
                req.await?;
            }
            MediaKind::Document => {
                let mut req = self.bot.send_document(chat_id, file);
                req.caption = caption;
                req.await?;
            }
        }
        Ok(())
    }

    async fn send(&self, action: Action) -> std::result::Result<(), RequestError> {
        match action {
            Action::SendMessage {
                chat_id,
                text,
                keyboard,
            } => {
                let mut req = self.bot.send_message(chat_id, text);
                req.reply_markup = keyboard;
                req.await?;
            }
            Action::SendMedia {
                chat_id,
                kind,
                file,
                caption,
            } => self.send_media(chat_id, kind, file, caption).await?,
            Action::SendSticker { chat_id, sticker } => {
                self.bot.send_sticker(chat_id, sticker).await?;
            }
            Action::SendLocation {
                chat_id,
                latitude,
                longitude,
            } => {
                self.bot.send_location(chat_id, latitude, longitude).await?;
            }
            Action::SendContact {
                chat_id,
                phone_number,
                first_name,
                last_name,
            } => {
                let mut req = self.bot.send_contact(chat_id, phone_number, first_name);
                req.last_name = last_name;
                req.await?;
            }
            Action::SendPoll {
                chat_id,
                question,
                options,
            } => {
                let options: Vec<InputPollOption> =
                    options.into_iter().map(InputPollOption::new).collect();
                self.bot.send_poll(chat_id, question, options).await?;
            }
            Action::SendChatAction { chat_id, action } => {
                self.bot.send_chat_action(chat_id, action).await?;
            }
            Action::DeleteMessage {
                chat_id,
                message_id,
            } => {
                self.bot.delete_message(chat_id, message_id).await?;
            }
            Action::EditMessageText {
                chat_id,
                message_id,
                text,
                keyboard,
            } => {
                let mut req = self.bot.edit_message_text(chat_id, message_id, text);
                req.reply_markup = keyboard;
                req.await?;
            }
            Action::EditMessageCaption {
                chat_id,
                message_id,
                caption,
                keyboard,
            } => {
                let mut req = self.bot.edit_message_caption(chat_id, message_id);
                req.caption = Some(caption);
                req.reply_markup = keyboard;
                req.await?;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn execute(&self, action: Action) -> Result<()> {
        self.send(action)
            .await
            .map_err(|e| RouterError::Bot(e.to_string()))
    }
}
