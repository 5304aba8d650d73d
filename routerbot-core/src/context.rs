//! Per-update outbound context.
//!
//! [`ChatContext`] binds a chat id to a [`Bot`] and exposes fire-and-log helpers: every helper builds an
//! [`Action`] for that chat, executes it once, and logs a failure instead of returning it.

use std::fmt;
use std::sync::Arc;

use teloxide::types::{ChatAction, ChatId, InlineKeyboardMarkup, InputFile, MessageId, ReplyMarkup};
use tracing::{debug, error};

use crate::bot::{Action, Bot, MediaKind};

/// Outbound handle for one chat. Built by the router for each update; cheap to clone.
#[derive(Clone)]
pub struct ChatContext {
    chat_id: ChatId,
    bot: Arc<dyn Bot>,
}

impl fmt::Debug for ChatContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatContext")
            .field("chat_id", &self.chat_id)
            .finish_non_exhaustive()
    }
}

impl ChatContext {
    pub fn new(chat_id: ChatId, bot: Arc<dyn Bot>) -> Self {
        Self { chat_id, bot }
    }

    /// Chat every helper of this context targets.
    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    /// Underlying transport, for calls not covered by the helpers.
    pub fn bot(&self) -> &Arc<dyn Bot> {
        &self.bot
    }

    /// Executes the action and logs a failure. Never retries.
    async fn dispatch(&self, action: Action) {
        let name = action.name();
        let message_id = action.message_id().map(|id| id.0);
        debug!(chat_id = self.chat_id.0, action = name, "Executing outbound action");
        if let Err(e) = self.bot.execute(action).await {
            error!(
                chat_id = self.chat_id.0,
                action = name,
                message_id = ?message_id,
                error = %e,
                "Outbound action failed"
            );
        }
    }

    /// Sends a plain text message.
    pub async fn send_message(&self, text: &str) {
        self.dispatch(Action::SendMessage {
            chat_id: self.chat_id,
            text: text.to_string(),
            keyboard: None,
        })
        .await
    }

    /// Sends a text message with a reply or inline keyboard.
    pub async fn send_message_with_keyboard(&self, text: &str, keyboard: impl Into<ReplyMarkup>) {
        self.dispatch(Action::SendMessage {
            chat_id: self.chat_id,
            text: text.to_string(),
            keyboard: Some(keyboard.into()),
        })
        .await
    }

    async fn send_media(&self, kind: MediaKind, file: InputFile, caption: Option<&str>) {
        self.dispatch(Action::SendMedia {
            chat_id: self.chat_id,
            kind,
            file,
            caption: caption.map(str::to_string),
        })
        .await
    }

    pub async fn send_photo(&self, photo: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Photo, photo, caption).await
    }

    pub async fn send_video(&self, video: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Video, video, caption).await
    }

    pub async fn send_audio(&self, audio: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Audio, audio, caption).await
    }

    pub async fn send_voice(&self, voice: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Voice, voice, caption).await
    }

    /// Sends an animation (GIF or silent H.264 video).
    pub async fn send_animation(&self, animation: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Animation, animation, caption).await
    }

    pub async fn send_document(&self, document: InputFile, caption: Option<&str>) {
        self.send_media(MediaKind::Document, document, caption).await
    }

    pub async fn send_sticker(&self, sticker: InputFile) {
        self.dispatch(Action::SendSticker {
            chat_id: self.chat_id,
            sticker,
        })
        .await
    }

    pub async fn send_location(&self, latitude: f64, longitude: f64) {
        self.dispatch(Action::SendLocation {
            chat_id: self.chat_id,
            latitude,
            longitude,
        })
        .await
    }

    pub async fn send_contact(&self, phone_number: &str, first_name: &str, last_name: Option<&str>) {
        self.dispatch(Action::SendContact {
            chat_id: self.chat_id,
            phone_number: phone_number.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.map(str::to_string),
        })
        .await
    }

    pub async fn send_poll<I, S>(&self, question: &str, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dispatch(Action::SendPoll {
            chat_id: self.chat_id,
            question: question.to_string(),
            options: options.into_iter().map(Into::into).collect(),
        })
        .await
    }

    /// Shows a status such as "typing" or "uploading photo" in the chat.
    pub async fn send_chat_action(&self, action: ChatAction) {
        self.dispatch(Action::SendChatAction {
            chat_id: self.chat_id,
            action,
        })
        .await
    }

    pub async fn delete_message(&self, message_id: MessageId) {
        self.dispatch(Action::DeleteMessage {
            chat_id: self.chat_id,
            message_id,
        })
        .await
    }

    pub async fn edit_message_text(
        &self,
        message_id: MessageId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) {
        self.dispatch(Action::EditMessageText {
            chat_id: self.chat_id,
            message_id,
            text: text.to_string(),
            keyboard,
        })
        .await
    }

    /// Replaces the caption of a media message.
    pub async fn edit_message_caption(
        &self,
        message_id: MessageId,
        caption: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) {
        self.dispatch(Action::EditMessageCaption {
            chat_id: self.chat_id,
            message_id,
            caption: caption.to_string(),
            keyboard,
        })
        .await
    }
}
