//! Outbound transport abstraction.
//!
//! [`Bot`] is transport-agnostic: it executes one [`Action`] at a time. The Telegram implementation
//! lives in routerbot-telegram; tests substitute recording or failing implementations.

use async_trait::async_trait;
use teloxide::types::{ChatAction, ChatId, InlineKeyboardMarkup, InputFile, MessageId, ReplyMarkup};

use crate::error::Result;

/// Kind of media file carried by [`Action::SendMedia`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
    Audio,
    Voice,
    Animation,
    Document,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Voice => "voice",
            MediaKind::Animation => "animation",
            MediaKind::Document => "document",
        }
    }
}

/// One outbound Bot API call, always targeted at a single chat.
#[derive(Debug, Clone)]
pub enum Action {
    SendMessage {
        chat_id: ChatId,
        text: String,
        keyboard: Option<ReplyMarkup>,
    },
    SendMedia {
        chat_id: ChatId,
        kind: MediaKind,
        file: InputFile,
        caption: Option<String>,
    },
    SendSticker {
        chat_id: ChatId,
        sticker: InputFile,
    },
    SendLocation {
        chat_id: ChatId,
        latitude: f64,
        longitude: f64,
    },
    SendContact {
        chat_id: ChatId,
        phone_number: String,
        first_name: String,
        last_name: Option<String>,
    },
    SendPoll {
        chat_id: ChatId,
        question: String,
        options: Vec<String>,
    },
    SendChatAction {
        chat_id: ChatId,
        action: ChatAction,
    },
    DeleteMessage {
        chat_id: ChatId,
        message_id: MessageId,
    },
    /// Only inline keyboards can be attached to edited messages.
    EditMessageText {
        chat_id: ChatId,
        message_id: MessageId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    EditMessageCaption {
        chat_id: ChatId,
        message_id: MessageId,
        caption: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
}

impl Action {
    /// Target chat of this action.
    pub fn chat_id(&self) -> ChatId {
        match self {
            Action::SendMessage { chat_id, .. }
            | Action::SendMedia { chat_id, .. }
            | Action::SendSticker { chat_id, .. }
            | Action::SendLocation { chat_id, .. }
            | Action::SendContact { chat_id, .. }
            | Action::SendPoll { chat_id, .. }
            | Action::SendChatAction { chat_id, .. }
            | Action::DeleteMessage { chat_id, .. }
            | Action::EditMessageText { chat_id, .. }
            | Action::EditMessageCaption { chat_id, .. } => *chat_id,
        }
    }

    /// Message this action refers to, for deletes and edits.
    pub fn message_id(&self) -> Option<MessageId> {
        match self {
            Action::DeleteMessage { message_id, .. }
            | Action::EditMessageText { message_id, .. }
            | Action::EditMessageCaption { message_id, .. } => Some(*message_id),
            _ => None,
        }
    }

    /// Short name used in log events (e.g. `send_photo`, `edit_message_text`).
    pub fn name(&self) -> &'static str {
        match self {
            Action::SendMessage { .. } => "send_message",
            Action::SendMedia { kind, .. } => match kind {
                MediaKind::Photo => "send_photo",
                MediaKind::Video => "send_video",
                MediaKind::Audio => "send_audio",
                MediaKind::Voice => "send_voice",
                MediaKind::Animation => "send_animation",
                MediaKind::Document => "send_document",
            },
            Action::SendSticker { .. } => "send_sticker",
            Action::SendLocation { .. } => "send_location",
            Action::SendContact { .. } => "send_contact",
            Action::SendPoll { .. } => "send_poll",
            Action::SendChatAction { .. } => "send_chat_action",
            Action::DeleteMessage { .. } => "delete_message",
            Action::EditMessageText { .. } => "edit_message_text",
            Action::EditMessageCaption { .. } => "edit_message_caption",
        }
    }
}

/// Abstraction for executing outbound actions. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Executes one action against the transport.
    async fn execute(&self, action: Action) -> Result<()>;
}
