//! Handler traits and dispatch outcome.

use async_trait::async_trait;
use teloxide::types::{ChatId, Update};

use crate::context::ChatContext;
use crate::error::Result;

/// Handler registered for a single chat. The router passes it every update whose chat id equals [`ChatLogic::chat_id`].
#[async_trait]
pub trait ChatLogic: Send + Sync {
    /// Chat this logic is registered for. Read once when the router is built.
    fn chat_id(&self) -> ChatId;

    /// Processes an update for this chat. `ctx` targets [`ChatLogic::chat_id`].
    async fn process_update(&self, ctx: &ChatContext, update: &Update) -> Result<()>;
}

/// Fallback handler for chats without a registered [`ChatLogic`].
/// The current chat id arrives with `ctx`; implementations keep no per-update state.
#[async_trait]
pub trait DefaultLogic: Send + Sync {
    async fn process_update(&self, ctx: &ChatContext, update: &Update) -> Result<()>;
}

/// What the router did with one update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Passed to the logic registered for this chat.
    Logic(ChatId),
    /// No registration matched; passed to the default logic.
    Default(ChatId),
    /// No registration matched and no default logic is set.
    Dropped(ChatId),
    /// The update carries no chat or user id.
    Unroutable,
}

impl Dispatch {
    pub fn chat_id(&self) -> Option<ChatId> {
        match self {
            Dispatch::Logic(id) | Dispatch::Default(id) | Dispatch::Dropped(id) => Some(*id),
            Dispatch::Unroutable => None,
        }
    }
}
