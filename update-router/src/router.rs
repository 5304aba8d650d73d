//! Router: dispatches each update to the logic registered for its chat, or to the default logic.

use std::collections::HashMap;
use std::sync::Arc;

use routerbot_core::{Bot, ChatContext, ChatLogic, DefaultLogic, Dispatch};
use teloxide::types::{ChatId, Update};
use tracing::{debug, error, info, instrument, warn};

use crate::extract::{chat_id_of, update_kind};

/// Per-chat router. Immutable after construction; shared across dispatcher tasks behind an `Arc`.
pub struct RouterBot {
    bot_name: String,
    bot: Arc<dyn Bot>,
    logics: Vec<Arc<dyn ChatLogic>>,
    /// chat id -> index into `logics` of the first logic registered for it.
    index: HashMap<ChatId, usize>,
    default_logic: Option<Arc<dyn DefaultLogic>>,
}

impl RouterBot {
    /// Creates a router. `logics: None` is treated as an empty registration list.
    /// When two logics share a chat id the first one receives all updates for it.
    pub fn new(
        bot_name: impl Into<String>,
        bot: Arc<dyn Bot>,
        logics: Option<Vec<Arc<dyn ChatLogic>>>,
        default_logic: Option<Arc<dyn DefaultLogic>>,
    ) -> Self {
        let logics = logics.unwrap_or_default();
        let mut index = HashMap::with_capacity(logics.len());
        for (i, logic) in logics.iter().enumerate() {
            let chat_id = logic.chat_id();
            if let Some(first) = index.get(&chat_id) {
                warn!(
                    chat_id = chat_id.0,
                    first_index = *first,
                    shadowed_index = i,
                    "Duplicate logic registration; first registration wins"
                );
                continue;
            }
            index.insert(chat_id, i);
        }

        let bot_name = bot_name.into();
        info!(
            bot_name = %bot_name,
            logics = logics.len(),
            has_default = default_logic.is_some(),
            "Router created"
        );

        Self {
            bot_name,
            bot,
            logics,
            index,
            default_logic,
        }
    }

    /// Bot username this router was built for.
    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Registered logics in registration order, including shadowed duplicates.
    pub fn logics(&self) -> &[Arc<dyn ChatLogic>] {
        &self.logics
    }

    pub fn has_default_logic(&self) -> bool {
        self.default_logic.is_some()
    }

    /// Logic that receives updates for `chat_id`, if any.
    pub fn logic_for(&self, chat_id: ChatId) -> Option<&Arc<dyn ChatLogic>> {
        self.index.get(&chat_id).map(|&i| &self.logics[i])
    }

    /// Routes one update. Handler errors are logged, never returned.
    #[instrument(skip(self, update), fields(update_id = ?update.id, update_kind = update_kind(update)))]
    pub async fn on_update(&self, update: &Update) -> Dispatch {
        let Some(chat_id) = chat_id_of(update) else {
            debug!("step: update carries no chat id, ignored");
            return Dispatch::Unroutable;
        };

        if let Some(logic) = self.logic_for(chat_id) {
            debug!(chat_id = chat_id.0, "step: routing to registered logic");
            let ctx = ChatContext::new(chat_id, Arc::clone(&self.bot));
            if let Err(e) = logic.process_update(&ctx, update).await {
                error!(chat_id = chat_id.0, error = %e, "Chat logic failed");
            }
            return Dispatch::Logic(chat_id);
        }

        match &self.default_logic {
            Some(default_logic) => {
                debug!(chat_id = chat_id.0, "step: routing to default logic");
                let ctx = ChatContext::new(chat_id, Arc::clone(&self.bot));
                if let Err(e) = default_logic.process_update(&ctx, update).await {
                    error!(chat_id = chat_id.0, error = %e, "Default logic failed");
                }
                Dispatch::Default(chat_id)
            }
            None => {
                debug!(chat_id = chat_id.0, "step: no logic for chat, update dropped");
                Dispatch::Dropped(chat_id)
            }
        }
    }
}
