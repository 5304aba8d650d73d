//! Builder for the Telegram router: validates token and bot name, wires logics to a teloxide-backed router.

use std::sync::Arc;

use routerbot_core::{Bot as CoreBot, ChatLogic, DefaultLogic, Result, RouterError};
use tracing::{error, info, instrument};
use update_router::RouterBot;

use crate::bot_adapter::TelegramBotAdapter;
use crate::config::TelegramConfig;
use crate::runner::run_polling;

/// Collects token, bot name and logics, then builds a [`TelegramRouter`] or starts polling directly.
#[derive(Default)]
pub struct TgBotBuilder {
    token: Option<String>,
    bot_name: Option<String>,
    api_url: Option<String>,
    logics: Option<Vec<Arc<dyn ChatLogic>>>,
    default_logic: Option<Arc<dyn DefaultLogic>>,
}

impl TgBotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a loaded config: token, bot name and API URL.
    pub fn from_config(config: &TelegramConfig) -> Self {
        let mut builder = Self::new()
            .token(config.bot_token.clone())
            .bot_name(config.bot_name.clone());
        builder.api_url = config.telegram_api_url.clone();
        builder
    }

    /// Bot token from @BotFather.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Bot username (without @).
    pub fn bot_name(mut self, bot_name: impl Into<String>) -> Self {
        self.bot_name = Some(bot_name.into());
        self
    }

    /// Bot API server URL, e.g. a local Bot API server. Unparsable URLs fall back to the default server.
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Replaces the registered logics. Order matters: the first logic for a chat id wins.
    pub fn register_logic(mut self, logics: Vec<Arc<dyn ChatLogic>>) -> Self {
        self.logics = Some(logics);
        self
    }

    /// Appends one logic to the registered list.
    pub fn add_logic(mut self, logic: Arc<dyn ChatLogic>) -> Self {
        self.logics.get_or_insert_with(Vec::new).push(logic);
        self
    }

    /// Sets the logic for chats without a registered logic.
    pub fn register_default_logic(mut self, default_logic: Arc<dyn DefaultLogic>) -> Self {
        self.default_logic = Some(default_logic);
        self
    }

    /// Validates and builds the router without starting the polling session.
    pub fn build(self) -> Result<TelegramRouter> {
        let (token, bot_name) = self.validate()?;

        let bot = teloxide_bot(&token, self.api_url.as_deref());
        let adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
        let router = RouterBot::new(bot_name, adapter, self.logics, self.default_logic);

        Ok(TelegramRouter {
            bot,
            router: Arc::new(router),
        })
    }

    /// Validates, builds, and runs long polling until shutdown (Ctrl-C).
    #[instrument(skip(self))]
    pub async fn start(self) -> anyhow::Result<()> {
        let router = self.build()?;
        router.run().await
    }

    /// Token is checked first; blank strings count as missing.
    fn validate(&self) -> Result<(String, String)> {
        let token = match self.token.as_deref() {
            Some(t) if !t.trim().is_empty() => t.to_string(),
            _ => return Err(RouterError::MissingToken),
        };
        let bot_name = match self.bot_name.as_deref() {
            Some(n) if !n.trim().is_empty() => n.to_string(),
            _ => return Err(RouterError::MissingBotName),
        };
        Ok((token, bot_name))
    }
}

/// Creates the teloxide Bot, pointing it at `api_url` when that parses.
fn teloxide_bot(token: &str, api_url: Option<&str>) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => {
                info!(url = %url_str, "Using custom Telegram API URL");
                bot.set_api_url(url)
            }
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// A validated router bound to a teloxide Bot, ready to poll.
pub struct TelegramRouter {
    bot: teloxide::Bot,
    router: Arc<RouterBot>,
}

impl TelegramRouter {
    pub fn bot_name(&self) -> &str {
        self.router.bot_name()
    }

    pub fn token(&self) -> &str {
        self.bot.token()
    }

    /// Telegram API URL requests are sent to.
    pub fn api_url(&self) -> reqwest::Url {
        self.bot.api_url()
    }

    pub fn router(&self) -> &Arc<RouterBot> {
        &self.router
    }

    /// Runs long polling until shutdown.
    pub async fn run(self) -> anyhow::Result<()> {
        run_polling(self.bot, self.router).await
    }
}
