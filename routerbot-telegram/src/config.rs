//! 路由框架最小配置：token、bot 名称、可选 API URL 与日志路径。
//! 与外部交互：从环境变量 BOT_TOKEN、BOT_NAME、TELEGRAM_API_URL（或 TELOXIDE_API_URL）、LOG_FILE 加载。

use anyhow::Result;
use std::env;

/// Telegram 路由最小配置（仅接入、身份与日志）。
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub bot_name: String,
    pub telegram_api_url: Option<String>,
    pub log_file: Option<String>,
}

impl TelegramConfig {
    /// 从环境变量加载：BOT_TOKEN、BOT_NAME 必填，TELEGRAM_API_URL、LOG_FILE 可选。
    pub fn from_env() -> Result<Self> {
        Self::load(None, None)
    }

    /// 同 [`TelegramConfig::from_env`]，但传入的 `token` / `bot_name`（如来自命令行参数）优先于环境变量。
    pub fn load(token: Option<String>, bot_name: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let bot_name = match bot_name {
            Some(n) => n,
            None => env::var("BOT_NAME").map_err(|_| anyhow::anyhow!("BOT_NAME not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").ok();
        Ok(Self {
            bot_token,
            bot_name,
            telegram_api_url,
            log_file,
        })
    }

    /// 使用给定 token 与名称构造，其余为 None。
    pub fn with_token(bot_token: String, bot_name: String) -> Self {
        Self {
            bot_token,
            bot_name,
            telegram_api_url: None,
            log_file: None,
        }
    }
}
