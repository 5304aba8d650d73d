//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use routerbot_telegram::TelegramConfig;

#[derive(Parser, Debug)]
#[command(name = "routerbot")]
#[command(about = "Telegram per-chat router CLI", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the router: echo logic for every --chat, default logic for all other chats.
    /// Config comes from env; --token / --bot-name override BOT_TOKEN / BOT_NAME.
    Run {
        #[arg(short, long)]
        token: Option<String>,
        #[arg(short, long)]
        bot_name: Option<String>,
        /// Chat id to register an echo logic for; repeatable.
        #[arg(short, long = "chat", value_name = "CHAT_ID", allow_negative_numbers = true)]
        chats: Vec<i64>,
        /// Log file path; overrides LOG_FILE.
        #[arg(long)]
        log_file: Option<String>,
    },
}

/// Loads TelegramConfig from environment. `token` / `bot_name` override BOT_TOKEN / BOT_NAME.
pub fn load_config(token: Option<String>, bot_name: Option<String>) -> Result<TelegramConfig> {
    TelegramConfig::load(token, bot_name)
}
