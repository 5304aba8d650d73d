//! routerbot CLI: run a per-chat router with echo logics. Config from env and optional CLI args.

use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use routerbot_cli::{load_config, Cli, Commands, EchoLogic, UnknownChatLogic};
use routerbot_core::{init_tracing, ChatLogic};
use routerbot_telegram::TgBotBuilder;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            token,
            bot_name,
            chats,
            log_file,
        } => {
            let config = load_config(token, bot_name)?;
            let log_file = log_file.or_else(|| config.log_file.clone());
            init_tracing(log_file.as_deref())?;

            info!(
                start_time = %Local::now().format("%Y-%m-%d %H:%M:%S"),
                bot_name = %config.bot_name,
                chats = ?chats,
                "Router bot starting"
            );

            let logics: Vec<Arc<dyn ChatLogic>> = chats
                .into_iter()
                .map(|id| Arc::new(EchoLogic::new(id)) as Arc<dyn ChatLogic>)
                .collect();

            TgBotBuilder::from_config(&config)
                .register_logic(logics)
                .register_default_logic(Arc::new(UnknownChatLogic))
                .start()
                .await
        }
    }
}
