//! # routerbot-telegram
//!
//! Telegram layer: [`routerbot_core::Bot`] implementation over teloxide, minimal env config,
//! [`TgBotBuilder`] and the long-polling runner that feeds every update to [`update_router::RouterBot`].

mod bot_adapter;
mod builder;
mod config;
mod runner;

pub use bot_adapter::TelegramBotAdapter;
pub use builder::{TelegramRouter, TgBotBuilder};
pub use config::TelegramConfig;
pub use runner::run_polling;
