//! # routerbot-cli
//!
//! CLI foundation: argument parsing, config loading, and the demo logics the `routerbot` binary registers.

pub mod cli;
pub mod logic;

pub use cli::{load_config, Cli, Commands};
pub use logic::{EchoLogic, UnknownChatLogic};
pub use routerbot_telegram::TelegramConfig;
