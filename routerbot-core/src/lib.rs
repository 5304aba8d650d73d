//! # routerbot-core
//!
//! Core types for the chat router: [`Bot`] transport trait and [`Action`], handler traits
//! ([`ChatLogic`], [`DefaultLogic`]), the per-update [`ChatContext`], errors, and tracing initialization.
//! Transport-agnostic; used by update-router and routerbot-telegram.

pub mod bot;
pub mod context;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Action, Bot, MediaKind};
pub use context::ChatContext;
pub use error::{Result, RouterError};
pub use logger::init_tracing;
pub use types::{ChatLogic, DefaultLogic, Dispatch};
