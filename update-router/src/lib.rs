//! # Update router
//!
//! Extracts a chat id from each inbound [`teloxide::types::Update`] and hands the update to the logic
//! registered for that chat. Unmatched chats go to the default logic when one is set; otherwise the
//! update is dropped.

pub mod extract;
pub mod router;

pub use extract::{chat_id_of, update_kind};
pub use router::RouterBot;

// Integration tests live in tests/extract_test.rs and tests/router_test.rs
