//! Shared fixtures for router tests: Bot API update payloads, a recording [`Bot`], and recording logics.

#![allow(dead_code)] // each test binary uses a different subset

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use routerbot_core::{Action, Bot, ChatContext, ChatLogic, DefaultLogic, Result, RouterError};
use serde_json::{json, Value};
use teloxide::types::{ChatId, Update};

pub const DATE: i64 = 1_700_000_000;

/// Parses a Bot API update object the way teloxide receives it from getUpdates: from response text.
///
/// `Update` does not decode its variant from an in-memory `Value`, so the fixture is serialized first.
pub fn update(value: Value) -> Update {
    serde_json::from_str(&value.to_string()).expect("fixture must be a valid Update")
}

pub fn private_chat(id: i64) -> Value {
    json!({ "id": id, "type": "private", "first_name": "Alice" })
}

pub fn group_chat(id: i64) -> Value {
    json!({ "id": id, "type": "supergroup", "title": "Test group" })
}

pub fn channel_chat(id: i64) -> Value {
    json!({ "id": id, "type": "channel", "title": "Test channel" })
}

pub fn user(id: u64) -> Value {
    json!({ "id": id, "is_bot": false, "first_name": "Alice" })
}

pub fn text_message(chat: Value, text: &str) -> Value {
    json!({
        "message_id": 1,
        "date": DATE,
        "chat": chat,
        "from": user(42),
        "text": text
    })
}

/// `{"update_id": 1, "message": {...}}` for a text message in the given private chat.
pub fn message_update(chat_id: i64) -> Update {
    update(json!({ "update_id": 1, "message": text_message(private_chat(chat_id), "hello") }))
}

/// Bot transport that records every action and always succeeds.
#[derive(Default)]
pub struct RecordingBot {
    actions: Mutex<Vec<Action>>,
}

impl RecordingBot {
    pub fn actions(&self) -> Vec<Action> {
        self.actions.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for RecordingBot {
    async fn execute(&self, action: Action) -> Result<()> {
        self.actions.lock().unwrap().push(action);
        Ok(())
    }
}

/// Chat logic that records the chat id of every context it is invoked with.
pub struct RecordingLogic {
    chat_id: ChatId,
    seen: Mutex<Vec<ChatId>>,
    reply: Option<String>,
    fail: bool,
}

impl RecordingLogic {
    pub fn new(chat_id: i64) -> Arc<Self> {
        Arc::new(Self {
            chat_id: ChatId(chat_id),
            seen: Mutex::new(Vec::new()),
            reply: None,
            fail: false,
        })
    }

    /// Logic that sends `reply` through its context for every update.
    pub fn replying(chat_id: i64, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            chat_id: ChatId(chat_id),
            seen: Mutex::new(Vec::new()),
            reply: Some(reply.to_string()),
            fail: false,
        })
    }

    /// Logic that returns an error for every update.
    pub fn failing(chat_id: i64) -> Arc<Self> {
        Arc::new(Self {
            chat_id: ChatId(chat_id),
            seen: Mutex::new(Vec::new()),
            reply: None,
            fail: true,
        })
    }

    pub fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn seen(&self) -> Vec<ChatId> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatLogic for RecordingLogic {
    fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    async fn process_update(&self, ctx: &ChatContext, _update: &Update) -> Result<()> {
        self.seen.lock().unwrap().push(ctx.chat_id());
        if let Some(reply) = &self.reply {
            ctx.send_message(reply).await;
        }
        if self.fail {
            return Err(RouterError::Handler("logic failed".to_string()));
        }
        Ok(())
    }
}

/// Default logic that records the chat id of every context and answers with a fixed text.
#[derive(Default)]
pub struct RecordingDefault {
    seen: Mutex<Vec<ChatId>>,
}

impl RecordingDefault {
    pub fn seen(&self) -> Vec<ChatId> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DefaultLogic for RecordingDefault {
    async fn process_update(&self, ctx: &ChatContext, _update: &Update) -> Result<()> {
        self.seen.lock().unwrap().push(ctx.chat_id());
        ctx.send_message("unknown chat").await;
        Ok(())
    }
}
