//! Chat id extraction from update payloads.

use teloxide::types::{
    CallbackQuery, ChatId, MaybeAnonymousUser, MaybeInaccessibleMessage, PollAnswer, Update, UpdateKind,
    User,
};

/// Returns the chat id an update belongs to, or `None` for updates without a chat or user.
///
/// Chat-bearing updates (messages, posts, member changes, join requests, reactions, boosts) use their
/// chat. Query-style updates without a chat (inline, chosen inline result, shipping, pre-checkout) use
/// the sender's user id, which equals the id of the private chat with that user.
pub fn chat_id_of(update: &Update) -> Option<ChatId> {
    match &update.kind {
        UpdateKind::Message(m) => Some(m.chat.id),
        UpdateKind::EditedMessage(m) => Some(m.chat.id),
        UpdateKind::ChannelPost(m) => Some(m.chat.id),
        UpdateKind::EditedChannelPost(m) => Some(m.chat.id),

        UpdateKind::CallbackQuery(q) => Some(callback_chat_id(q)),

        UpdateKind::MyChatMember(u) => Some(u.chat.id),
        UpdateKind::ChatMember(u) => Some(u.chat.id),
        UpdateKind::ChatJoinRequest(r) => Some(r.chat.id),

        UpdateKind::MessageReaction(r) => Some(r.chat.id),
        UpdateKind::MessageReactionCount(r) => Some(r.chat.id),

        UpdateKind::ChatBoost(b) => Some(b.chat.id),
        UpdateKind::RemovedChatBoost(b) => Some(b.chat.id),

        UpdateKind::InlineQuery(q) => Some(user_chat_id(&q.from)),
        UpdateKind::ChosenInlineResult(r) => Some(user_chat_id(&r.from)),

        UpdateKind::ShippingQuery(q) => Some(user_chat_id(&q.from)),
        UpdateKind::PreCheckoutQuery(q) => Some(user_chat_id(&q.from)),

        UpdateKind::PollAnswer(a) => Some(poll_answer_chat_id(a)),

        _ => None,
    }
}

/// Name of the update variant, for log fields.
pub fn update_kind(update: &Update) -> &'static str {
    match &update.kind {
        UpdateKind::Message(_) => "message",
        UpdateKind::EditedMessage(_) => "edited_message",
        UpdateKind::ChannelPost(_) => "channel_post",
        UpdateKind::EditedChannelPost(_) => "edited_channel_post",
        UpdateKind::CallbackQuery(_) => "callback_query",
        UpdateKind::MyChatMember(_) => "my_chat_member",
        UpdateKind::ChatMember(_) => "chat_member",
        UpdateKind::ChatJoinRequest(_) => "chat_join_request",
        UpdateKind::MessageReaction(_) => "message_reaction",
        UpdateKind::MessageReactionCount(_) => "message_reaction_count",
        UpdateKind::ChatBoost(_) => "chat_boost",
        UpdateKind::RemovedChatBoost(_) => "removed_chat_boost",
        UpdateKind::InlineQuery(_) => "inline_query",
        UpdateKind::ChosenInlineResult(_) => "chosen_inline_result",
        UpdateKind::ShippingQuery(_) => "shipping_query",
        UpdateKind::PreCheckoutQuery(_) => "pre_checkout_query",
        UpdateKind::PollAnswer(_) => "poll_answer",
        UpdateKind::Poll(_) => "poll",
        UpdateKind::Error(_) => "error",
        _ => "other",
    }
}

/// Chat of the message the button was attached to; the presser's id when no message is available
/// (inline-mode messages, or messages too old to be delivered).
fn callback_chat_id(query: &CallbackQuery) -> ChatId {
    match &query.message {
        Some(MaybeInaccessibleMessage::Regular(m)) => m.chat.id,
        Some(MaybeInaccessibleMessage::Inaccessible(m)) => m.chat.id,
        None => user_chat_id(&query.from),
    }
}

/// Votes cast on behalf of a chat route to that chat, other votes to the voter.
fn poll_answer_chat_id(answer: &PollAnswer) -> ChatId {
    match &answer.voter {
        MaybeAnonymousUser::Chat(chat) => chat.id,
        MaybeAnonymousUser::User(user) => user_chat_id(user),
    }
}

fn user_chat_id(user: &User) -> ChatId {
    ChatId(user.id.0 as i64)
}
