//! Integration tests for [`update_router::RouterBot`].
//!
//! Covers: routing by chat id, dropping unknown chats, default-logic fallback with the extracted chat id,
//! tolerance of an absent registration list, first-registration-wins, and handler errors being contained.

mod common;

use std::sync::Arc;

use common::{message_update, update, RecordingBot, RecordingDefault, RecordingLogic};
use routerbot_core::{Action, ChatLogic, DefaultLogic, Dispatch};
use serde_json::json;
use teloxide::types::ChatId;
use update_router::RouterBot;

fn router(
    logics: Option<Vec<Arc<dyn ChatLogic>>>,
    default_logic: Option<Arc<dyn DefaultLogic>>,
) -> (RouterBot, Arc<RecordingBot>) {
    let bot = Arc::new(RecordingBot::default());
    (RouterBot::new("bot", bot.clone(), logics, default_logic), bot)
}

fn logics(list: &[&Arc<RecordingLogic>]) -> Option<Vec<Arc<dyn ChatLogic>>> {
    Some(
        list.iter()
            .map(|l| Arc::clone(*l) as Arc<dyn ChatLogic>)
            .collect(),
    )
}

fn default(logic: &Arc<RecordingDefault>) -> Option<Arc<dyn DefaultLogic>> {
    let logic: Arc<dyn DefaultLogic> = logic.clone();
    Some(logic)
}

/// **Test: update is passed to the logic registered for its chat only.**
///
/// **Setup:** logics for chats 100 and 200.
/// **Action:** message update from chat 100.
/// **Expected:** logic 100 called once with a context for chat 100; logic 200 never called.
#[tokio::test]
async fn test_routes_to_matching_logic() {
    let logic1 = RecordingLogic::new(100);
    let logic2 = RecordingLogic::new(200);
    let (router, _bot) = router(logics(&[&logic1, &logic2]), None);

    let result = router.on_update(&message_update(100)).await;

    assert_eq!(result, Dispatch::Logic(ChatId(100)));
    assert_eq!(logic1.seen(), vec![ChatId(100)]);
    assert_eq!(logic2.calls(), 0);
}

/// **Test: update from an unregistered chat is dropped when no default logic is set.**
#[tokio::test]
async fn test_ignores_unknown_chat() {
    let logic1 = RecordingLogic::new(100);
    let logic2 = RecordingLogic::new(200);
    let (router, bot) = router(logics(&[&logic1, &logic2]), None);

    let result = router.on_update(&message_update(999)).await;

    assert_eq!(result, Dispatch::Dropped(ChatId(999)));
    assert_eq!(logic1.calls(), 0);
    assert_eq!(logic2.calls(), 0);
    assert!(bot.actions().is_empty());
}

/// **Test: unregistered chat goes to the default logic, whose context targets the update's chat.**
#[tokio::test]
async fn test_routes_unknown_chat_to_default_logic() {
    let logic1 = RecordingLogic::new(100);
    let logic2 = RecordingLogic::new(200);
    let default_logic = Arc::new(RecordingDefault::default());
    let (router, bot) = router(
        logics(&[&logic1, &logic2]),
        default(&default_logic),
    );

    let result = router.on_update(&message_update(999)).await;

    assert_eq!(result, Dispatch::Default(ChatId(999)));
    assert_eq!(logic1.calls(), 0);
    assert_eq!(logic2.calls(), 0);
    assert_eq!(default_logic.seen(), vec![ChatId(999)]);

    let actions = bot.actions();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].chat_id(), ChatId(999));
}

/// **Test: consecutive default-logic invocations each get their own chat id.**
#[tokio::test]
async fn test_default_logic_context_is_per_update() {
    let default_logic = Arc::new(RecordingDefault::default());
    let (router, bot) = router(None, default(&default_logic));

    router.on_update(&message_update(1)).await;
    router.on_update(&message_update(2)).await;
    router.on_update(&message_update(1)).await;

    assert_eq!(default_logic.seen(), vec![ChatId(1), ChatId(2), ChatId(1)]);
    let targets: Vec<ChatId> = bot.actions().iter().map(Action::chat_id).collect();
    assert_eq!(targets, vec![ChatId(1), ChatId(2), ChatId(1)]);
}

/// **Test: concurrent default-logic invocations do not see each other's chat id.**
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_default_logic_concurrent_updates() {
    let default_logic = Arc::new(RecordingDefault::default());
    let (router, bot) = router(None, default(&default_logic));
    let router = Arc::new(router);

    let tasks: Vec<_> = (1..=20)
        .map(|id| {
            let router = Arc::clone(&router);
            tokio::spawn(async move { router.on_update(&message_update(id)).await })
        })
        .collect();
    for (id, task) in (1..=20).zip(tasks) {
        assert_eq!(task.await.unwrap(), Dispatch::Default(ChatId(id)));
    }

    let mut seen = default_logic.seen();
    seen.sort_by_key(|c| c.0);
    assert_eq!(seen, (1..=20).map(ChatId).collect::<Vec<_>>());
    assert_eq!(bot.actions().len(), 20);
}

/// **Test: an absent registration list is treated as empty.**
#[tokio::test]
async fn test_none_logics_does_not_panic() {
    let (router, _bot) = router(None, None);

    let result = router.on_update(&message_update(100)).await;

    assert_eq!(result, Dispatch::Dropped(ChatId(100)));
    assert!(router.logics().is_empty());
}

#[tokio::test]
async fn test_none_logics_routes_to_default_logic() {
    let default_logic = Arc::new(RecordingDefault::default());
    let (router, _bot) = router(None, default(&default_logic));

    let result = router.on_update(&message_update(100)).await;

    assert_eq!(result, Dispatch::Default(ChatId(100)));
    assert_eq!(default_logic.seen(), vec![ChatId(100)]);
}

/// **Test: with two logics for the same chat, the first registered receives the update.**
#[tokio::test]
async fn test_first_registration_wins() {
    let first = RecordingLogic::new(100);
    let second = RecordingLogic::new(100);
    let (router, _bot) = router(logics(&[&first, &second]), None);

    router.on_update(&message_update(100)).await;

    assert_eq!(first.calls(), 1);
    assert_eq!(second.calls(), 0);
    assert_eq!(router.logics().len(), 2);
}

/// **Test: replies from a logic target the logic's own chat.**
#[tokio::test]
async fn test_logic_reply_targets_its_chat() {
    let logic = RecordingLogic::replying(-1001, "pong");
    let (router, bot) = router(logics(&[&logic]), None);
    let upd = update(json!({
        "update_id": 1,
        "message": common::text_message(common::group_chat(-1001), "ping")
    }));

    router.on_update(&upd).await;

    let actions = bot.actions();
    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::SendMessage { chat_id, text, .. } => {
            assert_eq!(*chat_id, ChatId(-1001));
            assert_eq!(text, "pong");
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

/// **Test: a failing logic is logged, and the router keeps routing subsequent updates.**
#[tokio::test]
async fn test_logic_error_is_contained() {
    let failing = RecordingLogic::failing(100);
    let (router, _bot) = router(logics(&[&failing]), None);

    assert_eq!(
        router.on_update(&message_update(100)).await,
        Dispatch::Logic(ChatId(100))
    );
    assert_eq!(
        router.on_update(&message_update(100)).await,
        Dispatch::Logic(ChatId(100))
    );
    assert_eq!(failing.calls(), 2);
}

/// **Test: updates without a chat or user reach neither logics nor the default logic.**
#[tokio::test]
async fn test_unroutable_update_skips_default_logic() {
    let default_logic = Arc::new(RecordingDefault::default());
    let (router, bot) = router(None, default(&default_logic));
    let upd = update(json!({ "update_id": 1, "some_future_update": {} }));

    assert_eq!(router.on_update(&upd).await, Dispatch::Unroutable);
    assert!(default_logic.seen().is_empty());
    assert!(bot.actions().is_empty());
}

#[test]
fn test_router_accessors() {
    let logic = RecordingLogic::new(5);
    let (router, _bot) = router(logics(&[&logic]), default(&Arc::new(RecordingDefault::default())));

    assert_eq!(router.bot_name(), "bot");
    assert!(router.has_default_logic());
    assert!(router.logic_for(ChatId(5)).is_some());
    assert!(router.logic_for(ChatId(6)).is_none());
}
