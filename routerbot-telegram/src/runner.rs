//! Long-polling runner: every inbound update goes to [`RouterBot::on_update`].
//! Calls get_me once to log the bot username, then runs the teloxide dispatcher until Ctrl-C.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::Update;
use tracing::{info, instrument, warn};
use update_router::RouterBot;

/// Starts long polling with the given teloxide Bot and router.
#[instrument(skip(bot, router), fields(bot_name = %router.bot_name()))]
pub async fn run_polling(bot: teloxide::Bot, router: Arc<RouterBot>) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone().unwrap_or_default();
            if username_matches(&username, router.bot_name()) {
                info!(username = %username, "Bot username confirmed");
            } else {
                warn!(
                    username = %username,
                    configured = %router.bot_name(),
                    "Bot username differs from configured bot name"
                );
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; continuing with configured bot name"),
    }

    let handler = dptree::endpoint(move |update: Update| {
        let router = Arc::clone(&router);
        async move {
            router.on_update(&update).await;
            respond(())
        }
    });

    info!("step: long polling started");
    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("step: long polling stopped");

    Ok(())
}

/// Compares usernames case-insensitively, ignoring a leading `@` on either side.
fn username_matches(actual: &str, configured: &str) -> bool {
    actual
        .trim_start_matches('@')
        .eq_ignore_ascii_case(configured.trim_start_matches('@'))
}
