// One poll cycle: fetch, validate, format, notify

use std::time::Duration;

use reviewbot_core::{check_response, parse_status, Result, SentLog};

use crate::api::HomeworkApi;
use crate::telegram::TelegramBot;

/// Fixed pause between poll cycles
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Run a single poll cycle.
///
/// Recoverable errors (fetch, shape, content) are handled here: logged, then
/// forwarded to the chat once per distinct text. Send errors escape from both
/// the happy path and the error-reporting path and are expected to stop the
/// process; nothing deeper than this function catches anything.
pub async fn run_cycle(
    api: &HomeworkApi,
    bot: &TelegramBot,
    sent: &mut SentLog,
    from_date: i64,
) -> Result<()> {
    match poll(api, from_date).await {
        Ok(message) => {
            if sent.insert(&message) {
                bot.send_message(&message).await?;
            } else {
                tracing::debug!("no homework updates");
            }
        }
        Err(error) if error.is_recoverable() => {
            tracing::error!(%error, "poll cycle failed");
            let message = error.to_string();
            if sent.insert(&message) {
                bot.send_message(&message).await?;
            }
        }
        Err(error) => return Err(error),
    }

    Ok(())
}

async fn poll(api: &HomeworkApi, from_date: i64) -> Result<String> {
    let response = api.get_api_answer(from_date).await?;
    let homework = check_response(&response)?;
    parse_status(homework)
}
