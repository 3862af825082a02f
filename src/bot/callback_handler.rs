//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use tracing::debug;

use crate::dialogue::{BookingDialogue, BookingState};
use crate::flows;

use super::message_handler::execute_turn;

/// Handles room-type and confirmation button presses by feeding the button
/// payload through the same flow transition as typed text.
pub async fn callback_handler(
    bot: Bot,
    q: teloxide::types::CallbackQuery,
    dialogue: BookingDialogue,
) -> Result<()> {
    let data = q.data.clone().unwrap_or_default();
    debug!(user_id = %q.from.id, data = %data, "received callback query");

    // Stop the client-side loading spinner.
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(msg) = &q.message else {
        return Ok(());
    };

    let input = match data.split_once(':') {
        Some(("room", room_type)) => room_type.to_string(),
        Some(("confirm", answer)) => answer.to_string(),
        _ => {
            debug!(user_id = %q.from.id, data = %data, "unknown callback payload, ignoring");
            return Ok(());
        }
    };

    let state = dialogue.get().await?.unwrap_or_default();
    if matches!(state, BookingState::Idle) {
        // A button from a finished flow; nothing to advance.
        debug!(user_id = %q.from.id, "callback arrived with no active flow, ignoring");
        return Ok(());
    }

    let turn = flows::handle_state(&state, &input).await;
    execute_turn(&bot, msg.chat().id, &dialogue, turn).await
}
