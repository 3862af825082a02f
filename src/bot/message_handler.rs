//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::debug;

use crate::dialogue::{BookingDialogue, BookingState};
use crate::flows::{self, Turn};
use crate::localization::t;

use super::ui_builder::{send_reply, send_welcome};
use super::AppContext;

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    ctx: Arc<AppContext>,
    dialogue: BookingDialogue,
) -> Result<()> {
    let Some(text) = msg.text() else {
        return handle_unsupported_message(&bot, &msg).await;
    };
    debug!(user_id = %msg.chat.id, message_length = text.len(), "received text message");

    // Bot commands bypass spell correction and recognition.
    if text == "/start" {
        return send_welcome(&bot, msg.chat.id).await;
    }
    if text == "/help" {
        bot.send_message(msg.chat.id, t("help-text")).await?;
        return Ok(());
    }

    let text = match &ctx.spell {
        Some(spell) => spell.correct(text).await,
        None => text.to_string(),
    };

    let state = dialogue.get().await?.unwrap_or_default();
    let turn = if matches!(state, BookingState::Idle) {
        let recognition = ctx.recognizer.recognize(&text).await;
        debug!(user_id = %msg.chat.id, intent = ?recognition.intent, "recognized intent");
        flows::handle_intent(&recognition, &text).await
    } else {
        flows::handle_state(&state, &text).await
    };

    execute_turn(&bot, msg.chat.id, &dialogue, turn).await
}

/// Sends a turn's replies and persists its next state.
pub async fn execute_turn(
    bot: &Bot,
    chat_id: ChatId,
    dialogue: &BookingDialogue,
    turn: Turn,
) -> Result<()> {
    for reply in turn.replies {
        send_reply(bot, chat_id, reply).await?;
    }
    match turn.next {
        BookingState::Idle => {
            // Exiting without a stored dialogue is an error in the storage
            // layer, and most turns never created one.
            if dialogue.get().await?.is_some() {
                dialogue.exit().await?;
            }
        }
        next => dialogue.update(next).await?,
    }
    Ok(())
}

async fn handle_unsupported_message(bot: &Bot, msg: &Message) -> Result<()> {
    debug!(user_id = %msg.chat.id, "received unsupported message type");
    bot.send_message(msg.chat.id, t("unsupported-message")).await?;
    Ok(())
}
