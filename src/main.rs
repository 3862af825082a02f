use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::info;

use constance_bot::bot::{callback_handler, message_handler, AppContext};
use constance_bot::config::Config;
use constance_bot::dialogue::BookingState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    info!(
        port = config.port,
        spell_correction = config.spell.is_some(),
        remote_recognizer = config.luis_model_url.is_some(),
        "starting Constance hotel bot"
    );

    let bot = Bot::new(config.bot_token.clone());
    let ctx = Arc::new(AppContext::new(&config));

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .enter_dialogue::<Message, InMemStorage<BookingState>, BookingState>()
                .endpoint(message_handler),
        )
        .branch(
            Update::filter_callback_query()
                .enter_dialogue::<CallbackQuery, InMemStorage<BookingState>, BookingState>()
                .endpoint(callback_handler),
        );

    let mut dispatcher = Dispatcher::builder(bot.clone(), handler)
        .dependencies(dptree::deps![InMemStorage::<BookingState>::new(), ctx])
        .enable_ctrlc_handler()
        .build();

    match &config.webhook_url {
        Some(webhook_url) => {
            // A single POST route served by the framework's webhook listener.
            let address = SocketAddr::from(([0, 0, 0, 0], config.port));
            let url = reqwest::Url::parse(webhook_url)?;
            info!(%url, "listening for updates over webhook");
            let listener = webhooks::axum(bot, webhooks::Options::new(address, url)).await?;
            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("an error from the update listener"),
                )
                .await;
        }
        None => {
            info!("listening for updates via long polling");
            dispatcher.dispatch().await;
        }
    }

    Ok(())
}
