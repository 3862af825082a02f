//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming text messages and commands
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Formats cards, builds keyboards, and renders flow replies

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

use crate::config::Config;
use crate::recognizer::Recognizer;
use crate::spell::SpellClient;

/// Shared services built once at startup and passed into the handlers by the
/// dispatcher, instead of living in globals.
pub struct AppContext {
    pub recognizer: Recognizer,
    pub spell: Option<SpellClient>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        Self {
            recognizer: Recognizer::new(config.luis_model_url.clone()),
            spell: config.spell.as_ref().map(SpellClient::new),
        }
    }
}
