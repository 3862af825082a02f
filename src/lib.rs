//! # Constance Hotel Bot
//!
//! A demo Telegram bot for a hotel-booking scenario: it recognizes a handful
//! of intents (greeting, hotel search, room booking, reviews, help), walks
//! multi-turn conversation flows, and replies with cards built from mock
//! inventory data.

pub mod bot;
pub mod circuit_breaker;
pub mod config;
pub mod dialogue;
pub mod flows;
pub mod intent;
pub mod localization;
pub mod recognizer;
pub mod spell;
pub mod store;
