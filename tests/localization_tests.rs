//! # Localization Tests
//!
//! Tests for reply-text retrieval: the fixed texts users see must come out
//! of the bundle exactly as written.

use constance_bot::localization::{t, t_args, LocalizationManager};
use std::collections::HashMap;

#[test]
fn test_fixed_help_text_is_verbatim() {
    assert_eq!(
        t("help-text"),
        "Try asking me things like 'search hotels in Mauritius' or 'show me the reviews of Constance Prince Maurice'"
    );
}

#[test]
fn test_fixed_farewell_and_confirmation_are_verbatim() {
    assert_eq!(t("farewell"), "Hope you have a nice day!");
    assert_eq!(
        t("booking-confirmed"),
        "Thanks for the reaching out to us!! Your booking is confirmed! A confirmation email has been sent to your email. We hope you have a pleasant stay!!"
    );
}

#[test]
fn test_greeting_keeps_its_line_breaks() {
    assert_eq!(t("greeting"), "Hello there!!\n\nPlease enter your destination");
}

/// Arguments are spliced without Unicode isolation marks.
#[test]
fn test_message_arguments_render_verbatim() {
    assert_eq!(
        t_args("did-not-understand", &[("text", "bonjour")]),
        "Sorry, I did not understand 'bonjour'. Type 'help' if you need assistance."
    );
    assert_eq!(
        t_args("looking-city", &[("destination", "Paris")]),
        "Looking for hotels in Paris..."
    );
}

#[test]
fn test_missing_key_is_flagged() {
    let manager = LocalizationManager::new().expect("failed to create localization manager");

    let message = manager.get_message("nonexistent-key", None);
    assert!(message.starts_with("Missing translation:"));
}

#[test]
fn test_get_message_with_args_map() {
    let manager = LocalizationManager::new().expect("failed to create localization manager");

    let mut args = HashMap::new();
    args.insert("count", "8");
    let message = manager.get_message("rooms-found", Some(&args));
    assert_eq!(message, "I found 8 available rooms:");
}
