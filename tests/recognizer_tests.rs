//! # Recognizer Tests
//!
//! Tests for the built-in keyword recognizer and its entity extraction.

use constance_bot::intent::{EntityKind, Intent};
use constance_bot::recognizer::{recognize_keywords, Recognizer};

#[test]
fn test_greeting_recognition() {
    assert_eq!(recognize_keywords("hello").intent, Intent::Greetings);
    assert_eq!(recognize_keywords("Hey there").intent, Intent::Greetings);
    assert_eq!(recognize_keywords("good morning").intent, Intent::Greetings);
}

#[test]
fn test_help_recognition() {
    assert_eq!(recognize_keywords("help").intent, Intent::Help);
    assert_eq!(recognize_keywords(" Help! ").intent, Intent::Help);
}

#[test]
fn test_hotel_search_with_city_entity() {
    let recognition = recognize_keywords("search hotels in Mauritius");

    assert_eq!(recognition.intent, Intent::SearchHotels);
    assert_eq!(recognition.entity(EntityKind::City), Some("Mauritius"));
}

#[test]
fn test_hotel_search_with_airport_entity() {
    let recognition = recognize_keywords("find hotels near Heathrow airport");

    assert_eq!(recognition.intent, Intent::SearchHotels);
    assert_eq!(recognition.entity(EntityKind::Airport), Some("Heathrow"));
    assert_eq!(recognition.entity(EntityKind::City), None);
}

#[test]
fn test_hotel_search_without_destination() {
    let recognition = recognize_keywords("I need a hotel");

    assert_eq!(recognition.intent, Intent::SearchHotels);
    assert!(recognition.entities.is_empty());
}

#[test]
fn test_reviews_recognition_extracts_the_hotel() {
    let recognition = recognize_keywords("show me the reviews of Constance Prince Maurice");

    assert_eq!(recognition.intent, Intent::ShowHotelsReviews);
    assert_eq!(
        recognition.entity(EntityKind::Hotel),
        Some("Constance Prince Maurice")
    );
}

#[test]
fn test_rooms_recognition_extracts_the_room_type() {
    let recognition = recognize_keywords("I want to book a non-smoking room");

    assert_eq!(recognition.intent, Intent::Rooms);
    // Longest match: never misread "non-smoking" as "smoking".
    assert_eq!(recognition.entity(EntityKind::RoomType), Some("non-smoking"));
}

#[test]
fn test_rooms_recognition_without_room_type() {
    let recognition = recognize_keywords("book a room please");

    assert_eq!(recognition.intent, Intent::Rooms);
    assert!(recognition.entities.is_empty());
}

#[test]
fn test_unrecognized_input_maps_to_none() {
    assert_eq!(recognize_keywords("what is the weather").intent, Intent::None);
    assert_eq!(recognize_keywords("").intent, Intent::None);
}

/// Without a model URL the recognizer uses the keyword rules.
#[tokio::test]
async fn test_recognizer_defaults_to_keyword_rules() {
    let recognizer = Recognizer::new(None);

    let recognition = recognizer.recognize("search hotels in Paris").await;
    assert_eq!(recognition.intent, Intent::SearchHotels);
    assert_eq!(recognition.entity(EntityKind::City), Some("Paris"));
}

/// An unreachable remote model falls back to the keyword rules instead of
/// failing the turn.
#[tokio::test]
async fn test_unreachable_remote_model_falls_back() {
    let recognizer = Recognizer::new(Some("http://127.0.0.1:9/luis".to_string()));

    let recognition = recognizer.recognize("hello").await;
    assert_eq!(recognition.intent, Intent::Greetings);
}
