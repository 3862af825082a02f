//! Booking dialogue module: per-conversation state and slot validation.

use serde::{Deserialize, Serialize};
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};

use crate::store::ROOM_TYPES;

/// Which kind of destination a hotel search was started with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchType {
    City,
    Airport,
}

/// Represents the conversation state for the booking flows.
///
/// Each waiting state carries the slot values collected so far, so a
/// mid-flow clarification never loses previous answers.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum BookingState {
    #[default]
    Idle,
    /// Hotel search started without a recognized destination entity.
    AwaitingDestination { search_type: SearchType },
    /// Review lookup started without a recognized hotel entity.
    AwaitingHotelName,
    /// Room booking, waiting for a room type from the fixed list.
    ChoosingRoomType,
    /// Room booking, waiting for the number of rooms.
    AwaitingRoomCount { room_type: String },
    /// Room booking, waiting for a yes/no confirmation.
    AwaitingConfirmation { room_type: String, rooms: u32 },
}

/// Type alias for our booking dialogue
pub type BookingDialogue = Dialogue<BookingState, InMemStorage<BookingState>>;

/// Validates a room-count answer. Only whole numbers of at least one room
/// satisfy the slot.
pub fn parse_room_count(input: &str) -> Result<u32, &'static str> {
    match input.trim().parse::<u32>() {
        Ok(0) => Err("zero"),
        Ok(count) => Ok(count),
        Err(_) => Err("not_a_number"),
    }
}

/// Validates a yes/no confirmation answer.
pub fn parse_confirmation(input: &str) -> Result<bool, &'static str> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "y" | "yeah" | "yep" | "sure" | "ok" | "confirm" => Ok(true),
        "no" | "n" | "nope" | "cancel" => Ok(false),
        _ => Err("not_a_confirmation"),
    }
}

/// Matches a free-text answer against the fixed room-type list.
pub fn match_room_type(input: &str) -> Option<&'static str> {
    let wanted = input.trim().to_lowercase();
    ROOM_TYPES
        .iter()
        .find(|room_type| **room_type == wanted)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_count_validation() {
        assert_eq!(parse_room_count("2"), Ok(2));
        assert_eq!(parse_room_count("  10  "), Ok(10));

        assert!(parse_room_count("0").is_err());
        assert!(parse_room_count("two").is_err());
        assert!(parse_room_count("-1").is_err());
        assert!(parse_room_count("").is_err());
    }

    #[test]
    fn test_confirmation_validation() {
        assert_eq!(parse_confirmation("yes"), Ok(true));
        assert_eq!(parse_confirmation(" OK "), Ok(true));
        assert_eq!(parse_confirmation("no"), Ok(false));
        assert_eq!(parse_confirmation("Nope"), Ok(false));

        assert!(parse_confirmation("maybe").is_err());
        assert!(parse_confirmation("").is_err());
    }

    #[test]
    fn test_room_type_matching() {
        assert_eq!(match_room_type("sea-view"), Some("sea-view"));
        assert_eq!(match_room_type("  Deluxe "), Some("deluxe"));
        assert_eq!(match_room_type("NON-SMOKING"), Some("non-smoking"));
        assert_eq!(match_room_type("penthouse"), None);
    }

    #[test]
    fn test_default_state_is_idle() {
        assert_eq!(BookingState::default(), BookingState::Idle);
    }
}
