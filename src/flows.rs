//! Conversation flows: intent dispatch and multi-step prompt sequencing.
//!
//! Flows are modeled as an explicit transition function. Each turn takes the
//! recognized intent (for a fresh conversation) or the current dialogue
//! state plus the user's raw input, and produces a [`Turn`]: the next state
//! and the replies to send, as data. The Telegram layer in [`crate::bot`]
//! renders the replies; nothing here touches the network besides the mock
//! store, which keeps every step testable.

use tracing::{error, info};

use crate::bot::ui_builder::{hotel_as_card, review_as_card, Card};
use crate::dialogue::{
    match_room_type, parse_confirmation, parse_room_count, BookingState, SearchType,
};
use crate::intent::{EntityKind, Intent, Recognition};
use crate::localization::{t, t_args};
use crate::store;

/// A single reply unit, kept free of transport types.
#[derive(Debug, Clone, PartialEq)]
pub enum BotReply {
    Text(String),
    /// A sequence of cards presented together.
    Carousel(Vec<Card>),
    /// A prompt with a fixed set of options to pick from.
    Choice {
        prompt: String,
        options: Vec<String>,
    },
    /// A yes/no prompt.
    Confirm { prompt: String },
}

/// Outcome of one conversation turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// State to persist for the next turn; `Idle` ends the flow.
    pub next: BookingState,
    pub replies: Vec<BotReply>,
}

impl Turn {
    /// A turn that ends the flow.
    fn done(replies: Vec<BotReply>) -> Self {
        Self {
            next: BookingState::Idle,
            replies,
        }
    }

    /// A turn that waits for more input.
    fn wait(next: BookingState, replies: Vec<BotReply>) -> Self {
        Self { next, replies }
    }
}

/// Dispatches a recognized intent to its flow's first step.
///
/// Never fails: unmatched intents get the fixed fallback reply.
pub async fn handle_intent(recognition: &Recognition, raw_text: &str) -> Turn {
    match recognition.intent {
        Intent::Greetings => Turn::done(vec![BotReply::Text(t("greeting"))]),
        Intent::Help => Turn::done(vec![BotReply::Text(t("help-text"))]),
        Intent::SearchHotels => match destination_of(recognition) {
            Some((destination, search_type)) => {
                let mut replies = vec![BotReply::Text(t_args(
                    "analyzing-request",
                    &[("text", raw_text)],
                ))];
                replies.extend(present_hotels(destination, search_type).await);
                Turn::done(replies)
            }
            None => Turn::wait(
                BookingState::AwaitingDestination {
                    search_type: SearchType::City,
                },
                vec![BotReply::Text(t("destination-prompt"))],
            ),
        },
        Intent::Rooms => start_rooms_flow(recognition.entity(EntityKind::RoomType)).await,
        Intent::ShowHotelsReviews => match recognition.entity(EntityKind::Hotel) {
            Some(hotel) => Turn::done(present_reviews(hotel).await),
            None => Turn::wait(
                BookingState::AwaitingHotelName,
                vec![BotReply::Text(t("hotel-name-prompt"))],
            ),
        },
        Intent::None => Turn::done(vec![fallback_reply(raw_text)]),
    }
}

/// Advances a waiting flow by one step.
///
/// Input that cannot satisfy the current slot produces the fixed
/// clarification and re-prompts the same step; collected slots are kept.
pub async fn handle_state(state: &BookingState, input: &str) -> Turn {
    match state {
        BookingState::Idle => Turn::done(vec![fallback_reply(input)]),
        BookingState::AwaitingDestination { search_type } => {
            let destination = input.trim();
            if destination.is_empty() {
                return Turn::wait(
                    state.clone(),
                    vec![
                        BotReply::Text(t("invalid-choice")),
                        BotReply::Text(t("destination-prompt")),
                    ],
                );
            }
            Turn::done(present_hotels(destination, *search_type).await)
        }
        BookingState::AwaitingHotelName => {
            let hotel = input.trim();
            if hotel.is_empty() {
                return Turn::wait(
                    state.clone(),
                    vec![
                        BotReply::Text(t("invalid-choice")),
                        BotReply::Text(t("hotel-name-prompt")),
                    ],
                );
            }
            Turn::done(present_reviews(hotel).await)
        }
        BookingState::ChoosingRoomType => match match_room_type(input) {
            Some(room_type) => Turn::wait(
                BookingState::AwaitingRoomCount {
                    room_type: room_type.to_string(),
                },
                vec![BotReply::Text(t("room-count-prompt"))],
            ),
            None => Turn::wait(
                BookingState::ChoosingRoomType,
                vec![BotReply::Text(t("invalid-choice")), room_type_choice()],
            ),
        },
        BookingState::AwaitingRoomCount { room_type } => match parse_room_count(input) {
            Ok(rooms) => Turn::wait(
                BookingState::AwaitingConfirmation {
                    room_type: room_type.clone(),
                    rooms,
                },
                vec![BotReply::Confirm {
                    prompt: t("confirm-prompt"),
                }],
            ),
            Err(_) => Turn::wait(
                state.clone(),
                vec![
                    BotReply::Text(t("invalid-choice")),
                    BotReply::Text(t("room-count-prompt")),
                ],
            ),
        },
        BookingState::AwaitingConfirmation { room_type, rooms } => {
            match parse_confirmation(input) {
                Ok(true) => {
                    info!(room_type = %room_type, rooms, "reservation confirmed");
                    Turn::done(vec![BotReply::Text(t("booking-confirmed"))])
                }
                Ok(false) => {
                    info!(room_type = %room_type, rooms, "reservation declined");
                    Turn::done(vec![BotReply::Text(t("farewell"))])
                }
                Err(_) => Turn::wait(
                    state.clone(),
                    vec![
                        BotReply::Text(t("invalid-choice")),
                        BotReply::Confirm {
                            prompt: t("confirm-prompt"),
                        },
                    ],
                ),
            }
        }
    }
}

fn fallback_reply(raw_text: &str) -> BotReply {
    BotReply::Text(t_args("did-not-understand", &[("text", raw_text)]))
}

fn destination_of(recognition: &Recognition) -> Option<(&str, SearchType)> {
    if let Some(city) = recognition.entity(EntityKind::City) {
        return Some((city, SearchType::City));
    }
    recognition
        .entity(EntityKind::Airport)
        .map(|airport| (airport, SearchType::Airport))
}

fn room_type_choice() -> BotReply {
    BotReply::Choice {
        prompt: t("room-type-prompt"),
        options: store::ROOM_TYPES.iter().map(|name| name.to_string()).collect(),
    }
}

/// Final step of the hotel search: report the count and render the results
/// as a carousel of cards.
async fn present_hotels(destination: &str, search_type: SearchType) -> Vec<BotReply> {
    let looking = match search_type {
        SearchType::City => t_args("looking-city", &[("destination", destination)]),
        SearchType::Airport => t_args("looking-airport", &[("destination", destination)]),
    };
    let mut replies = vec![BotReply::Text(looking)];

    match store::search_hotels(destination).await {
        Ok(hotels) => {
            replies.push(BotReply::Text(t_args(
                "hotels-found",
                &[("count", hotels.len().to_string().as_str())],
            )));
            replies.push(BotReply::Carousel(hotels.iter().map(hotel_as_card).collect()));
        }
        Err(e) => {
            error!(error = %e, destination, "hotel search failed");
            replies.push(BotReply::Text(t("search-unavailable")));
        }
    }
    replies
}

async fn present_reviews(hotel: &str) -> Vec<BotReply> {
    let mut replies = vec![BotReply::Text(t_args("reviews-looking", &[("hotel", hotel)]))];

    match store::search_hotel_reviews(hotel).await {
        Ok(reviews) => {
            replies.push(BotReply::Carousel(
                reviews.iter().map(review_as_card).collect(),
            ));
        }
        Err(e) => {
            error!(error = %e, hotel, "review search failed");
            replies.push(BotReply::Text(t("search-unavailable")));
        }
    }
    replies
}

/// First step of the room booking: announce the search, then prompt for a
/// room type over the fixed list.
async fn start_rooms_flow(room_type: Option<&str>) -> Turn {
    let mut replies = vec![BotReply::Text(t("looking-rooms"))];

    match store::search_rooms(room_type.unwrap_or("")).await {
        Ok(rooms) => {
            replies.push(BotReply::Text(t_args(
                "rooms-found",
                &[("count", rooms.len().to_string().as_str())],
            )));
            replies.push(BotReply::Choice {
                prompt: t("room-type-prompt"),
                options: rooms.into_iter().map(|room| room.name).collect(),
            });
            Turn::wait(BookingState::ChoosingRoomType, replies)
        }
        Err(e) => {
            error!(error = %e, "room search failed");
            replies.push(BotReply::Text(t("search-unavailable")));
            Turn::done(replies)
        }
    }
}
