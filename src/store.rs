//! Mock hotel inventory behind artificial delays.
//!
//! Everything here is fabricated for demo purposes: searches resolve after a
//! fixed sleep that simulates network latency and never actually fail. The
//! failure kind still exists so the flows have a defined path for the day a
//! real backend replaces this module.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The fixed room-type list offered by every hotel.
pub const ROOM_TYPES: [&str; 8] = [
    "sea-view",
    "double",
    "city-view",
    "single",
    "luxury",
    "deluxe",
    "smoking",
    "non-smoking",
];

/// Pool of review titles sampled by `search_hotel_reviews`.
pub const REVIEW_TITLES: [&str; 6] = [
    "“Very stylish, great stay, great staff”",
    "“good hotel awful meals”",
    "“Need more attention to little things”",
    "“Lovely small hotel ideally situated to explore the area.”",
    "“Positive surprise”",
    "“Beautiful suite and resort”",
];

const HOTEL_IMAGE_URL: &str =
    "https://www.constancehospitality.com/media/1051/constance-hospitality-management-history-2.jpg";
const REVIEW_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/en/e/ee/Unknown-person.gif";
const REVIEW_TEXT: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
    Mauris odio magna, sodales vel ligula sit amet, vulputate vehicula velit. \
    Nulla quis consectetur neque, sed commodo metus.";

const SEARCH_DELAY: Duration = Duration::from_millis(1000);
const REVIEWS_DELAY: Duration = Duration::from_millis(500);

pub const HOTELS_PER_SEARCH: usize = 5;
pub const REVIEWS_PER_SEARCH: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub location: String,
    /// 1 to 5.
    pub rating: u8,
    pub number_of_reviews: u32,
    /// Nightly price in dollars.
    pub price_starting: u32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomRecord {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub title: String,
    pub text: String,
    pub image: String,
}

/// Failure kind for inventory lookups.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The upstream search backend could not be reached.
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "search unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Fabricates five hotels for the given destination, sorted by nightly
/// price ascending.
pub async fn search_hotels(destination: &str) -> Result<Vec<HotelRecord>, StoreError> {
    // ThreadRng is not Send, keep it out of scope before the sleep.
    let mut hotels: Vec<HotelRecord> = {
        let mut rng = rand::thread_rng();
        (1..=HOTELS_PER_SEARCH)
            .map(|i| HotelRecord {
                name: format!("{destination} Hotel {i}"),
                location: destination.to_string(),
                rating: rng.gen_range(1..=5),
                number_of_reviews: rng.gen_range(1..=5000),
                price_starting: rng.gen_range(80..=530),
                image: HOTEL_IMAGE_URL.to_string(),
            })
            .collect()
    };
    hotels.sort_by_key(|hotel| hotel.price_starting);

    tokio::time::sleep(SEARCH_DELAY).await;
    Ok(hotels)
}

/// Returns the full room-type list.
///
/// The room-type argument is only ever used by callers for display; the demo
/// inventory does not filter by it and always returns all eight entries.
pub async fn search_rooms(_room_type: &str) -> Result<Vec<RoomRecord>, StoreError> {
    let rooms = ROOM_TYPES
        .iter()
        .map(|name| RoomRecord {
            name: (*name).to_string(),
        })
        .collect();

    tokio::time::sleep(SEARCH_DELAY).await;
    Ok(rooms)
}

/// Fabricates five reviews for the given hotel, sampling titles from the
/// fixed pool.
pub async fn search_hotel_reviews(_hotel_name: &str) -> Result<Vec<ReviewRecord>, StoreError> {
    let reviews = {
        let mut rng = rand::thread_rng();
        (0..REVIEWS_PER_SEARCH)
            .map(|_| ReviewRecord {
                title: REVIEW_TITLES[rng.gen_range(0..REVIEW_TITLES.len())].to_string(),
                text: REVIEW_TEXT.to_string(),
                image: REVIEW_IMAGE_URL.to_string(),
            })
            .collect()
    };

    tokio::time::sleep(REVIEWS_DELAY).await;
    Ok(reviews)
}
