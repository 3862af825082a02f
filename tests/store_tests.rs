//! # Store Tests
//!
//! Integration tests for the mock inventory: result counts, value ranges,
//! ordering, and the documented room-list quirk.

use anyhow::Result;

use constance_bot::store::{
    search_hotel_reviews, search_hotels, search_rooms, HOTELS_PER_SEARCH, REVIEWS_PER_SEARCH,
    REVIEW_TITLES, ROOM_TYPES,
};

#[tokio::test]
async fn test_hotel_search_returns_five_records_in_range() -> Result<()> {
    let hotels = search_hotels("Paris").await?;

    assert_eq!(hotels.len(), HOTELS_PER_SEARCH);
    for hotel in &hotels {
        assert!((1..=5).contains(&hotel.rating));
        assert!((1..=5000).contains(&hotel.number_of_reviews));
        assert!((80..=530).contains(&hotel.price_starting));
        assert_eq!(hotel.location, "Paris");
        assert!(hotel.name.starts_with("Paris Hotel "));
    }
    Ok(())
}

#[tokio::test]
async fn test_hotel_search_is_sorted_by_price() -> Result<()> {
    let hotels = search_hotels("Mauritius").await?;

    let prices: Vec<u32> = hotels.iter().map(|hotel| hotel.price_starting).collect();
    let mut sorted = prices.clone();
    sorted.sort_unstable();
    assert_eq!(prices, sorted);
    Ok(())
}

#[tokio::test]
async fn test_room_search_ignores_its_filter_argument() -> Result<()> {
    // Documented quirk: the room-type argument never filters the list.
    let all = search_rooms("").await?;
    let filtered = search_rooms("deluxe").await?;

    assert_eq!(all.len(), ROOM_TYPES.len());
    assert_eq!(all, filtered);

    let names: Vec<&str> = all.iter().map(|room| room.name.as_str()).collect();
    assert_eq!(names, ROOM_TYPES.to_vec());
    Ok(())
}

#[tokio::test]
async fn test_review_search_samples_from_fixed_pool() -> Result<()> {
    let reviews = search_hotel_reviews("Constance Prince Maurice").await?;

    assert_eq!(reviews.len(), REVIEWS_PER_SEARCH);
    for review in &reviews {
        assert!(REVIEW_TITLES.contains(&review.title.as_str()));
        assert!(review.text.starts_with("Lorem ipsum"));
        assert!(!review.image.is_empty());
    }
    Ok(())
}
