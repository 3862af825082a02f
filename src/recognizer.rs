//! Intent recognition: a remote LUIS-style model when configured, with a
//! built-in keyword recognizer used otherwise and whenever the remote call
//! fails. Recognition never errors out; the worst case is the `None` intent.

use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::intent::{Entity, EntityKind, Intent, Recognition};
use crate::store::ROOM_TYPES;

lazy_static! {
    static ref GREETING_RE: Regex =
        Regex::new(r"(?i)^\s*(hi|hiya|hello|hey|good\s+(morning|afternoon|evening))\b").unwrap();
    static ref REVIEWS_RE: Regex = Regex::new(r"(?i)reviews?\s+(?:of|for)\s+(.+?)\s*[.!?]?\s*$").unwrap();
    static ref AIRPORT_RE: Regex = Regex::new(r"(?i)\bnear\s+(.+?)\s+airport\b").unwrap();
    static ref CITY_RE: Regex =
        Regex::new(r"(?i)\b(?:in|at|to)\s+([[:alpha:]][[:alpha:]'\- ]*?)\s*[.!?]?\s*$").unwrap();
    static ref HOTELS_RE: Regex = Regex::new(r"(?i)\b(hotels?|stay|accommodation)\b").unwrap();
    static ref ROOMS_RE: Regex = Regex::new(r"(?i)\brooms?\b").unwrap();
    static ref HELP_RE: Regex = Regex::new(r"(?i)^\s*(help|what can you do)\s*[.!?]?\s*$").unwrap();
}

pub struct Recognizer {
    client: reqwest::Client,
    model_url: Option<String>,
}

impl Recognizer {
    pub fn new(model_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            model_url,
        }
    }

    /// Classifies one message. Falls back to the keyword rules when no
    /// remote model is configured or the remote call fails.
    pub async fn recognize(&self, text: &str) -> Recognition {
        if let Some(url) = &self.model_url {
            match self.recognize_remote(url, text).await {
                Ok(recognition) => {
                    debug!(intent = ?recognition.intent, "remote recognizer matched");
                    return recognition;
                }
                Err(e) => {
                    warn!(error = %e, "remote recognizer failed, using keyword rules");
                }
            }
        }
        recognize_keywords(text)
    }

    async fn recognize_remote(&self, model_url: &str, text: &str) -> Result<Recognition> {
        let response = self
            .client
            .get(model_url)
            .query(&[("q", text)])
            .send()
            .await?
            .error_for_status()?;
        let body: LuisResponse = response.json().await?;

        let intent = body
            .top_scoring_intent
            .map(|scored| Intent::from_label(&scored.intent))
            .unwrap_or(Intent::None);
        let entities = body.entities.into_iter().filter_map(map_entity).collect();

        Ok(Recognition::new(intent, entities))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LuisResponse {
    top_scoring_intent: Option<LuisIntent>,
    #[serde(default)]
    entities: Vec<LuisEntity>,
}

#[derive(Debug, Deserialize)]
struct LuisIntent {
    intent: String,
}

#[derive(Debug, Deserialize)]
struct LuisEntity {
    entity: String,
    #[serde(rename = "type")]
    kind: String,
}

fn map_entity(entity: LuisEntity) -> Option<Entity> {
    let kind = entity.kind.to_lowercase();
    let kind = if kind.contains("airport") {
        EntityKind::Airport
    } else if kind.contains("city") || kind.contains("geography") {
        EntityKind::City
    } else if kind.contains("hotel") {
        EntityKind::Hotel
    } else if kind.contains("roomtype") {
        EntityKind::RoomType
    } else {
        return None;
    };
    Some(Entity {
        kind,
        value: entity.entity,
    })
}

/// Keyword-rule recognizer used when no remote model is available.
pub fn recognize_keywords(text: &str) -> Recognition {
    if HELP_RE.is_match(text) {
        return Recognition::new(Intent::Help, Vec::new());
    }
    if GREETING_RE.is_match(text) {
        return Recognition::new(Intent::Greetings, Vec::new());
    }
    if let Some(captures) = REVIEWS_RE.captures(text) {
        let hotel = captures[1].trim().to_string();
        return Recognition::new(
            Intent::ShowHotelsReviews,
            vec![Entity {
                kind: EntityKind::Hotel,
                value: hotel,
            }],
        );
    }
    if ROOMS_RE.is_match(text) {
        let entities = room_type_entity(text).into_iter().collect();
        return Recognition::new(Intent::Rooms, entities);
    }
    if HOTELS_RE.is_match(text) {
        let entities = destination_entity(text).into_iter().collect();
        return Recognition::new(Intent::SearchHotels, entities);
    }
    Recognition::none()
}

fn destination_entity(text: &str) -> Option<Entity> {
    if let Some(captures) = AIRPORT_RE.captures(text) {
        return Some(Entity {
            kind: EntityKind::Airport,
            value: captures[1].trim().to_string(),
        });
    }
    CITY_RE.captures(text).map(|captures| Entity {
        kind: EntityKind::City,
        value: captures[1].trim().to_string(),
    })
}

fn room_type_entity(text: &str) -> Option<Entity> {
    let lowered = text.to_lowercase();
    // Longest match wins, so "non-smoking" is never read as "smoking".
    ROOM_TYPES
        .iter()
        .filter(|room_type| lowered.contains(*room_type))
        .max_by_key(|room_type| room_type.len())
        .map(|room_type| Entity {
            kind: EntityKind::RoomType,
            value: (*room_type).to_string(),
        })
}
