//! Intent and entity types produced by the recognizer.

use serde::{Deserialize, Serialize};

/// Classified label for what the user wants.
///
/// `None` is the recognizer's "no match" label, not an error: the dispatcher
/// answers it with a fixed clarification reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Greetings,
    SearchHotels,
    Rooms,
    ShowHotelsReviews,
    Help,
    None,
}

impl Intent {
    /// Maps a recognizer label to an intent, falling back to `None` for
    /// anything unknown.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Greetings" => Intent::Greetings,
            "SearchHotels" => Intent::SearchHotels,
            "Rooms" => Intent::Rooms,
            "ShowHotelsReviews" => Intent::ShowHotelsReviews,
            "Help" => Intent::Help,
            _ => Intent::None,
        }
    }
}

/// The kinds of structured values the recognizer extracts from user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    City,
    Airport,
    Hotel,
    RoomType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
}

/// Result of running one message through the recognizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recognition {
    pub intent: Intent,
    pub entities: Vec<Entity>,
}

impl Recognition {
    pub fn new(intent: Intent, entities: Vec<Entity>) -> Self {
        Self { intent, entities }
    }

    pub fn none() -> Self {
        Self::new(Intent::None, Vec::new())
    }

    /// First entity of the given kind, if any.
    pub fn entity(&self, kind: EntityKind) -> Option<&str> {
        self.entities
            .iter()
            .find(|entity| entity.kind == kind)
            .map(|entity| entity.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_from_label() {
        assert_eq!(Intent::from_label("SearchHotels"), Intent::SearchHotels);
        assert_eq!(Intent::from_label("Help"), Intent::Help);
        assert_eq!(Intent::from_label("None"), Intent::None);
        assert_eq!(Intent::from_label("SomethingElse"), Intent::None);
    }

    #[test]
    fn test_entity_lookup_by_kind() {
        let recognition = Recognition::new(
            Intent::SearchHotels,
            vec![
                Entity {
                    kind: EntityKind::Airport,
                    value: "CDG".to_string(),
                },
                Entity {
                    kind: EntityKind::City,
                    value: "Paris".to_string(),
                },
            ],
        );

        assert_eq!(recognition.entity(EntityKind::City), Some("Paris"));
        assert_eq!(recognition.entity(EntityKind::Airport), Some("CDG"));
        assert_eq!(recognition.entity(EntityKind::Hotel), None);
    }
}
