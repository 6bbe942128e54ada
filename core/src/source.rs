//! The upstream trivia service, as seen by game setup.
//!
//! Records mirror the JSON the service returns; unknown fields are ignored.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Display;
use serde::{Deserialize, Deserializer, Serialize};

use crate::*;

/// One entry of the category pool listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues_count: Option<usize>,
}

impl CategorySummary {
    /// Whether the listing says the category can fill a column; unknown counts pass.
    pub fn has_enough_clues(&self) -> bool {
        self.clues_count.is_none_or(|count| count >= CLUES_PER_CATEGORY)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    #[serde(default)]
    pub id: Option<CategoryId>,
    pub title: String,
    #[serde(default)]
    pub clues: Vec<ClueRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answer: String,
}

impl From<ClueRecord> for Clue {
    fn from(record: ClueRecord) -> Self {
        Clue::new(record.question, record.answer)
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only access to category data, every call is one round trip.
#[allow(async_fn_in_trait)]
pub trait CategorySource {
    type Error: Display;

    async fn category_pool(&self, count: usize) -> core::result::Result<Vec<CategorySummary>, Self::Error>;

    async fn category(&self, id: CategoryId) -> core::result::Result<CategoryDetail, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_pool_listing_ignoring_extra_fields() {
        let json = r#"[
            {"id": 11531, "title": "mixed bag", "clues_count": 5},
            {"id": 11532, "title": "let's \"ch\"at", "clues_count": 3, "created_at": "2014-02-11"},
            {"id": 11533}
        ]"#;

        let pool: Vec<CategorySummary> = serde_json::from_str(json).unwrap();

        assert_eq!(pool.len(), 3);
        assert_eq!(pool[0].id, 11531);
        assert!(pool[0].has_enough_clues());
        assert!(!pool[1].has_enough_clues());
        assert_eq!(pool[2].title, None);
        assert!(pool[2].has_enough_clues());
    }

    #[test]
    fn decodes_category_with_null_clue_text() {
        let json = r#"{
            "id": 42,
            "title": "literature",
            "clues_count": 2,
            "clues": [
                {"id": 1, "question": "Bell Jar author", "answer": "Plath", "value": 200},
                {"id": 2, "question": null, "answer": "Shakespeare"}
            ]
        }"#;

        let detail: CategoryDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.title, "literature");
        assert_eq!(detail.clues[0].answer, "Plath");
        assert_eq!(detail.clues[1].question, "");

        let clue = Clue::from(detail.clues[0].clone());
        assert_eq!(clue.showing(), Showing::Hidden);
    }
}
