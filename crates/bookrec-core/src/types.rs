//! Domain types flowing through the recommendation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type ItemId = u64;
pub type UserId = u64;

/// Lowest and highest rating a user can give.
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// A catalog entry. Only `id` and `title` are required; everything else
/// defaults to empty so partially filled records still make a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), authors: Vec::new(), genres: Vec::new(), description: None }
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Raw text of the item: title, authors, genres and description separated
    /// by single spaces. Absent parts contribute an empty string.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.authors.join(" "),
            self.genres.join(" "),
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// One rating a user gave an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEvent {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub rating: f64,
    pub timestamp: DateTime<Utc>,
}

/// A catalog item's normalized text, tied to its position in the run.
///
/// - `index`: position in the catalog snapshot, shared by every stage
/// - `item_id`: catalog identity
/// - `title`: raw title, used for near-duplicate checks
/// - `text`: normalized token stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub index: usize,
    pub item_id: ItemId,
    pub title: String,
    pub text: String,
}

/// A ranked candidate produced by the ranker. Higher `score` is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    pub index: usize,
    pub item_id: ItemId,
    pub title: String,
    pub score: f64,
}

/// A persisted recommendation. `score` is a raw cosine similarity, not a
/// probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub score: f64,
    pub created_at: DateTime<Utc>,
}
