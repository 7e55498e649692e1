use crate::error::Result;
use crate::types::{Item, RatingEvent, Recommendation, UserId};

/// Turns raw free text into a whitespace-joined token stream.
pub trait Normalizer: Send + Sync {
    fn normalize(&self, text: &str) -> String;
}

/// Read access to the item catalog. Each call returns a fresh snapshot.
pub trait CatalogSource: Send + Sync {
    fn items(&self) -> Result<Vec<Item>>;
}

/// Read access to rating history.
pub trait RatingSource: Send + Sync {
    fn ratings_for(&self, user_id: UserId) -> Result<Vec<RatingEvent>>;
}

/// Persistence for recommendation sets. `replace` swaps the user's whole set
/// at once; readers never observe a mix of two runs.
pub trait RecommendationStore: Send + Sync {
    fn replace(&self, user_id: UserId, recommendations: Vec<Recommendation>) -> Result<()>;
    fn get(&self, user_id: UserId) -> Result<Vec<Recommendation>>;
}
