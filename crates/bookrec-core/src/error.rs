use thiserror::Error;

use crate::types::{ItemId, UserId};

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Rating {rating} by user {user_id} for item {item_id} is outside [0, 5]")]
    RatingOutOfRange { user_id: UserId, item_id: ItemId, rating: f64 },

    #[error("User {user_id} rated item {item_id} which is not in the catalog")]
    UnknownRatedItem { user_id: UserId, item_id: ItemId },

    #[error("Item {0} is not in the catalog")]
    UnknownItem(ItemId),

    #[error("Catalog contains item {0} more than once")]
    DuplicateItem(ItemId),

    #[error("Store failed: {0}")]
    Store(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True for contract violations in the caller's input data, as opposed to
    /// failures of the environment (files, stores).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::RatingOutOfRange { .. }
                | Error::UnknownRatedItem { .. }
                | Error::UnknownItem(_)
                | Error::DuplicateItem(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
