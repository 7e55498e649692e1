//! Corpus Builder: one normalized document per catalog item plus the
//! validated rating history of a single user.
//!
//! The position of an item in [`Corpus::documents`] is the item's index for
//! the whole run. Vectors, profiles and rankings all address items by this
//! index, so a `Corpus` must never be reused across catalog snapshots.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{Error, Result};
use crate::traits::Normalizer;
use crate::types::{Document, Item, ItemId, RatingEvent, UserId, MAX_RATING, MIN_RATING};

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
    index_by_id: HashMap<ItemId, usize>,
}

impl Corpus {
    /// Normalize every item in catalog order. Items missing optional fields
    /// still get a document; duplicate ids are rejected.
    pub fn build<N>(items: &[Item], normalizer: &N) -> Result<Self>
    where
        N: Normalizer + ?Sized,
    {
        let mut documents = Vec::with_capacity(items.len());
        let mut index_by_id = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match index_by_id.entry(item.id) {
                Entry::Occupied(_) => return Err(Error::DuplicateItem(item.id)),
                Entry::Vacant(slot) => {
                    slot.insert(index);
                }
            }
            documents.push(Document {
                index,
                item_id: item.id,
                title: item.title.clone(),
                text: normalizer.normalize(&item.combined_text()),
            });
        }
        debug!(documents = documents.len(), "corpus built");
        Ok(Self { documents, index_by_id })
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn document(&self, index: usize) -> Option<&Document> { self.documents.get(index) }

    pub fn index_of(&self, item_id: ItemId) -> Option<usize> { self.index_by_id.get(&item_id).copied() }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    /// Validate and collapse `events` down to one rating per item for `user_id`.
    ///
    /// Events of other users are ignored. A rating outside `[0, 5]` (or NaN)
    /// and a reference to an item missing from the catalog are contract
    /// violations. When the user rated an item more than once the latest
    /// timestamp wins; on equal timestamps the later event in `events` wins.
    pub fn user_ratings(&self, user_id: UserId, events: &[RatingEvent]) -> Result<UserRatings> {
        let mut latest: HashMap<usize, RatedItem> = HashMap::new();
        for event in events.iter().filter(|e| e.user_id == user_id) {
            if !event.rating.is_finite() || event.rating < MIN_RATING || event.rating > MAX_RATING {
                return Err(Error::RatingOutOfRange { user_id, item_id: event.item_id, rating: event.rating });
            }
            let index = self
                .index_of(event.item_id)
                .ok_or(Error::UnknownRatedItem { user_id, item_id: event.item_id })?;
            let rated = RatedItem { index, item_id: event.item_id, rating: event.rating, timestamp: event.timestamp };
            match latest.entry(index) {
                Entry::Occupied(mut slot) => {
                    if rated.timestamp >= slot.get().timestamp {
                        slot.insert(rated);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(rated);
                }
            }
        }
        let mut items: Vec<RatedItem> = latest.into_values().collect();
        items.sort_by_key(|r| r.index);
        for r in &items {
            debug!(user_id, item_id = r.item_id, rating = r.rating, title = %self.documents[r.index].title, "rated item");
        }
        Ok(UserRatings { user_id, items })
    }
}

/// A single, deduplicated rating resolved against the corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedItem {
    pub index: usize,
    pub item_id: ItemId,
    pub rating: f64,
    pub timestamp: DateTime<Utc>,
}

/// One user's ratings, one per item, ordered by item index.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRatings {
    user_id: UserId,
    items: Vec<RatedItem>,
}

impl UserRatings {
    pub fn user_id(&self) -> UserId { self.user_id }

    pub fn iter(&self) -> impl Iterator<Item = &RatedItem> { self.items.iter() }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn contains(&self, index: usize) -> bool {
        self.items.binary_search_by_key(&index, |r| r.index).is_ok()
    }

    pub fn rating_of(&self, index: usize) -> Option<f64> {
        self.items.binary_search_by_key(&index, |r| r.index).ok().map(|i| self.items[i].rating)
    }
}
