//! Catalog and rating-history sources backed by JSON files or plain vectors.
//!
//! File-backed sources re-read their file on every call so each pipeline
//! run sees the snapshot current at invocation time.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::traits::{CatalogSource, RatingSource};
use crate::types::{Item, RatingEvent, UserId};

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&content)?)
}

/// A JSON array of [`Item`] records.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl CatalogSource for JsonCatalog {
    fn items(&self) -> Result<Vec<Item>> { read_json_array(&self.path) }
}

/// A JSON array of [`RatingEvent`] records for any number of users.
#[derive(Debug, Clone)]
pub struct JsonRatings {
    path: PathBuf,
}

impl JsonRatings {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    pub fn path(&self) -> &Path { &self.path }
}

impl RatingSource for JsonRatings {
    fn ratings_for(&self, user_id: UserId) -> Result<Vec<RatingEvent>> {
        let events: Vec<RatingEvent> = read_json_array(&self.path)?;
        Ok(events.into_iter().filter(|e| e.user_id == user_id).collect())
    }
}

impl CatalogSource for Vec<Item> {
    fn items(&self) -> Result<Vec<Item>> { Ok(self.clone()) }
}

impl RatingSource for Vec<RatingEvent> {
    fn ratings_for(&self, user_id: UserId) -> Result<Vec<RatingEvent>> {
        Ok(self.iter().filter(|e| e.user_id == user_id).cloned().collect())
    }
}
