//! Recommendation stores. Both replace a user's set in one step.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::traits::RecommendationStore;
use crate::types::{Recommendation, UserId};

fn poisoned<T>(_: T) -> Error { Error::Store("lock poisoned".to_string()) }

#[derive(Debug, Default)]
pub struct InMemoryStore {
    sets: RwLock<HashMap<UserId, Arc<[Recommendation]>>>,
}

impl InMemoryStore {
    pub fn new() -> Self { Self::default() }
}

impl RecommendationStore for InMemoryStore {
    fn replace(&self, user_id: UserId, recommendations: Vec<Recommendation>) -> Result<()> {
        let set: Arc<[Recommendation]> = recommendations.into();
        self.sets.write().map_err(poisoned)?.insert(user_id, set);
        Ok(())
    }

    fn get(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        let sets = self.sets.read().map_err(poisoned)?;
        Ok(sets.get(&user_id).map(|s| s.to_vec()).unwrap_or_default())
    }
}

/// One JSON file per user under a directory, named `<user_id>.json`.
///
/// A replace writes the whole set to a temporary file in the same directory
/// and renames it over the user's file. Writers for different users never
/// touch the same file, and a reader sees either the previous set or the new
/// one, including across processes.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self { Self { dir: dir.into() } }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn user_path(&self, user_id: UserId) -> PathBuf { self.dir.join(format!("{user_id}.json")) }
}

impl RecommendationStore for JsonFileStore {
    fn replace(&self, user_id: UserId, recommendations: Vec<Recommendation>) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        serde_json::to_writer_pretty(&mut tmp, &recommendations)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.user_path(user_id)).map_err(|e| Error::Io(e.error))?;
        Ok(())
    }

    fn get(&self, user_id: UserId) -> Result<Vec<Recommendation>> {
        let path = self.user_path(user_id);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }
}
