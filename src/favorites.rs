//! Saved recipe names, kept in a durable string key-value store.
//!
//! The whole list lives under one key as a versioned JSON document and is
//! rewritten in full on every change. Concurrent writers race and the last
//! full write wins.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::RecipeError;

/// Key under which the favorites document is stored
pub const FAVORITES_KEY: &str = "favoriteRecipes";

/// Current layout version of the favorites document
pub const FAVORITES_VERSION: u32 = 1;

/// Synchronous string key-value storage that outlives the process
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, RecipeError>;
    fn set(&self, key: &str, value: &str) -> Result<(), RecipeError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, RecipeError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecipeError> {
        (**self).set(key, value)
    }
}

/// Key-value store backed by a single JSON object on disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<HashMap<String, String>, RecipeError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_document(&self, document: &HashMap<String, String>) -> Result<(), RecipeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Replace the whole document at once
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, serde_json::to_string_pretty(document)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, RecipeError> {
        Ok(self.read_document()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecipeError> {
        let mut document = self.read_document()?;
        document.insert(key.to_string(), value.to_string());
        self.write_document(&document)
    }
}

/// Key-value store that only lives as long as the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, RecipeError> {
        let entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), RecipeError> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotPresent,
}

#[derive(Debug, Serialize, Deserialize)]
struct FavoritesDocument {
    version: u32,
    names: Vec<String>,
}

/// Accepts the versioned document and the bare array written before versioning
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredFavorites {
    Versioned(FavoritesDocument),
    Legacy(Vec<String>),
}

/// Ordered, duplicate-free list of saved recipe names
pub struct FavoritesStore {
    store: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Saved names in insertion order; empty when nothing was ever saved
    pub fn list(&self) -> Result<Vec<String>, RecipeError> {
        let raw = match self.store.get(FAVORITES_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let names = match serde_json::from_str::<StoredFavorites>(&raw)? {
            StoredFavorites::Versioned(doc) if doc.version > FAVORITES_VERSION => {
                return Err(RecipeError::StorageFormat(format!(
                    "favorites document version {} is newer than supported version {}",
                    doc.version, FAVORITES_VERSION
                )));
            }
            StoredFavorites::Versioned(doc) => doc.names,
            StoredFavorites::Legacy(names) => {
                debug!("Reading unversioned favorites list");
                names
            }
        };

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Ok(unique)
    }

    /// Append `name` unless it is already saved (exact, case-sensitive match)
    pub fn add(&self, name: &str) -> Result<AddOutcome, RecipeError> {
        if name.trim().is_empty() {
            return Err(RecipeError::InvalidInput(
                "Recipe name cannot be empty".to_string(),
            ));
        }

        let mut names = self.list()?;
        if names.iter().any(|n| n == name) {
            debug!("'{}' is already saved", name);
            return Ok(AddOutcome::AlreadyExists);
        }

        names.push(name.to_string());
        self.persist(&names)?;
        info!("Saved '{}' to favorites", name);
        Ok(AddOutcome::Added)
    }

    /// Remove `name`; removing an unsaved name is a no-op
    pub fn delete(&self, name: &str) -> Result<DeleteOutcome, RecipeError> {
        let names = self.list()?;
        let before = names.len();
        let remaining: Vec<String> = names.into_iter().filter(|n| n != name).collect();
        self.persist(&remaining)?;

        if remaining.len() < before {
            info!("Removed '{}' from favorites", name);
            Ok(DeleteOutcome::Deleted)
        } else {
            Ok(DeleteOutcome::NotPresent)
        }
    }

    fn persist(&self, names: &[String]) -> Result<(), RecipeError> {
        let document = FavoritesDocument {
            version: FAVORITES_VERSION,
            names: names.to_vec(),
        };
        self.store
            .set(FAVORITES_KEY, &serde_json::to_string(&document)?)
    }
}
