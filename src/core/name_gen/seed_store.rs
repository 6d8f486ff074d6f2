//! Seed Stores
//!
//! Read-only key/value access to seed word lists. Keys are filename shaped:
//!
//! - `{race}.{gender}.json` given names for gendered races
//! - `{race}.json` given names for genderless races
//! - `{race}.surname.json` surnames
//!
//! CRITICAL: [`FsSeedStore`] uses `tokio::fs` so reads never block the runtime.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::errors::SeedStoreError;
use super::gender::Gender;
use super::races::Race;

/// Result type for seed store reads.
pub type StoreResult<T> = std::result::Result<T, SeedStoreError>;

// ============================================================================
// Keys
// ============================================================================

/// Builders for seed store keys.
pub struct SeedKey;

impl SeedKey {
    /// Key of the given-name list. The gender is left out for genderless races.
    pub fn given(race: &Race, gender: Gender) -> String {
        if race.is_genderless() {
            format!("{}.json", race.name())
        } else {
            format!("{}.{}.json", race.name(), gender)
        }
    }

    /// Key of the surname list.
    pub fn surname(race: &Race) -> String {
        format!("{}.surname.json", race.name())
    }
}

// ============================================================================
// Store Trait
// ============================================================================

/// Source of serialized seed lists.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Read the raw text stored under `key`.
    async fn read(&self, key: &str) -> StoreResult<String>;
}

// ============================================================================
// Filesystem Store
// ============================================================================

/// Seed store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FsSeedStore {
    root: PathBuf,
}

impl FsSeedStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path a key resolves to.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

#[async_trait]
impl SeedStore for FsSeedStore {
    async fn read(&self, key: &str) -> StoreResult<String> {
        let path = self.path_for(key);

        fs::read_to_string(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SeedStoreError::not_found(key)
            } else {
                SeedStoreError::read_failed(&path, e)
            }
        })
    }
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// Seed store held in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySeedStore {
    entries: HashMap<String, String>,
}

impl MemorySeedStore {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store raw text under a key, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, raw: impl Into<String>) {
        self.entries.insert(key.into(), raw.into());
    }

    /// Store a list of seeds serialized as JSON.
    pub fn insert_list<I, T>(&mut self, key: impl Into<String>, seeds: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let seeds: Vec<String> = seeds.into_iter().map(Into::into).collect();
        // Vec<String> always serializes
        let raw = serde_json::to_string(&seeds).unwrap_or_default();
        self.entries.insert(key.into(), raw);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl SeedStore for MemorySeedStore {
    async fn read(&self, key: &str) -> StoreResult<String> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| SeedStoreError::not_found(key))
    }
}

// ============================================================================
// Tests
// ============================================================================
