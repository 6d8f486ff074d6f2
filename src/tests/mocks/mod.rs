//! Mock implementations for testing
//!
//! Mocks the seed store boundary with mockall so selector behaviour can be
//! checked without touching the filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;

use crate::core::name_gen::seed_store::{SeedStore, StoreResult};

// ============================================================================
// Seed Store Mock
// ============================================================================

mock! {
    /// Seed store whose reads are scripted per test.
    pub Store {}

    #[async_trait]
    impl SeedStore for Store {
        async fn read(&self, key: &str) -> StoreResult<String>;
    }
}
