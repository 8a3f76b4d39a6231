//! Transient key/value cache used by the wizard to carry connection
//! settings from step 2 to step 3.
//!
//! Values are plain strings with a time-to-live; a read after the TTL
//! behaves exactly like a read of a key that was never written.
mod memory;

pub use memory::InMemoryCache;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::errors::CacheError;

/// Trait for an expiring key/value store.
#[async_trait]
pub trait TransientCache: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value, for `ttl`.
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Returns the value under `key` if present and not expired.
    async fn get(&self, key: &str) -> Option<String>;
}

/// Serializes `value` as JSON and stores it under `key`.
pub async fn set_json<T: Serialize + Sync>(
    cache: &dyn TransientCache,
    key: &str,
    value: &T,
    ttl: Duration,
) -> Result<(), CacheError> {
    let encoded = serde_json::to_string(value)?;
    cache.set(key, encoded, ttl).await;
    Ok(())
}

/// Reads the JSON value under `key`, `None` when absent or expired.
pub async fn get_json<T: DeserializeOwned>(
    cache: &dyn TransientCache,
    key: &str,
) -> Result<Option<T>, CacheError> {
    match cache.get(key).await {
        Some(encoded) => Ok(Some(serde_json::from_str(&encoded)?)),
        None => Ok(None),
    }
}
