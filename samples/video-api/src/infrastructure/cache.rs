//! Session-keyed video list cache.
//!
//! The session identifier is the cache key and the value is the JSON
//! encoding of the session's video list. A read reports a failure separately
//! from a missing key, so callers never mistake an outage for an empty
//! session. A failed write is logged and reported as `false`.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use fnext::effect::Deferred;
use redis::AsyncCommands;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::domain::{SessionId, Video};

/// How long a session's list lives in the cache.
pub const SESSION_DURATION: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Errors raised while talking to the cache.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The cache could not be reached or rejected the command.
    #[error("cache connection error: {0}")]
    Connection(#[from] redis::RedisError),
    /// A stored value could not be encoded or decoded.
    #[error("cache serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value storage for per-session video lists.
pub trait VideoCache: Send + Sync {
    /// Reads the list stored for `session`; `Ok(None)` when nothing is stored.
    fn get(&self, session: &SessionId) -> Deferred<Result<Option<Vec<Video>>, CacheError>>;

    /// Replaces the list stored for `session`; `false` when the write failed.
    fn add(&self, session: &SessionId, videos: &[Video]) -> Deferred<bool>;
}

// =============================================================================
// Redis
// =============================================================================

/// [`VideoCache`] backed by Redis.
#[derive(Clone)]
pub struct RedisVideoCache {
    client: Arc<redis::Client>,
    time_to_live: Duration,
}

impl RedisVideoCache {
    /// Creates a cache over an opened Redis client.
    #[must_use]
    pub fn new(client: redis::Client) -> Self {
        Self {
            client: Arc::new(client),
            time_to_live: SESSION_DURATION,
        }
    }

    /// Opens a Redis client for `url`.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if the URL is malformed.
    pub fn open(url: &str) -> Result<Self, CacheError> {
        Ok(Self::new(redis::Client::open(url)?))
    }

    async fn read(client: &redis::Client, key: &str) -> Result<Option<Vec<Video>>, CacheError> {
        let mut connection = client.get_multiplexed_async_connection().await?;
        let stored: Option<String> = connection.get(key).await?;

        stored
            .map(|json| serde_json::from_str(&json))
            .transpose()
            .map_err(CacheError::from)
    }

    async fn write(
        client: &redis::Client,
        key: &str,
        videos: &[Video],
        time_to_live: Duration,
    ) -> Result<(), CacheError> {
        let json = serde_json::to_string(videos)?;
        let mut connection = client.get_multiplexed_async_connection().await?;
        let () = connection.set_ex(key, json, time_to_live.as_secs()).await?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisVideoCache {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RedisVideoCache")
            .field("time_to_live", &self.time_to_live)
            .finish_non_exhaustive()
    }
}

impl VideoCache for RedisVideoCache {
    fn get(&self, session: &SessionId) -> Deferred<Result<Option<Vec<Video>>, CacheError>> {
        let client = Arc::clone(&self.client);
        let key = session.as_str().to_string();

        Deferred::new(move || async move { Self::read(&client, &key).await })
    }

    fn add(&self, session: &SessionId, videos: &[Video]) -> Deferred<bool> {
        let client = Arc::clone(&self.client);
        let key = session.as_str().to_string();
        let videos = videos.to_vec();
        let time_to_live = self.time_to_live;

        Deferred::new(move || async move {
            match Self::write(&client, &key, &videos, time_to_live).await {
                Ok(()) => true,
                Err(error) => {
                    tracing::warn!("Failed to write video list for session '{}': {}", key, error);
                    false
                }
            }
        })
    }
}

// =============================================================================
// In-Memory
// =============================================================================

/// [`VideoCache`] held in process memory. Used when no Redis URL is
/// configured and in tests.
#[derive(Clone, Debug, Default)]
pub struct InMemoryVideoCache {
    entries: Arc<RwLock<HashMap<String, Vec<Video>>>>,
}

impl InMemoryVideoCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl VideoCache for InMemoryVideoCache {
    fn get(&self, session: &SessionId) -> Deferred<Result<Option<Vec<Video>>, CacheError>> {
        let entries = Arc::clone(&self.entries);
        let key = session.as_str().to_string();

        Deferred::new(move || async move { Ok(entries.read().await.get(&key).cloned()) })
    }

    fn add(&self, session: &SessionId, videos: &[Video]) -> Deferred<bool> {
        let entries = Arc::clone(&self.entries);
        let key = session.as_str().to_string();
        let videos = videos.to_vec();

        Deferred::new(move || async move {
            entries.write().await.insert(key, videos);
            true
        })
    }
}
