//! Dependency injection container for the video application.
//!
//! # Example
//!
//! ```rust,ignore
//! use video_api::infrastructure::{AppConfig, AppDependencies};
//!
//! let config = AppConfig::from_env()?;
//! let dependencies = AppDependencies::from_config(config)?;
//! ```

use std::sync::Arc;

use super::cache::{CacheError, InMemoryVideoCache, RedisVideoCache, VideoCache};
use super::config::AppConfig;
use crate::application::{CacheVideoRepository, VideoRepository, with_flakiness};

/// Application dependency container.
///
/// The repository is held behind a trait object so handlers can be
/// exercised against test doubles.
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    repository: Arc<dyn VideoRepository>,
}

impl AppDependencies {
    /// Creates a container from already-built parts.
    #[must_use]
    pub fn new(config: AppConfig, repository: Arc<dyn VideoRepository>) -> Self {
        Self { config, repository }
    }

    /// Wires the production object graph described by `config`.
    ///
    /// Redis backs the repository when `redis_url` is set, the in-memory
    /// cache otherwise. The repository is wrapped in the flakiness
    /// decorator when the configured percentage enables it.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Connection` if the Redis URL is malformed.
    pub fn from_config(config: AppConfig) -> Result<Self, CacheError> {
        let cache: Arc<dyn VideoCache> = match config.redis_url.as_deref() {
            Some(url) => {
                tracing::info!("Using Redis video cache");
                Arc::new(RedisVideoCache::open(url)?)
            }
            None => {
                tracing::warn!("REDIS_URL is not set, using in-memory video cache");
                Arc::new(InMemoryVideoCache::new())
            }
        };

        let repository = with_flakiness(
            Arc::new(CacheVideoRepository::new(cache)),
            config.flakiness_percentage,
            config.rng_seed,
        );

        Ok(Self::new(config, repository))
    }

    /// Returns the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the video repository.
    #[must_use]
    pub fn repository(&self) -> Arc<dyn VideoRepository> {
        Arc::clone(&self.repository)
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SessionId, Video};
    use fnext::control::Optional;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn from_config_without_redis_uses_in_memory_cache() {
        let dependencies = AppDependencies::from_config(AppConfig::local("secret")).unwrap();
        let repository = dependencies.repository();
        let session = SessionId::new("s");
        let videos = vec![Video::new("Intro", "https://example.com/intro")];

        assert_eq!(repository.add(&session, videos.clone()).await, Optional::Present(()));
        assert_eq!(repository.get_videos(&session).await, Optional::Present(videos));
    }

    #[rstest]
    fn from_config_rejects_malformed_redis_url() {
        let config = AppConfig {
            redis_url: Some("definitely not redis".to_string()),
            ..AppConfig::local("secret")
        };

        assert!(AppDependencies::from_config(config).is_err());
    }

    #[rstest]
    fn config_is_exposed() {
        let dependencies = AppDependencies::from_config(AppConfig::local("secret")).unwrap();
        assert_eq!(dependencies.config().api_key, "secret");
    }
}
