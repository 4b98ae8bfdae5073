//! Infrastructure layer: configuration, cache adapters and dependency wiring.

mod cache;
mod config;
mod dependencies;

pub use cache::{CacheError, InMemoryVideoCache, RedisVideoCache, SESSION_DURATION, VideoCache};
pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
