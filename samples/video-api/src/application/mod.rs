//! Application layer: the video repository and its decorators.

mod flaky;
mod repository;

pub use flaky::{FlakinessProbe, FlakyVideoRepository, flakiness, with_flakiness};
pub use repository::{CacheVideoRepository, VideoRepository};
