//! Video repository over the session cache.

use std::sync::Arc;

use fnext::compose::{present_unless, to_optional};
use fnext::control::Optional;
use fnext::effect::{Deferred, if_absent_async, map_optional_async, to_optional_async_when};

use crate::domain::{SessionId, Video};
use crate::infrastructure::VideoCache;

/// Reads and writes the video list of a session.
///
/// `Absent` means the operation failed; a session with no stored videos
/// reads as `Present(vec![])`.
pub trait VideoRepository: Send + Sync {
    /// Reads the session's video list.
    fn get_videos(&self, session: &SessionId) -> Deferred<Optional<Vec<Video>>>;

    /// Replaces the session's video list.
    fn add(&self, session: &SessionId, videos: Vec<Video>) -> Deferred<Optional<()>>;
}

/// [`VideoRepository`] that stores lists in a [`VideoCache`].
#[derive(Clone)]
pub struct CacheVideoRepository {
    cache: Arc<dyn VideoCache>,
}

impl CacheVideoRepository {
    /// Creates a repository over `cache`.
    #[must_use]
    pub fn new(cache: Arc<dyn VideoCache>) -> Self {
        Self { cache }
    }
}

impl VideoRepository for CacheVideoRepository {
    fn get_videos(&self, session: &SessionId) -> Deferred<Optional<Vec<Video>>> {
        let failed_session = session.clone();
        let read = self.cache.get(session).map(move |result| {
            to_optional(
                result
                    .inspect_err(|error| {
                        tracing::warn!(session = %failed_session, "Failed to read video list: {error}");
                    })
                    .ok(),
            )
        });

        map_optional_async(read, |stored| {
            let listed = to_optional_async_when(Deferred::pure(stored), Vec::is_empty);
            if_absent_async(listed, || Deferred::pure(Vec::new()))
        })
    }

    fn add(&self, session: &SessionId, videos: Vec<Video>) -> Deferred<Optional<()>> {
        self.cache
            .add(session, &videos)
            .map(|written| present_unless(written, |written| !*written).map(|_| ()))
    }
}
