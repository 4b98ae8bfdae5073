//! Fault injection for the video repository.
//!
//! [`FlakyVideoRepository`] makes a configurable share of list reads fail,
//! so clients can be exercised against an unreliable backend. Writes are
//! never affected.

use std::sync::{Arc, Mutex, PoisonError};

use fnext::compose::present_unless;
use fnext::control::Optional;
use fnext::effect::Deferred;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::VideoRepository;
use crate::domain::{SessionId, Video};

/// Normalizes a configured flakiness percentage.
///
/// Zero or less disables fault injection; anything above 100 is clamped
/// to 100.
#[must_use]
pub fn flakiness(percentage: i32) -> Optional<u32> {
    present_unless(percentage, |percentage| *percentage <= 0)
        .map(|percentage| percentage.min(100).unsigned_abs())
}

/// Decides, per call, whether an injected failure fires.
#[derive(Debug)]
pub struct FlakinessProbe {
    percentage: u32,
    rng: Mutex<StdRng>,
}

impl FlakinessProbe {
    /// Creates a probe seeded from the operating system.
    #[must_use]
    pub fn new(percentage: u32) -> Self {
        Self::with_rng(percentage, StdRng::from_os_rng())
    }

    /// Creates a probe with a fixed seed, for reproducible runs.
    #[must_use]
    pub fn seeded(percentage: u32, seed: u64) -> Self {
        Self::with_rng(percentage, StdRng::seed_from_u64(seed))
    }

    fn with_rng(percentage: u32, rng: StdRng) -> Self {
        Self {
            percentage: percentage.min(100),
            rng: Mutex::new(rng),
        }
    }

    /// Returns the failure percentage.
    #[must_use]
    pub const fn percentage(&self) -> u32 {
        self.percentage
    }

    /// Draws a number in `0..100` and fires when it is below the percentage.
    pub fn fires(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random_range(0..100) < self.percentage
    }
}

/// Repository decorator that fails a share of `get_videos` calls.
pub struct FlakyVideoRepository {
    inner: Arc<dyn VideoRepository>,
    probe: FlakinessProbe,
}

impl FlakyVideoRepository {
    /// Wraps `inner`, failing reads according to `probe`.
    #[must_use]
    pub fn new(inner: Arc<dyn VideoRepository>, probe: FlakinessProbe) -> Self {
        Self { inner, probe }
    }
}

impl VideoRepository for FlakyVideoRepository {
    fn get_videos(&self, session: &SessionId) -> Deferred<Optional<Vec<Video>>> {
        if self.probe.fires() {
            tracing::debug!(session = %session, "Injected failure for video list read");
            return Deferred::pure(Optional::Absent);
        }
        self.inner.get_videos(session)
    }

    fn add(&self, session: &SessionId, videos: Vec<Video>) -> Deferred<Optional<()>> {
        self.inner.add(session, videos)
    }
}

/// Wraps `repository` in a [`FlakyVideoRepository`] when `percentage` enables
/// fault injection, and returns it untouched otherwise.
#[must_use]
pub fn with_flakiness(
    repository: Arc<dyn VideoRepository>,
    percentage: i32,
    seed: Option<u64>,
) -> Arc<dyn VideoRepository> {
    flakiness(percentage).match_with(
        |percentage| {
            tracing::info!(percentage, "Fault injection enabled for video list reads");
            let probe = seed.map_or_else(
                || FlakinessProbe::new(percentage),
                |seed| FlakinessProbe::seeded(percentage, seed),
            );
            Arc::new(FlakyVideoRepository::new(Arc::clone(&repository), probe))
                as Arc<dyn VideoRepository>
        },
        || Arc::clone(&repository),
    )
}
