//! Asynchronous scoped execution.
//!
//! [`using_async`] and [`using2_async`] follow the same rules as
//! [`using`](crate::control::using) and [`using2`](crate::control::using2):
//! every acquired resource is released exactly once, in reverse acquisition
//! order, after the action has settled. A panic raised while building the
//! action's future or while polling it is resumed once the resources are
//! released.
//!
//! Dropping the returned `Deferred` cancels the action. The resources are
//! still released, in the same order; a release panic during cancellation is
//! logged instead of resumed.
//!
//! The action borrows the resources for the duration of its future, which is
//! why it returns a [`BoxFuture`] tied to that borrow:
//!
//! ```rust
//! use fnext::control::Dispose;
//! use fnext::effect::using_async;
//!
//! struct Socket {
//!     sent: Vec<String>,
//! }
//!
//! impl Dispose for Socket {
//!     fn dispose(self) {}
//! }
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let sent = using_async(Socket { sent: Vec::new() }, |socket| {
//!     Box::pin(async move {
//!         socket.sent.push("ping".to_string());
//!         socket.sent.len()
//!     })
//! })
//! .await;
//!
//! assert_eq!(sent, 1);
//! # });
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::thread;

use futures::FutureExt;
use futures::future::BoxFuture;

use super::Deferred;
use crate::control::{Dispose, panic_message, release, settle};

/// Runs an asynchronous action against `resource`, then releases it.
///
/// Nothing happens until the returned `Deferred` is awaited. Dropping it,
/// before or during the action, still releases the resource.
pub fn using_async<R, T, F>(resource: R, action: F) -> Deferred<T>
where
    R: Dispose + Send + 'static,
    T: Send + 'static,
    F: for<'a> FnOnce(&'a mut R) -> BoxFuture<'a, T> + Send + 'static,
{
    let mut resource = Releasing::new(resource);

    Deferred::new(move || async move {
        let outcome = run_guarded(|| action(resource.get_mut())).await;
        settle(outcome, [resource.finish()])
    })
}

/// Runs an asynchronous action against a resource and a second resource
/// derived from it.
///
/// Release order is second, then first. If `create_second` panics, the first
/// resource is released and the action never runs.
///
/// # Examples
///
/// ```rust
/// use fnext::control::Dispose;
/// use fnext::effect::using2_async;
/// use std::sync::{Arc, Mutex};
///
/// struct Logged(&'static str, Arc<Mutex<Vec<&'static str>>>);
///
/// impl Dispose for Logged {
///     fn dispose(self) {
///         self.1.lock().unwrap().push(self.0);
///     }
/// }
///
/// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// # runtime.block_on(async {
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let first = Logged("A", Arc::clone(&log));
///
/// using2_async(
///     first,
///     |first| Logged("B", Arc::clone(&first.1)),
///     |_, _| Box::pin(async {}),
/// )
/// .await;
///
/// assert_eq!(*log.lock().unwrap(), vec!["B", "A"]);
/// # });
/// ```
pub fn using2_async<R1, R2, T, C, F>(first: R1, create_second: C, action: F) -> Deferred<T>
where
    R1: Dispose + Send + 'static,
    R2: Dispose + Send + 'static,
    T: Send + 'static,
    C: FnOnce(&mut R1) -> R2 + Send + 'static,
    F: for<'a> FnOnce(&'a mut R1, &'a mut R2) -> BoxFuture<'a, T> + Send + 'static,
{
    let mut first = Releasing::new(first);

    Deferred::new(move || async move {
        let second = match panic::catch_unwind(AssertUnwindSafe(|| create_second(first.get_mut()))) {
            Ok(second) => second,
            Err(payload) => return settle(Err(payload), [first.finish()]),
        };
        let mut second = Releasing::new(second);

        let outcome = run_guarded(|| action(first.get_mut(), second.get_mut())).await;
        settle(outcome, [second.finish(), first.finish()])
    })
}

/// Owns an acquired resource and releases it when dropped.
///
/// Guards declared later drop first, which keeps reverse acquisition order
/// when a pending action is cancelled.
struct Releasing<R: Dispose>(Option<R>);

impl<R: Dispose> Releasing<R> {
    const fn new(resource: R) -> Self {
        Self(Some(resource))
    }

    fn get_mut(&mut self) -> &mut R {
        self.0
            .as_mut()
            .expect("Releasing internal error: resource used after release")
    }

    /// Releases the resource now, handing back the release outcome.
    fn finish(mut self) -> thread::Result<()> {
        self.0.take().map_or(Ok(()), release)
    }
}

impl<R: Dispose> Drop for Releasing<R> {
    fn drop(&mut self) {
        if let Some(resource) = self.0.take()
            && let Err(payload) = release(resource)
        {
            tracing::warn!(
                panic = panic_message(payload.as_ref()),
                "release panicked while cancelling a scoped action"
            );
        }
    }
}

/// Builds the action's future and polls it to completion, capturing panics
/// from both steps.
async fn run_guarded<'a, T, S>(start: S) -> thread::Result<T>
where
    S: FnOnce() -> BoxFuture<'a, T>,
{
    match panic::catch_unwind(AssertUnwindSafe(start)) {
        Ok(future) => AssertUnwindSafe(future).catch_unwind().await,
        Err(payload) => Err(payload),
    }
}
