//! `Deferred` - a lazily started, single-produce asynchronous computation.
//!
//! A `Deferred<A>` describes work that produces one `A`. Nothing runs until
//! the value is polled, and because it is consumed by `.await`, it can be
//! awaited at most once.
//!
//! # Evaluation Semantics
//!
//! `map` and `flat_map` never call their function at composition time, not
//! even on a [`Deferred::pure`] source. The function runs when the chain is
//! awaited, after the source has resolved. Side effects placed in a mapping
//! function therefore happen exactly once, at await time.
//!
//! ```rust
//! use fnext::effect::Deferred;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # runtime.block_on(async {
//! let calls = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&calls);
//!
//! let doubled = Deferred::pure(21).map(move |value| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     value * 2
//! });
//!
//! assert_eq!(calls.load(Ordering::SeqCst), 0);
//! assert_eq!(doubled.await, 42);
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! # });
//! ```
//!
//! # Computation
//!
//! Sources and handlers of the asynchronous combinators are generic over
//! [`Computation`]: anything that can be turned into a `Deferred`. Every
//! `Send + 'static` future qualifies, so an `async` block, a
//! `std::future::ready(value)` and a `Deferred` can be used interchangeably.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use pin_project_lite::pin_project;

type Thunk<A> = Box<dyn FnOnce() -> BoxFuture<'static, A> + Send>;

// =============================================================================
// Deferred Struct Definition
// =============================================================================

pin_project! {
    /// A deferred asynchronous computation producing a value of type `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnext::effect::Deferred;
    ///
    /// # let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
    /// # runtime.block_on(async {
    /// let greeting = Deferred::new(|| async { "hello" })
    ///     .map(str::len)
    ///     .flat_map(|length| Deferred::pure(length * 2));
    ///
    /// assert_eq!(greeting.await, 10);
    /// # });
    /// ```
    pub struct Deferred<A> {
        #[pin]
        state: DeferredState<A>,
    }
}

pin_project! {
    /// Lifecycle of a `Deferred`.
    ///
    /// `Defer` -> `Running` -> `Completed`, or `Pure` -> `Completed`.
    #[project = DeferredStateProj]
    enum DeferredState<A> {
        Pure {
            value: Option<A>,
        },
        Defer {
            thunk: Option<Thunk<A>>,
        },
        Running {
            #[pin]
            future: BoxFuture<'static, A>,
        },
        Completed,
    }
}

static_assertions::assert_impl_all!(Deferred<i32>: Send);
static_assertions::assert_impl_all!(Deferred<String>: Send, Unpin);

// =============================================================================
// Future Implementation
// =============================================================================

impl<A> Future for Deferred<A> {
    type Output = A;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                DeferredStateProj::Pure { value } => {
                    let result = value
                        .take()
                        .expect("Deferred internal error: pure value polled after completion");
                    this.state.set(DeferredState::Completed);
                    return Poll::Ready(result);
                }
                DeferredStateProj::Defer { thunk } => {
                    let thunk = thunk
                        .take()
                        .expect("Deferred internal error: thunk was already consumed");
                    this.state.set(DeferredState::Running { future: thunk() });
                }
                DeferredStateProj::Running { future } => {
                    let result = std::task::ready!(future.poll(context));
                    this.state.set(DeferredState::Completed);
                    return Poll::Ready(result);
                }
                DeferredStateProj::Completed => {
                    panic!("Deferred polled after completion");
                }
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A> Deferred<A> {
    /// Wraps a value that is already computed.
    #[inline]
    pub const fn pure(value: A) -> Self {
        Self {
            state: DeferredState::Pure { value: Some(value) },
        }
    }

    /// Creates a `Deferred` from a thunk that builds the future.
    ///
    /// The thunk is called on first poll, so not even the future's
    /// construction happens before then.
    pub fn new<F, Fut>(thunk: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: DeferredState::Defer {
                thunk: Some(Box::new(move || Box::pin(thunk()))),
            },
        }
    }

    /// Creates a `Deferred` from a future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = A> + Send + 'static,
    {
        Self {
            state: DeferredState::Running {
                future: Box::pin(future),
            },
        }
    }
}

// =============================================================================
// Composition
// =============================================================================

impl<A: Send + 'static> Deferred<A> {
    /// Transforms the resolved value.
    ///
    /// `function` runs once, after `self` has resolved.
    pub fn map<B, F>(self, function: F) -> Deferred<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        Deferred::new(move || async move { function(self.await) })
    }

    /// Chains a computation that depends on the resolved value.
    ///
    /// `function` may return any [`Computation`]: a `Deferred`, an `async`
    /// block or a ready future.
    pub fn flat_map<C, F>(self, function: F) -> Deferred<C::Output>
    where
        F: FnOnce(A) -> C + Send + 'static,
        C: Computation,
    {
        Deferred::new(move || async move { function(self.await).into_deferred().await })
    }
}

// =============================================================================
// Computation Trait
// =============================================================================

/// A value that can be run as a [`Deferred`].
///
/// Implemented for every `Send + 'static` [`IntoFuture`] whose output is
/// `Send + 'static`.
pub trait Computation: Send + 'static {
    /// The value produced by the computation.
    type Output: Send + 'static;

    /// Converts `self` into a `Deferred` without starting it.
    fn into_deferred(self) -> Deferred<Self::Output>;
}

impl<S> Computation for S
where
    S: IntoFuture + Send + 'static,
    S::IntoFuture: Send + 'static,
    S::Output: Send + 'static,
{
    type Output = S::Output;

    #[inline]
    fn into_deferred(self) -> Deferred<Self::Output> {
        Deferred::new(move || self.into_future())
    }
}
