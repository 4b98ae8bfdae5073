//! Scoped execution over resources that must be released.
//!
//! [`using`] and [`using2`] run an action against one or two resources and
//! release every acquired resource exactly once, whatever the exit path:
//!
//! - release happens after the action returns normally
//! - release happens when the action (or the construction of the second
//!   resource) panics, and the panic is resumed afterwards
//! - resources are released in reverse acquisition order
//!
//! The asynchronous counterparts live in `effect::scoped`.
//!
//! # Examples
//!
//! ```rust
//! use fnext::control::{Dispose, using};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Connection {
//!     log: Rc<RefCell<Vec<String>>>,
//! }
//!
//! impl Dispose for Connection {
//!     fn dispose(self) {
//!         self.log.borrow_mut().push("closed".to_string());
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let connection = Connection { log: Rc::clone(&log) };
//!
//! let answer = using(connection, |_connection| 42);
//!
//! assert_eq!(answer, 42);
//! assert_eq!(*log.borrow(), vec!["closed".to_string()]);
//! ```

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;

/// A resource with an explicit release step.
///
/// `dispose` takes the resource by value, so a resource can only be released
/// once.
pub trait Dispose {
    /// Releases the resource.
    fn dispose(self);
}

/// Runs `action` against `resource`, then releases it.
///
/// The action's return value is propagated; an action returning `()` yields
/// `()`. If the action panics, the resource is still released and the panic
/// is resumed.
///
/// # Examples
///
/// ```rust
/// use fnext::control::{Dispose, using};
///
/// struct Buffer(Vec<u8>);
///
/// impl Dispose for Buffer {
///     fn dispose(self) {}
/// }
///
/// let length = using(Buffer(vec![1, 2, 3]), |buffer| buffer.0.len());
/// assert_eq!(length, 3);
/// ```
pub fn using<R, T, F>(resource: R, action: F) -> T
where
    R: Dispose,
    F: FnOnce(&mut R) -> T,
{
    let mut resource = resource;
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| action(&mut resource)));
    settle(outcome, [release(resource)])
}

/// Runs `action` against a resource and a second resource derived from it.
///
/// `create_second` receives the first resource. Release order is second, then
/// first. If `create_second` panics, the first resource is released and the
/// panic is resumed without running `action`.
pub fn using2<R1, R2, T, C, F>(first: R1, create_second: C, action: F) -> T
where
    R1: Dispose,
    R2: Dispose,
    C: FnOnce(&mut R1) -> R2,
    F: FnOnce(&mut R1, &mut R2) -> T,
{
    let mut first = first;
    let mut second = match panic::catch_unwind(AssertUnwindSafe(|| create_second(&mut first))) {
        Ok(second) => second,
        Err(payload) => return settle(Err(payload), [release(first)]),
    };

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| action(&mut first, &mut second)));
    settle(outcome, [release(second), release(first)])
}

/// Disposes a resource, capturing a panic raised by its release step.
pub(crate) fn release<R: Dispose>(resource: R) -> thread::Result<()> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(move || resource.dispose()));
    tracing::trace!(
        resource = std::any::type_name::<R>(),
        panicked = outcome.is_err(),
        "resource released"
    );
    outcome
}

/// Returns the action's value or resumes the first panic.
///
/// The action's own panic wins over release panics; among release panics the
/// first one wins. Every other panic is logged and dropped.
pub(crate) fn settle<T, I>(outcome: thread::Result<T>, releases: I) -> T
where
    I: IntoIterator<Item = thread::Result<()>>,
{
    let mut release_panic: Option<Box<dyn Any + Send>> = None;

    for released in releases {
        if let Err(payload) = released {
            if release_panic.is_none() {
                release_panic = Some(payload);
            } else {
                tracing::warn!(
                    panic = panic_message(payload.as_ref()),
                    "suppressing panic from a later release"
                );
            }
        }
    }

    match (outcome, release_panic) {
        (Ok(value), None) => value,
        (Err(payload), None) | (Ok(_), Some(payload)) => panic::resume_unwind(payload),
        (Err(payload), Some(suppressed)) => {
            tracing::warn!(
                panic = panic_message(suppressed.as_ref()),
                "release panicked while unwinding; keeping the original panic"
            );
            panic::resume_unwind(payload)
        }
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
