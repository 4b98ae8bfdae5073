//! Video List Sample Application
//!
//! Stores a list of video links per session in a key-value cache and serves
//! it over HTTP, using fnext combinators for every absent-or-present step.
//!
//! # Architecture
//!
//! - **Domain Layer**: `Video` and `SessionId`
//! - **Application Layer**: the video repository and its fault-injection decorator
//! - **Infrastructure Layer**: configuration, Redis and in-memory caches, wiring
//! - **API Layer**: routes, handlers, API-key middleware
//!
//! # fnext Features Used
//!
//! - `Optional` as the success/failure signal of every repository call
//! - `Deferred` for lazy cache reads and writes
//! - `to_optional_async_when` and `if_absent_async` on the read path
//! - `bind_optional_async` and `match_optional_async` in the add handler

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
