//! HTTP layer: routes, handlers and authentication.

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::API_KEY_HEADER;
pub use routes::create_router;
