//! API-key authentication middleware.
//!
//! Every video route requires the `x-video-apikey` header to carry the
//! configured key. Requests without it, or with a different value, are
//! answered with `401 Unauthorized` before any handler runs.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use fnext::compose::to_optional_when;

use crate::infrastructure::AppDependencies;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-video-apikey";

/// Rejects requests whose `x-video-apikey` header does not match the
/// configured key.
pub async fn require_api_key(
    State(dependencies): State<AppDependencies>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = {
        let expected = dependencies.config().api_key.as_str();
        let presented = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|value| value.to_str().ok());
        to_optional_when(presented, |key| *key != expected).is_present()
    };

    if authorized {
        next.run(request).await
    } else {
        tracing::debug!(path = %request.uri().path(), "Rejected request with missing or invalid API key");
        StatusCode::UNAUTHORIZED.into_response()
    }
}
