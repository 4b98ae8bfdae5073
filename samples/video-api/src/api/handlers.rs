//! HTTP handlers for the video routes.
//!
//! Handlers translate repository outcomes into status codes: a present
//! result is a success, an absent one is `500 Internal Server Error`.

use std::future::ready;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fnext::effect::{bind_optional_async, match_optional_async};
use serde::Serialize;

use crate::domain::{SessionId, Video};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /{session}/videos - Lists the session's videos.
///
/// # Response
///
/// - `200 OK` - JSON array of videos (empty for a new session)
/// - `500 Internal Server Error` - The list could not be read
pub async fn get_videos(
    State(dependencies): State<AppDependencies>,
    Path(session): Path<String>,
) -> Response {
    let session = SessionId::from(session);

    dependencies
        .repository()
        .get_videos(&session)
        .await
        .match_with(
            |videos| (StatusCode::OK, Json(videos)).into_response(),
            || {
                tracing::warn!(session = %session, "Failed to read video list");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            },
        )
}

/// POST /{session}/video - Appends a video to the session's list.
///
/// The current list is read, the video appended and the list written
/// back. Nothing is written when the read fails.
///
/// # Response
///
/// - `202 Accepted` - The list was updated
/// - `500 Internal Server Error` - The list could not be read or written
pub async fn add_video(
    State(dependencies): State<AppDependencies>,
    Path(session): Path<String>,
    Json(video): Json<Video>,
) -> StatusCode {
    let session = SessionId::from(session);
    let repository = dependencies.repository();
    let current = repository.get_videos(&session);
    let failed_session = session.clone();

    let written = bind_optional_async(current, move |mut videos: Vec<Video>| {
        videos.push(video);
        repository.add(&session, videos)
    });

    match_optional_async(
        written,
        |()| ready(StatusCode::ACCEPTED),
        move || {
            tracing::warn!(session = %failed_session, "Failed to add video");
            ready(StatusCode::INTERNAL_SERVER_ERROR)
        },
    )
    .await
}

/// GET /health - Health check endpoint.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}
