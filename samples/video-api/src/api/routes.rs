//! Route configuration for the video API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Authenticated |
//! |--------|------|---------|---------------|
//! | GET | /{session}/videos | `get_videos` | yes |
//! | POST | /{session}/video | `add_video` | yes |
//! | GET | /health | `health_check` | no |

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};

use super::auth::require_api_key;
use super::handlers::{add_video, get_videos, health_check};
use crate::infrastructure::AppDependencies;

/// Creates the router with all API routes.
pub fn create_router(dependencies: AppDependencies) -> Router {
    let videos = Router::new()
        .route("/{session}/videos", get(get_videos))
        .route("/{session}/video", post(add_video))
        .route_layer(middleware::from_fn_with_state(
            dependencies.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(videos)
        .route("/health", get(health_check))
        .with_state(dependencies)
}
