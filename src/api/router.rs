//! Triage API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`. A permissive CORS layer wraps the whole
//! router so browser clients on any origin can call it.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the triage API router.
///
/// Endpoint handlers use `State<ApiContext>`; `.with_state()` converts
/// `Router<ApiContext>` into `Router<()>` before the CORS layer is applied.
pub fn triage_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat/analyze", post(endpoints::chat::analyze))
        .route("/novelty/analyze", post(endpoints::novelty::analyze))
        .route(
            "/vitals",
            post(endpoints::vitals::record).get(endpoints::vitals::history),
        )
        .with_state(ctx);

    Router::new().nest("/api", api).layer(cors_layer())
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
