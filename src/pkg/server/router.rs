use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{get, patch, post};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let admin = Router::new()
        .route("/jobs", post(handlers::jobs::create))
        .route(
            "/jobs/{id}",
            patch(handlers::jobs::update).delete(handlers::jobs::remove),
        )
        .route_layer(from_fn(authn::ensure_admin));
    let app = Router::new()
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/{id}", get(handlers::jobs::get))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .merge(admin)
        .with_state(state);

    Ok(app)
}
