use std::sync::Arc;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{AppState, routes};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::movies::router())
        .merge(routes::people::router())
        .merge(routes::ratings::router())
        .merge(routes::oscars::router())
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any).allow_methods(Any)),
        )
}
