use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::controller::health::alive;

pub fn router() -> Router {
    Router::new()
        .route("/", get(alive))
        .layer(TraceLayer::new_for_http())
}
