use axum::{routing::get, Router};

use crate::handlers::{self, AppState};

/// Конфигурация всех роутов API
pub fn configure_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/certificates",
            get(handlers::a001_certificate::list_active),
        )
        .route("/api/gallery", get(handlers::a002_gallery_image::list_active))
        .route("/api/products", get(handlers::a003_product::list))
        .route(
            "/products/:slug/json/",
            get(handlers::a003_product::get_detail_json),
        )
        .with_state(state)
}
