use axum::{extract::State, Json};
use contracts::domain::a002_gallery_image::aggregate::GalleryImageDto;

use super::AppState;

/// GET /api/gallery
pub async fn list_active(State(state): State<AppState>) -> Json<Vec<GalleryImageDto>> {
    Json(state.catalog.gallery())
}
