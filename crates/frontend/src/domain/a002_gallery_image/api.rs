use crate::shared::api_utils::{get_json, LoadError};
use contracts::domain::a002_gallery_image::aggregate::GalleryImageDto;

const API_BASE: &str = "/api/gallery";

/// Активные изображения галереи в порядке отображения
pub async fn list_gallery_images() -> Result<Vec<GalleryImageDto>, LoadError> {
    get_json(API_BASE).await
}
