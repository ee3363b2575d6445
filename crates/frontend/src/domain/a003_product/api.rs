use crate::shared::api_utils::{get_json, LoadError};
use contracts::domain::a003_product::aggregate::{ProductDetailDto, ProductSummaryDto};

const API_BASE: &str = "/api/products";

/// Путь к JSON с деталями продукта
pub fn product_detail_path(slug: &str) -> String {
    format!("/products/{}/json/", urlencoding::encode(slug))
}

/// Путь поиска по названию (первая страница результатов)
pub fn product_search_path(query: &str) -> String {
    format!("{}?query={}", API_BASE, urlencoding::encode(query.trim()))
}

/// Карточки каталога в порядке отображения
pub async fn list_products() -> Result<Vec<ProductSummaryDto>, LoadError> {
    get_json(API_BASE).await
}

/// Продукты, в названии которых есть `query`, без учёта регистра
pub async fn search_products(query: &str) -> Result<Vec<ProductSummaryDto>, LoadError> {
    get_json(&product_search_path(query)).await
}

/// Детали одного продукта. Ответ без КБЖУ считается ошибкой разбора.
pub async fn fetch_product_detail(slug: &str) -> Result<ProductDetailDto, LoadError> {
    get_json(&product_detail_path(slug)).await
}
