use axum::{
    extract::{Path, Query, State},
    Json,
};
use contracts::domain::a003_product::aggregate::{ProductDetailDto, ProductSummaryDto};
use serde::Deserialize;

use super::{ApiError, AppState};

#[derive(Debug, Default, Deserialize)]
pub struct ProductListQuery {
    /// Без параметра отдаётся весь каталог
    pub query: Option<String>,
    pub page: Option<usize>,
}

/// GET /api/products?query=&page=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProductListQuery>,
) -> Json<Vec<ProductSummaryDto>> {
    match params.query {
        Some(query) => {
            let page = params.page.unwrap_or(1);
            tracing::debug!("Product search '{}' page {}", query, page);
            Json(state.catalog.search_products(&query, page))
        }
        None => Json(state.catalog.products()),
    }
}

/// GET /products/:slug/json/
pub async fn get_detail_json(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProductDetailDto>, ApiError> {
    match state.catalog.product_detail(&slug) {
        Some(detail) => Ok(Json(detail)),
        None => {
            tracing::debug!("Product not found: {}", slug);
            Err(ApiError::NotFound)
        }
    }
}
