use super::view::{ProductDetailsView, ProductLoadError};
use crate::domain::a003_product::api;
use crate::shared::api_utils::LoadError;
use crate::shared::modal_viewer::{ItemRenderer, Resolve};
use contracts::domain::a003_product::aggregate::{ProductDetails, ProductSummaryDto};
use leptos::prelude::*;

/// Каждое открытие карточки - один запрос `/products/{slug}/json/`
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductRenderer;

impl ItemRenderer for ProductRenderer {
    type Item = ProductSummaryDto;
    type Content = ProductDetails;

    fn resolve(&self, item: &ProductSummaryDto) -> Resolve<ProductDetails> {
        let slug = item.slug.clone();
        Resolve::Pending(Box::pin(async move {
            api::fetch_product_detail(&slug)
                .await
                .map(ProductDetails::from)
        }))
    }

    fn render(&self, details: &ProductDetails) -> AnyView {
        view! { <ProductDetailsView details=details.clone() /> }.into_any()
    }

    fn render_error(&self, _error: &LoadError) -> AnyView {
        view! { <ProductLoadError /> }.into_any()
    }
}
