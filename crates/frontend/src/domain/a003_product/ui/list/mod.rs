use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductRenderer;
use crate::shared::api_utils::LoadError;
use crate::shared::modal_viewer::{ModalViewer, ModalViewerOverlay, ViewerConfig};
use contracts::domain::a003_product::aggregate::ProductSummaryDto;
use leptos::prelude::*;
use thaw::Spinner;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ProductsResult = Option<Result<Vec<ProductSummaryDto>, LoadError>>;

/// Весь каталог для пустого запроса, иначе поиск по названию
fn load_products(products: RwSignal<ProductsResult>, query: String) {
    products.set(None);
    spawn_local(async move {
        let query = query.trim();
        let result = if query.is_empty() {
            api::list_products().await
        } else {
            api::search_products(query).await
        };
        if let Err(e) = &result {
            log::error!("Failed to load products: {}", e);
        }
        let _ = products.try_set(Some(result));
    });
}

/// Каталог продукции с поиском по названию
#[component]
pub fn ProductsPage() -> impl IntoView {
    let products = RwSignal::new(ProductsResult::None);
    let query = RwSignal::new(String::new());

    load_products(products, String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load_products(products, query.get_untracked());
    };

    view! {
        <section class="products">
            <h1 class="section-title">"Продукция"</h1>
            <form class="product-search" role="search" on:submit=on_submit>
                <input
                    type="search"
                    name="query"
                    placeholder="Поиск продукции"
                    aria-label="Поиск продукции"
                    bind:value=query
                />
                <button type="submit">"Найти"</button>
            </form>
            {move || match products.get() {
                None => view! { <div class="page-spinner"><Spinner /></div> }.into_any(),
                Some(Err(_)) => view! {
                    <p class="page-error">"Не удалось загрузить каталог."</p>
                }
                .into_any(),
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="page-empty">"Ничего не найдено."</p>
                }
                .into_any(),
                Some(Ok(list)) => view! { <ProductGrid products=list /> }.into_any(),
            }}
        </section>
    }
}

/// Enter и пробел на карточке в фокусе работают как клик.
/// Пока окно на экране, фокус остаётся на карточке под ним, и клавиши её не открывают.
fn activates_card(key: &str, viewer_visible: bool) -> bool {
    !viewer_visible && matches!(key, "Enter" | " ")
}

#[component]
fn ProductGrid(products: Vec<ProductSummaryDto>) -> impl IntoView {
    // без slug детали не запросить
    let products: Vec<_> = products
        .into_iter()
        .filter(|product| !product.slug.is_empty())
        .collect();
    let viewer = ModalViewer::new(
        ViewerConfig::new("productModal"),
        products.clone(),
        ProductRenderer,
    );

    let cards = products
        .into_iter()
        .enumerate()
        .map(|(index, product)| {
            let on_click = viewer.clone();
            let on_key = viewer.clone();
            let image = (!product.image.is_empty()).then(|| {
                let alt = product.name.clone();
                view! { <img class="product-img" src=product.image alt=alt loading="lazy" /> }
            });
            view! {
                <div
                    class="product-card"
                    tabindex="0"
                    role="button"
                    data-slug=product.slug
                    on:click=move |_| on_click.open(index)
                    on:keydown=move |ev: KeyboardEvent| {
                        if activates_card(&ev.key(), on_key.is_visible()) {
                            ev.prevent_default();
                            on_key.open(index);
                        }
                    }
                >
                    {image}
                    <h3 class="product-name">{product.name}</h3>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="product-grid">{cards}</div>
        <ModalViewerOverlay viewer=viewer />
    }
}
