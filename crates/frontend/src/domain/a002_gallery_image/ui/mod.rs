use crate::domain::a002_gallery_image::api;
use crate::shared::api_utils::LoadError;
use crate::shared::modal_viewer::{ImageCaptionRenderer, ModalViewer, ModalViewerOverlay, ViewerConfig};
use contracts::domain::a002_gallery_image::aggregate::GalleryImageDto;
use leptos::prelude::*;
use thaw::Spinner;
use wasm_bindgen_futures::spawn_local;

/// Галерея на главной странице
#[component]
pub fn GalleryPage() -> impl IntoView {
    let images = RwSignal::new(None::<Result<Vec<GalleryImageDto>, LoadError>>);

    spawn_local(async move {
        let result = api::list_gallery_images().await;
        if let Err(e) = &result {
            log::error!("Failed to load gallery: {}", e);
        }
        let _ = images.try_set(Some(result));
    });

    view! {
        <section class="gallery">
            <h1 class="section-title">"Галерея"</h1>
            {move || match images.get() {
                None => view! { <div class="page-spinner"><Spinner /></div> }.into_any(),
                Some(Err(_)) => view! {
                    <p class="page-error">"Не удалось загрузить галерею."</p>
                }
                .into_any(),
                Some(Ok(list)) => view! { <GalleryGrid images=list /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn GalleryGrid(images: Vec<GalleryImageDto>) -> impl IntoView {
    let items = images.iter().map(GalleryImageDto::to_display_item).collect::<Vec<_>>();
    let viewer = ModalViewer::new(ViewerConfig::new("modal"), items, ImageCaptionRenderer);

    let tiles = images
        .into_iter()
        .enumerate()
        .map(|(index, image)| {
            let viewer = viewer.clone();
            view! {
                <div class="gallery-item" on:click=move |_| viewer.open(index)>
                    <img src=image.image alt=image.alt_text loading="lazy" />
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="gallery-grid">{tiles}</div>
        <ModalViewerOverlay viewer=viewer />
    }
}
