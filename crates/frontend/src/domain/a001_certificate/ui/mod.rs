use crate::domain::a001_certificate::api;
use crate::shared::api_utils::LoadError;
use crate::shared::modal_viewer::{ImageCaptionRenderer, ModalViewer, ModalViewerOverlay, ViewerConfig};
use contracts::domain::a001_certificate::aggregate::CertificateDto;
use leptos::prelude::*;
use thaw::Spinner;
use wasm_bindgen_futures::spawn_local;

/// Страница "Сертификаты качества"
#[component]
pub fn CertificatesPage() -> impl IntoView {
    let certificates = RwSignal::new(None::<Result<Vec<CertificateDto>, LoadError>>);

    spawn_local(async move {
        let result = api::list_certificates().await;
        if let Err(e) = &result {
            log::error!("Failed to load certificates: {}", e);
        }
        let _ = certificates.try_set(Some(result));
    });

    view! {
        <section class="certificates">
            <h1 class="section-title">"Сертификаты качества"</h1>
            {move || match certificates.get() {
                None => view! { <div class="page-spinner"><Spinner /></div> }.into_any(),
                Some(Err(_)) => view! {
                    <p class="page-error">"Не удалось загрузить сертификаты."</p>
                }
                .into_any(),
                Some(Ok(list)) => view! { <CertificateGrid certificates=list /> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn CertificateGrid(certificates: Vec<CertificateDto>) -> impl IntoView {
    if certificates.is_empty() {
        return view! { <p class="page-empty">"Сертификаты пока не добавлены."</p> }.into_any();
    }

    let items = certificates.iter().map(CertificateDto::to_display_item).collect::<Vec<_>>();
    // у сертификатов стрелки видны всегда
    let config = ViewerConfig {
        hide_nav_for_single: false,
        ..ViewerConfig::new("imgModal")
    };
    let viewer = ModalViewer::new(config, items, ImageCaptionRenderer);

    let cards = certificates
        .into_iter()
        .enumerate()
        .map(|(index, cert)| {
            let viewer = viewer.clone();
            let alt = cert.name.clone();
            view! {
                <div class="cert-item">
                    <div class="cert-image-wrapper" on:click=move |_| viewer.open(index)>
                        <img class="cert-img" src=cert.image alt=alt loading="lazy" />
                    </div>
                    <h3 class="cert-name">{cert.name}</h3>
                    <p class="cert-desc">{cert.description}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="cert-grid">{cards}</div>
        <ModalViewerOverlay viewer=viewer />
    }
    .into_any()
}
