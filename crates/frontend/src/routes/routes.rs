use crate::domain::a001_certificate::ui::CertificatesPage;
use crate::domain::a002_gallery_image::ui::GalleryPage;
use crate::domain::a003_product::ui::ProductsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <p class="page-error">"Страница не найдена"</p> }>
            <Route path=path!("/") view=GalleryPage />
            <Route path=path!("/certificates") view=CertificatesPage />
            <Route path=path!("/products") view=ProductsPage />
        </Routes>
    }
}
