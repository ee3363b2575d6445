use crate::shared::api_utils::LoadError;
use contracts::shared::display_item::DisplayItem;
use leptos::prelude::*;
use std::future::Future;
use std::pin::Pin;

/// Future, который грузит содержимое элемента (живёт только в UI-потоке)
pub type LoadFuture<C> = Pin<Box<dyn Future<Output = Result<C, LoadError>>>>;

/// Результат `ItemRenderer::resolve`
pub enum Resolve<C> {
    /// Содержимое уже есть (картинка + подпись из разметки)
    Ready(C),
    /// Содержимое надо загрузить; просмотрщик покажет спиннер
    Pending(LoadFuture<C>),
}

/// Превращает элемент коллекции в содержимое модального окна.
///
/// Реализация отвечает только за данные и разметку тела окна; фазы,
/// навигация и закрытие живут в `ModalViewer`.
pub trait ItemRenderer: Send + Sync + 'static {
    type Item: Send + Sync + 'static;
    type Content: Send + Sync + 'static;

    fn resolve(&self, item: &Self::Item) -> Resolve<Self::Content>;

    fn render(&self, content: &Self::Content) -> AnyView;

    fn render_error(&self, error: &LoadError) -> AnyView {
        let message = error.to_string();
        view! {
            <div class="modal-error">
                <p>{message}</p>
            </div>
        }
        .into_any()
    }
}

/// Картинка + подпись. Используется галереей и сертификатами.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCaptionRenderer;

impl ItemRenderer for ImageCaptionRenderer {
    type Item = DisplayItem;
    type Content = DisplayItem;

    fn resolve(&self, item: &DisplayItem) -> Resolve<DisplayItem> {
        Resolve::Ready(item.clone())
    }

    fn render(&self, item: &DisplayItem) -> AnyView {
        let image = item.has_image().then(|| {
            let src = item.image_url.clone();
            let alt = item.alt().to_string();
            view! { <img class="modal-img" src=src alt=alt /> }
        });
        let caption = item.caption.clone();
        view! {
            {image}
            <div class="modal-caption">{caption}</div>
        }
        .into_any()
    }
}
