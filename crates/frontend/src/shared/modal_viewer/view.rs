use super::renderer::{ItemRenderer, Resolve};
use super::state::{
    Direction, DismissSource, TransitionTicket, ViewerCommand, ViewerPhase, ViewerState,
};
use crate::shared::api_utils::LoadError;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::Spinner;
use wasm_bindgen_futures::spawn_local;

/// Пауза между `display: flex` и классом `show`, иначе браузер не запустит переход
const REVEAL_DELAY_MS: u32 = 10;
/// Запас к длительности CSS-перехода для резервного таймера скрытия
const TRANSITION_SLACK_MS: u32 = 50;

/// Настройки одного просмотрщика на странице
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// `id` элемента оверлея
    pub container_id: &'static str,
    /// Должна совпадать с `transition` у `.modal-overlay` в CSS
    pub transition_ms: u32,
    /// Прятать стрелки, если в коллекции меньше двух элементов
    pub hide_nav_for_single: bool,
}

impl ViewerConfig {
    pub fn new(container_id: &'static str) -> Self {
        Self {
            container_id,
            transition_ms: 300,
            hide_nav_for_single: true,
        }
    }
}

/// Handle to the page's single modal viewer.
///
/// Cheap to clone: the collection and renderer are shared, state lives in signals.
/// Cards call [`ModalViewer::open`]; everything else is driven by [`ModalViewerOverlay`].
pub struct ModalViewer<R: ItemRenderer> {
    config: Arc<ViewerConfig>,
    items: Arc<Vec<R::Item>>,
    renderer: Arc<R>,
    state: RwSignal<ViewerState>,
    content: RwSignal<Option<Result<R::Content, LoadError>>>,
}

impl<R: ItemRenderer> Clone for ModalViewer<R> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            items: Arc::clone(&self.items),
            renderer: Arc::clone(&self.renderer),
            state: self.state,
            content: self.content,
        }
    }
}

impl<R: ItemRenderer> ModalViewer<R> {
    pub fn new(config: ViewerConfig, items: Vec<R::Item>, renderer: R) -> Self {
        let state = ViewerState::new(items.len());
        Self {
            config: Arc::new(config),
            items: Arc::new(items),
            renderer: Arc::new(renderer),
            state: RwSignal::new(state),
            content: RwSignal::new(None),
        }
    }

    pub fn open(&self, index: usize) {
        let id = self.config.container_id;
        let Some(ticket) = self.state.try_update(|s| s.open(index)).flatten() else {
            log::debug!("{id}: open({index}) ignored, {} items", self.items.len());
            return;
        };
        let Some(item) = self.items.get(index) else {
            return;
        };

        match self.renderer.resolve(item) {
            Resolve::Ready(content) => self.content.set(Some(Ok(content))),
            Resolve::Pending(load) => {
                self.content.set(None);
                self.state.update(|s| {
                    s.begin_load(ticket);
                });
                let state = self.state;
                let content = self.content;
                spawn_local(async move {
                    let result = load.await;
                    if let Err(e) = &result {
                        log::warn!("{id}: failed to load item {index}: {e}");
                    }
                    if state.try_update(|s| s.finish_load(ticket)).unwrap_or(false) {
                        let _ = content.try_set(Some(result));
                    } else {
                        log::debug!("{id}: dropping superseded result for item {index}");
                    }
                });
            }
        }

        self.finish_after(ticket, REVEAL_DELAY_MS);
    }

    pub fn close(&self) {
        let Some(ticket) = self.state.try_update(|s| s.close()).flatten() else {
            return;
        };
        // transitionend обычно приходит раньше; таймер на случай, если перехода нет
        self.finish_after(ticket, self.config.transition_ms + TRANSITION_SLACK_MS);
    }

    pub fn navigate(&self, direction: Direction) {
        if let Some(index) = self.state.with_untracked(|s| s.target_index(direction)) {
            self.open(index);
        }
    }

    pub fn handle_dismiss_gesture(&self, source: DismissSource) {
        log::debug!("{}: dismiss via {:?}", self.config.container_id, source);
        self.close();
    }

    pub fn handle_key_navigation(&self, key: &str) {
        match self.state.with_untracked(|s| s.key_command(key)) {
            Some(ViewerCommand::Navigate(direction)) => self.navigate(direction),
            Some(ViewerCommand::Close) => self.handle_dismiss_gesture(DismissSource::EscapeKey),
            None => {}
        }
    }

    fn finish_after(&self, ticket: TransitionTicket, delay_ms: u32) {
        let state = self.state;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            state.try_update(|s| s.finish_transition(ticket));
        });
    }

    fn on_transition_end(&self) {
        if self.state.with_untracked(|s| s.phase()) != ViewerPhase::Closing {
            return;
        }
        self.state.update(|s| {
            let ticket = s.current_ticket();
            s.finish_transition(ticket);
        });
    }

    pub fn is_visible(&self) -> bool {
        self.state.with(|s| s.is_visible())
    }

    pub fn is_shown(&self) -> bool {
        self.state.with(|s| s.is_shown())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn shows_navigation(&self) -> bool {
        !(self.config.hide_nav_for_single && self.items.len() < 2)
    }

    fn render_current(&self) -> AnyView {
        let renderer = &self.renderer;
        self.content.with(|content| match content {
            None => ().into_any(),
            Some(Ok(content)) => renderer.render(content),
            Some(Err(error)) => renderer.render_error(error),
        })
    }
}

fn is_direct_event(ev: &web_sys::Event) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(t), Some(ct)) => t == ct,
        _ => false,
    }
}

/// Оверлей просмотрщика. Монтируется один раз на страницу, рядом с сеткой карточек.
///
/// Клик по фону закрывает окно только если целью события был сам оверлей,
/// клики по содержимому до него просто всплывают.
#[component]
pub fn ModalViewerOverlay<R>(viewer: ModalViewer<R>) -> impl IntoView
where
    R: ItemRenderer,
{
    let keys = viewer.clone();
    let keydown = window_event_listener(ev::keydown, move |ev| {
        keys.handle_key_navigation(&ev.key());
    });
    on_cleanup(move || keydown.remove());

    let container_id = viewer.config.container_id;
    let show_nav = viewer.shows_navigation();

    let backdrop = viewer.clone();
    let on_backdrop_click = move |ev: ev::MouseEvent| {
        if is_direct_event(&ev) {
            backdrop.handle_dismiss_gesture(DismissSource::Backdrop);
        }
    };

    let transition = viewer.clone();
    let on_transition_end = move |ev: web_sys::TransitionEvent| {
        if is_direct_event(&ev) {
            transition.on_transition_end();
        }
    };

    let close_button = viewer.clone();
    let prev = viewer.clone();
    let next = viewer.clone();
    let visible = viewer.clone();
    let shown = viewer.clone();
    let spinner = viewer.clone();
    let body = viewer;

    view! {
        <div
            id=container_id
            class="modal-overlay"
            class:show=move || shown.is_shown()
            style:display=move || if visible.is_visible() { "flex" } else { "none" }
            on:click=on_backdrop_click
            on:transitionend=on_transition_end
        >
            <div class="modal-content" role="dialog" aria-modal="true">
                <button
                    type="button"
                    class="modal-close"
                    aria-label="Закрыть"
                    on:click=move |_| close_button.handle_dismiss_gesture(DismissSource::CloseButton)
                >
                    {icon("x")}
                </button>

                {show_nav.then(|| view! {
                    <button
                        type="button"
                        class="modal-prev"
                        aria-label="Назад"
                        on:click=move |_| prev.navigate(Direction::Backward)
                    >
                        {icon("chevron-left")}
                    </button>
                })}

                <div class="modal-body">
                    <Show when=move || spinner.is_loading()>
                        <div class="modal-spinner">
                            <Spinner />
                        </div>
                    </Show>
                    {move || body.render_current()}
                </div>

                {show_nav.then(|| view! {
                    <button
                        type="button"
                        class="modal-next"
                        aria-label="Вперёд"
                        on:click=move |_| next.navigate(Direction::Forward)
                    >
                        {icon("chevron-right")}
                    </button>
                })}
            </div>
        </div>
    }
}
