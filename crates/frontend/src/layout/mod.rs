use leptos::prelude::*;
use leptos_router::components::A;

/// Шапка с навигацией + область страницы
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <header class="site-header">
            <nav class="site-nav">
                <A href="/">"Главная"</A>
                <A href="/products">"Продукция"</A>
                <A href="/certificates">"Сертификаты"</A>
            </nav>
        </header>
        <main class="site-main">{children()}</main>
    }
}
