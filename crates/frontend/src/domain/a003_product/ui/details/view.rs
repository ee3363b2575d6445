use crate::shared::format::{format_calories, format_grams};
use crate::shared::icons::icon;
use contracts::domain::a003_product::aggregate::ProductDetails;
use leptos::prelude::*;

#[component]
pub fn ProductDetailsView(details: ProductDetails) -> impl IntoView {
    let ProductDetails {
        name,
        description,
        technology_note,
        weight,
        nutrition,
        composition_lines,
        image_url,
        certificate_url,
        instagram_url,
    } = details;

    let image = image_url.map(|src| {
        let alt = name.clone();
        view! {
            <div class="modal-img-wrap">
                <img class="modal-img" src=src alt=alt />
            </div>
        }
    });

    let technology = technology_note.map(|note| {
        view! {
            <div class="modal-tech">
                <strong>"Технология:"</strong>
                <br />
                {note}
            </div>
        }
    });

    let composition = (!composition_lines.is_empty()).then(|| {
        view! {
            <div class="composition-block">
                <h4>"Состав"</h4>
                <ul class="composition-list">
                    {composition_lines
                        .into_iter()
                        .map(|line| view! { <li>{line}</li> })
                        .collect_view()}
                </ul>
            </div>
        }
    });

    let certificate = certificate_url.map(|href| {
        view! {
            <div class="modal-cert">
                <a href=href target="_blank" rel="noopener" class="cert-link">
                    <span class="cert-icon">{icon("certificate")}</span>
                    <span class="cert-text">"Сертификат качества"</span>
                </a>
            </div>
        }
    });

    let instagram = instagram_url.map(|href| {
        view! {
            <a href=href target="_blank" rel="noopener" class="instagram-link">
                "Instagram"
            </a>
        }
    });

    view! {
        {image}
        <h2 class="modal-name">{name}</h2>
        <p class="modal-desc">{description}</p>
        {technology}
        <div class="macro-block">
            <div class="macro-weight">
                <span class="macro-label">"Вес"</span>
                <span class="macro-value">{weight}</span>
            </div>
            <div class="macro-grid">
                <div class="macro-item">
                    <span class="macro-label">"Калории"</span>
                    <span class="macro-value">{format_calories(nutrition.calories)}</span>
                </div>
                <div class="macro-item">
                    <span class="macro-label">"Белки"</span>
                    <span class="macro-value">{format_grams(nutrition.proteins)}</span>
                </div>
                <div class="macro-item">
                    <span class="macro-label">"Жиры"</span>
                    <span class="macro-value">{format_grams(nutrition.fats)}</span>
                </div>
                <div class="macro-item">
                    <span class="macro-label">"Углеводы"</span>
                    <span class="macro-value">{format_grams(nutrition.carbs)}</span>
                </div>
            </div>
        </div>
        {composition}
        {certificate}
        {instagram}
    }
}

/// Показывается вместо содержимого, если детали не загрузились
#[component]
pub fn ProductLoadError() -> impl IntoView {
    view! {
        <h2 class="modal-name">"Ошибка"</h2>
        <p class="modal-desc">"Не удалось загрузить данные."</p>
    }
}
