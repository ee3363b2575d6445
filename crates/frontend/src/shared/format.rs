//! Форматирование значений КБЖУ для карточки продукта

/// "200 ккал"
pub fn format_calories(value: f64) -> String {
    format!("{} ккал", value)
}

/// "10.5 г"
pub fn format_grams(value: f64) -> String {
    format!("{} г", value)
}
