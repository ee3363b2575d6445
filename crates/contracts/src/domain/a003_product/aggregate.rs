use serde::{Deserialize, Serialize};

// ============================================================================
// Wire DTOs
// ============================================================================

/// Карточка продукта в сетке каталога (`GET /api/products`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSummaryDto {
    /// Ключ для запроса деталей: `/products/{slug}/json/`
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// Детали продукта (`GET /products/{slug}/json/`)
///
/// Пустая строка в `image`/`certificate` означает отсутствие файла.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetailDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    pub weight: String,
    /// Состав, по одному ингредиенту на строку
    #[serde(default)]
    pub composition: String,
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

// ============================================================================
// View model
// ============================================================================

/// КБЖУ на 100 г
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub proteins: f64,
    pub fats: f64,
    pub carbs: f64,
}

/// Детали продукта, приведённые к виду для отображения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDetails {
    pub name: String,
    pub description: String,
    pub technology_note: Option<String>,
    pub weight: String,
    pub nutrition: Nutrition,
    pub composition_lines: Vec<String>,
    pub image_url: Option<String>,
    pub certificate_url: Option<String>,
    pub instagram_url: Option<String>,
}

/// Разбивает состав на строки, отбрасывая пустые
pub fn split_composition(composition: &str) -> Vec<String> {
    composition
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<ProductDetailDto> for ProductDetails {
    fn from(dto: ProductDetailDto) -> Self {
        let technology_note = non_empty(Some(dto.technology));
        Self {
            composition_lines: split_composition(&dto.composition),
            name: dto.name,
            description: dto.description,
            technology_note,
            weight: dto.weight,
            nutrition: Nutrition {
                calories: dto.calories,
                proteins: dto.proteins,
                fats: dto.fats,
                carbs: dto.carbs,
            },
            image_url: non_empty(dto.image),
            certificate_url: non_empty(dto.certificate),
            instagram_url: non_empty(dto.instagram),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let json = r#"{
            "name": "Bar",
            "description": "Протеиновый батончик",
            "technology": "Холодный отжим",
            "weight": "50 г",
            "composition": "Финики\n  Орехи  \n\nКакао\r\n",
            "calories": 200,
            "proteins": 10.5,
            "fats": 7,
            "carbs": 22,
            "image": "/media/products/bar.jpg",
            "certificate": "",
            "instagram": "https://www.instagram.com/example"
        }"#;
        let dto: ProductDetailDto = serde_json::from_str(json).unwrap();
        let details = ProductDetails::from(dto);

        assert_eq!(details.name, "Bar");
        assert_eq!(details.technology_note.as_deref(), Some("Холодный отжим"));
        assert_eq!(details.composition_lines, vec!["Финики", "Орехи", "Какао"]);
        assert_eq!(details.nutrition.calories, 200.0);
        assert_eq!(details.nutrition.proteins, 10.5);
        assert_eq!(details.image_url.as_deref(), Some("/media/products/bar.jpg"));
        assert_eq!(details.certificate_url, None);
    }

    #[test]
    fn test_optional_fields_may_be_missing() {
        let json = r#"{"name":"X","calories":1,"proteins":2,"fats":3,"carbs":4}"#;
        let details = ProductDetails::from(serde_json::from_str::<ProductDetailDto>(json).unwrap());

        assert!(details.technology_note.is_none());
        assert!(details.composition_lines.is_empty());
        assert!(details.image_url.is_none());
        assert!(details.certificate_url.is_none());
    }

    #[test]
    fn test_missing_nutrition_is_a_parse_error() {
        let json = r#"{"name":"X","description":"no numbers"}"#;
        assert!(serde_json::from_str::<ProductDetailDto>(json).is_err());
    }
}
