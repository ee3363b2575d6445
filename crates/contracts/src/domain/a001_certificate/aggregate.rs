use crate::shared::display_item::DisplayItem;
use serde::{Deserialize, Serialize};

// ============================================================================
// DTO
// ============================================================================

/// Сертификат качества (ГОСТ, ISO и т.п.), как его отдаёт `/api/certificates`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateDto {
    pub name: String,
    pub description: String,
    pub image: String,
    /// Порядок отображения (меньше - выше)
    #[serde(default)]
    pub order: u32,
}

impl CertificateDto {
    /// Подпись в модальном окне: "Название: описание"
    pub fn caption(&self) -> String {
        format!("{}: {}", self.name, self.description)
    }

    pub fn to_display_item(&self) -> DisplayItem {
        DisplayItem::new(self.image.clone(), self.caption()).with_alt(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caption_joins_name_and_description() {
        let cert = CertificateDto {
            name: "ISO 22000".to_string(),
            description: "Безопасность пищевой продукции".to_string(),
            image: "/media/certificates/iso.jpg".to_string(),
            order: 1,
        };
        assert_eq!(cert.caption(), "ISO 22000: Безопасность пищевой продукции");

        let item = cert.to_display_item();
        assert_eq!(item.image_url, "/media/certificates/iso.jpg");
        assert_eq!(item.alt(), "ISO 22000");
    }

    #[test]
    fn test_order_defaults_to_zero() {
        let cert: CertificateDto =
            serde_json::from_str(r#"{"name":"N","description":"D","image":"i.jpg"}"#).unwrap();
        assert_eq!(cert.order, 0);
    }
}
