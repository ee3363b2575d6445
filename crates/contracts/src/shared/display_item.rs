use serde::{Deserialize, Serialize};

/// Один кадр модального просмотрщика: картинка + подпись.
///
/// Оба поля могут быть пустыми строками.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    pub image_url: String,
    pub caption: String,
    /// Alt-текст картинки; если пуст, используется подпись
    #[serde(default)]
    pub image_alt: String,
}

impl DisplayItem {
    pub fn new(image_url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_url: image_url.into(),
            caption: caption.into(),
            image_alt: String::new(),
        }
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.image_alt = alt.into();
        self
    }

    pub fn alt(&self) -> &str {
        if self.image_alt.is_empty() {
            &self.caption
        } else {
            &self.image_alt
        }
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.trim().is_empty()
    }
}
