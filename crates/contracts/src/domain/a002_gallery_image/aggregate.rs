use crate::shared::display_item::DisplayItem;
use serde::{Deserialize, Serialize};

/// Изображение галереи на главной странице
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryImageDto {
    pub image: String,
    /// Описание изображения (alt), оно же подпись в модальном окне
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub order: u32,
}

impl GalleryImageDto {
    pub fn to_display_item(&self) -> DisplayItem {
        DisplayItem::new(self.image.clone(), self.alt_text.clone())
    }
}
