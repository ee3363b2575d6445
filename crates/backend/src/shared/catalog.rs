//! Каталог витрины: продукты, сертификаты, галерея.
//!
//! Загружается один раз при старте из TOML-файла и дальше только читается.

use crate::shared::slug::unique_slug;
use contracts::domain::a001_certificate::aggregate::CertificateDto;
use contracts::domain::a002_gallery_image::aggregate::GalleryImageDto;
use contracts::domain::a003_product::aggregate::{ProductDetailDto, ProductSummaryDto};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("duplicate product slug: {0}")]
    DuplicateSlug(String),
}

/// Размер страницы результатов поиска
pub const SEARCH_PAGE_SIZE: usize = 25;

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    /// Пустой - будет сгенерирован из названия
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub certificate: String,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub composition: String,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub proteins: f64,
    #[serde(default)]
    pub fats: f64,
    #[serde(default)]
    pub carbs: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CertificateRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImageRecord {
    pub image: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    products: Vec<ProductRecord>,
    #[serde(default)]
    certificates: Vec<CertificateRecord>,
    #[serde(default)]
    gallery: Vec<GalleryImageRecord>,
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Catalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, CatalogError> {
        let mut catalog: Catalog = toml::from_str(contents)?;
        catalog.assign_slugs()?;
        // sort_by_key стабильный: при равном order сохраняется порядок в файле
        catalog.certificates.sort_by_key(|c| c.order);
        catalog.gallery.sort_by_key(|g| g.order);
        Ok(catalog)
    }

    fn assign_slugs(&mut self) -> Result<(), CatalogError> {
        let mut taken = HashSet::new();
        for product in self.products.iter().filter(|p| !p.slug.is_empty()) {
            if !taken.insert(product.slug.clone()) {
                return Err(CatalogError::DuplicateSlug(product.slug.clone()));
            }
        }
        for product in self.products.iter_mut().filter(|p| p.slug.is_empty()) {
            let slug = unique_slug(&product.name, |candidate| taken.contains(candidate));
            tracing::debug!("Generated slug '{}' for product '{}'", slug, product.name);
            taken.insert(slug.clone());
            product.slug = slug;
        }
        Ok(())
    }

    pub fn certificates(&self) -> Vec<CertificateDto> {
        self.certificates
            .iter()
            .filter(|c| c.is_active)
            .map(|c| CertificateDto {
                name: c.name.clone(),
                description: c.description.clone(),
                image: c.image.clone(),
                order: c.order,
            })
            .collect()
    }

    pub fn gallery(&self) -> Vec<GalleryImageDto> {
        self.gallery
            .iter()
            .filter(|g| g.is_active)
            .map(|g| GalleryImageDto {
                image: g.image.clone(),
                alt_text: g.alt_text.clone(),
                order: g.order,
            })
            .collect()
    }

    pub fn products(&self) -> Vec<ProductSummaryDto> {
        self.products
            .iter()
            .map(|p| ProductSummaryDto {
                slug: p.slug.clone(),
                name: p.name.clone(),
                image: p.image.clone(),
            })
            .collect()
    }

    /// Поиск по подстроке в названии без учёта регистра, страницы с 1.
    /// Пустой запрос ничего не находит.
    pub fn search_products(&self, query: &str, page: usize) -> Vec<ProductSummaryDto> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let skip = page.saturating_sub(1) * SEARCH_PAGE_SIZE;
        self.products()
            .into_iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .skip(skip)
            .take(SEARCH_PAGE_SIZE)
            .collect()
    }

    pub fn product_detail(&self, slug: &str) -> Option<ProductDetailDto> {
        let p = self.products.iter().find(|p| p.slug == slug)?;
        Some(ProductDetailDto {
            name: p.name.clone(),
            description: p.description.clone(),
            technology: p.technology.clone(),
            weight: p.weight.clone(),
            composition: p.composition.clone(),
            calories: p.calories,
            proteins: p.proteins,
            fats: p.fats,
            carbs: p.carbs,
            image: non_empty(&p.image),
            certificate: non_empty(&p.certificate),
            instagram: non_empty(&p.instagram),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [[products]]
        name = "Protein Bar"
        description = "Батончик"
        composition = "Финики\nОрехи"
        calories = 200
        proteins = 10.5
        fats = 7
        carbs = 22
        image = "/media/products/bar.jpg"

        [[products]]
        name = "Батончик"
        slug = "product"

        [[products]]
        name = "Пастила"

        [[certificates]]
        name = "ISO 22000"
        description = "Пищевая безопасность"
        image = "/media/certificates/iso.jpg"
        order = 2

        [[certificates]]
        name = "ГОСТ"
        image = "/media/certificates/gost.jpg"
        order = 1

        [[certificates]]
        name = "Old"
        image = "/media/certificates/old.jpg"
        is_active = false

        [[gallery]]
        image = "/media/gallery/b.jpg"
        alt_text = "B"
        order = 1

        [[gallery]]
        image = "/media/gallery/a.jpg"
        alt_text = "A"
        order = 1

        [[gallery]]
        image = "/media/gallery/first.jpg"
        order = 0
    "#;

    #[test]
    fn test_slugs_are_generated_and_unique() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let slugs: Vec<String> = catalog.products().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["protein-bar", "product", "product-1"]);
    }

    #[test]
    fn test_search_products_ignores_case() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();

        let names: Vec<String> = catalog
            .search_products("PROTEIN", 1)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Protein Bar"]);

        let found = catalog.search_products("  батон ", 1);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "product");

        assert!(catalog.search_products("", 1).is_empty());
        assert!(catalog.search_products("   ", 1).is_empty());
        assert!(catalog.search_products("мармелад", 1).is_empty());
    }

    #[test]
    fn test_search_products_pages() {
        let toml: String = (0..30)
            .map(|i| format!("[[products]]\nname = \"Bar {i}\"\n"))
            .collect();
        let catalog = Catalog::from_toml_str(&toml).unwrap();

        let first = catalog.search_products("bar", 1);
        assert_eq!(first.len(), SEARCH_PAGE_SIZE);
        assert_eq!(first[0].name, "Bar 0");

        let second = catalog.search_products("bar", 2);
        assert_eq!(second.len(), 5);
        assert_eq!(second[0].name, "Bar 25");

        assert_eq!(catalog.search_products("bar", 0).len(), SEARCH_PAGE_SIZE);
        assert!(catalog.search_products("bar", 3).is_empty());
    }

    #[test]
    fn test_duplicate_explicit_slug_is_rejected() {
        let toml = r#"
            [[products]]
            name = "A"
            slug = "same"

            [[products]]
            name = "B"
            slug = "same"
        "#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(ref s) if s == "same"));
    }

    #[test]
    fn test_certificates_active_and_ordered() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let names: Vec<String> = catalog.certificates().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["ГОСТ", "ISO 22000"]);
    }

    #[test]
    fn test_gallery_order_is_stable() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let images: Vec<String> = catalog.gallery().into_iter().map(|g| g.image).collect();
        assert_eq!(
            images,
            vec![
                "/media/gallery/first.jpg",
                "/media/gallery/b.jpg",
                "/media/gallery/a.jpg"
            ]
        );
    }

    #[test]
    fn test_product_detail() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        let detail = catalog.product_detail("protein-bar").unwrap();
        assert_eq!(detail.name, "Protein Bar");
        assert_eq!(detail.calories, 200.0);
        assert_eq!(detail.image.as_deref(), Some("/media/products/bar.jpg"));
        assert_eq!(detail.certificate, None);

        assert!(catalog.product_detail("missing").is_none());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.products().is_empty());
        assert!(catalog.certificates().is_empty());
        assert!(catalog.gallery().is_empty());
    }
}
