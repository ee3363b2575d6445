//! URL-slug для продуктов без явно заданного slug

/// Используется, когда из названия не осталось ни одного ASCII-символа
pub const FALLBACK_SLUG: &str = "product";

/// Приводит строку к виду `lower-case-ascii`.
///
/// Не-ASCII символы (в том числе кириллица) отбрасываются, пробелы и дефисы
/// схлопываются в один дефис.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for ch in value.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}

/// Подбирает свободный slug: `base`, `base-1`, `base-2`, ...
pub fn unique_slug(name: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let mut base = slugify(name);
    if base.is_empty() {
        base = FALLBACK_SLUG.to_string();
    }

    let mut candidate = base.clone();
    let mut n = 1;
    while is_taken(&candidate) {
        candidate = format!("{}-{}", base, n);
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Protein Bar 2.0"), "protein-bar-20");
        assert_eq!(slugify("  Hello -- World  "), "hello-world");
        assert_eq!(slugify("Батончик Nuts"), "nuts");
        assert_eq!(slugify("Батончик"), "");
    }

    #[test]
    fn test_unique_slug_adds_suffix() {
        let taken: HashSet<&str> = ["bar", "bar-1"].into_iter().collect();
        assert_eq!(unique_slug("Bar", |s| taken.contains(s)), "bar-2");
        assert_eq!(unique_slug("Nuts", |s| taken.contains(s)), "nuts");
    }

    #[test]
    fn test_unique_slug_fallback() {
        assert_eq!(unique_slug("Батончик", |_| false), "product");
        assert_eq!(unique_slug("Пастила", |s| s == "product"), "product-1");
    }
}
