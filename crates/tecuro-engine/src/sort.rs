use std::cmp::Ordering;

use tecuro_types::{CatalogItem, SortKey, SortOrder};

/// Sort the filtered list in place according to `key`.
///
/// The sort is stable; keys without an ordering leave the list untouched.
pub fn sort_items(items: &mut [&CatalogItem], key: &SortKey) {
    if let Some(SortOrder::ByName) = key.ordering() {
        items.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    }
}

/// Locale-aware string comparison for display names.
///
/// Three levels, like a collator: base letters (case and common Latin
/// accents folded), then accents, then case with lowercase first.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).map(fold_accent)
}

fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ğ' => 'g',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&CatalogItem]) -> Vec<String> {
        items.iter().map(|i| i.name.clone()).collect()
    }

    #[test]
    fn test_locale_cmp_ignores_case_first() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zinc", "aloe"), Ordering::Greater);
    }

    #[test]
    fn test_locale_cmp_lowercase_before_uppercase() {
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("A", "A"), Ordering::Equal);
    }

    #[test]
    fn test_locale_cmp_folds_accents() {
        assert_eq!(locale_cmp("Éclat", "Fern"), Ordering::Less);
        assert_eq!(locale_cmp("eclat", "éclat"), Ordering::Less);
    }

    #[test]
    fn test_alpha_and_pop_sort_by_name() {
        let items = [
            CatalogItem::new("cleanser"),
            CatalogItem::new("Balm"),
            CatalogItem::new("Amber Oil"),
        ];

        for key in [SortKey::Alphabetical, SortKey::Popularity] {
            let mut refs: Vec<&CatalogItem> = items.iter().collect();
            sort_items(&mut refs, &key);
            assert_eq!(names(&refs), vec!["Amber Oil", "Balm", "cleanser"]);
        }
    }

    #[test]
    fn test_unknown_key_keeps_catalog_order() {
        let items = [CatalogItem::new("Z"), CatalogItem::new("A")];
        let mut refs: Vec<&CatalogItem> = items.iter().collect();

        sort_items(&mut refs, &SortKey::parse("newest"));

        assert_eq!(names(&refs), vec!["Z", "A"]);
    }
}
