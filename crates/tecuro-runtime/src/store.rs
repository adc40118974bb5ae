use tecuro_engine::GroupedResult;
use tecuro_types::{CatalogItem, FilterState, SortKey, SuitMeta};

use crate::catalog::Catalog;

/// Owns the catalog and the live filter state of the product browser.
///
/// Setters replace a field wholesale; incremental toggling belongs to the
/// controls, which hand over the full list of checked values. Nothing here
/// recomputes or renders: the page does that after each mutation.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    catalog: Catalog,
    filter: FilterState,
}

impl StateStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: FilterState::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn products(&self) -> &[CatalogItem] {
        &self.catalog.products
    }

    pub fn suits(&self) -> &[SuitMeta] {
        &self.catalog.suits
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Overwrite the whole filter state, e.g. with what was decoded from the URL.
    pub fn restore(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn set_concerns<I, S>(&mut self, concerns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.replace_concerns(concerns);
    }

    pub fn set_traits<I, S>(&mut self, traits: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter.replace_traits(traits);
    }

    pub fn set_sort(&mut self, key: &str) {
        self.filter.sort_key = SortKey::parse(key);
    }

    /// Grouped view of the catalog under the current filter
    pub fn compute(&self) -> GroupedResult<'_> {
        tecuro_engine::compute(&self.catalog.products, &self.catalog.suits, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> StateStore {
        StateStore::new(Catalog::new(
            vec![
                CatalogItem::new("Oil").with_concerns(["dryness"]),
                CatalogItem::new("Gel").with_concerns(["acne"]),
            ],
            Vec::new(),
        ))
    }

    #[test]
    fn test_setters_replace_wholesale() {
        let mut store = store();
        store.set_concerns(["acne", "dryness"]);
        store.set_concerns(["acne"]);

        assert_eq!(store.filter().selected_concerns.len(), 1);
        assert!(store.filter().selected_concerns.contains("acne"));
    }

    #[test]
    fn test_setters_deduplicate() {
        let mut store = store();
        store.set_traits(["vegan", "vegan", "vegan"]);
        assert_eq!(store.filter().selected_traits.len(), 1);
    }

    #[test]
    fn test_set_sort_keeps_unknown_keys() {
        let mut store = store();
        store.set_sort("newest");
        assert_eq!(store.filter().sort_key.as_str(), "newest");

        store.set_sort("");
        assert!(store.filter().sort_key.is_default());
    }

    #[test]
    fn test_compute_reflects_filter() {
        let mut store = store();
        assert_eq!(store.compute().item_count(), 2);

        store.set_concerns(["acne"]);
        let grouped = store.compute();
        assert_eq!(grouped.item_count(), 1);
        assert_eq!(grouped.groups[0].items[0].name, "Gel");
    }
}
