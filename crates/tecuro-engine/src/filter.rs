use std::collections::BTreeSet;

use tecuro_types::{CatalogItem, FilterState};

/// Concern facet: passes when nothing is selected, or when the item shares
/// at least one tag with the selection.
pub fn concerns_match(item: &CatalogItem, selected: &BTreeSet<String>) -> bool {
    selected.is_empty() || item.concerns.iter().any(|c| selected.contains(c))
}

/// Trait facet: passes only when every selected trait is `true` on the item.
///
/// Note the combinator differs from [`concerns_match`] (AND instead of OR).
pub fn traits_match(item: &CatalogItem, selected: &BTreeSet<String>) -> bool {
    selected.iter().all(|t| item.has_trait(t))
}

pub fn item_matches(item: &CatalogItem, state: &FilterState) -> bool {
    concerns_match(item, &state.selected_concerns) && traits_match(item, &state.selected_traits)
}

/// Items passing both facets, in catalog order.
pub fn filter_items<'a>(items: &'a [CatalogItem], state: &FilterState) -> Vec<&'a CatalogItem> {
    items
        .iter()
        .filter(|item| item_matches(item, state))
        .collect()
}
