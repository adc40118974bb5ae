// Engine module - pure catalog logic (filter, sort, group, search)
// This layer sits between the catalog types and the page runtime

pub mod featured;
pub mod filter;
pub mod glossary;
pub mod group;
pub mod sort;

pub use featured::{DEFAULT_FEATURED_LIMIT, featured};
pub use filter::{concerns_match, filter_items, item_matches, traits_match};
pub use glossary::{DEFAULT_THRESHOLD, Glossary, SearchHit};
pub use group::{GroupedResult, SuitGroup, group_by_suit};
pub use sort::{locale_cmp, sort_items};

use tecuro_types::{CatalogItem, FilterState, SuitMeta};

// Façade API - the page runtime should call this instead of chaining the
// individual stages itself

/// Filter, sort and group the catalog for the given facet selection.
///
/// Items are filtered (concerns OR, traits AND), sorted according to the
/// sort key, then partitioned by suit in first-encounter order.
pub fn compute<'a>(
    items: &'a [CatalogItem],
    suits: &[SuitMeta],
    state: &FilterState,
) -> GroupedResult<'a> {
    let mut filtered = filter_items(items, state);
    sort_items(&mut filtered, &state.sort_key);
    group_by_suit(filtered, suits)
}
