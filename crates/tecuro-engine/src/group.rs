use serde::Serialize;
use std::collections::HashMap;

use tecuro_types::{CatalogItem, SuitId, SuitMeta, resolve_suit};

/// Items of one suit, with the suit's resolved display metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitGroup<'a> {
    pub suit_id: SuitId,
    pub suit: SuitMeta,
    pub items: Vec<&'a CatalogItem>,
}

/// Render input: groups in first-encounter order of the filtered list.
///
/// Recomputed on every filter change and never kept between recomputations.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GroupedResult<'a> {
    pub groups: Vec<SuitGroup<'a>>,
}

impl<'a> GroupedResult<'a> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of groups
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SuitGroup<'a>> {
        self.groups.iter()
    }

    pub fn suit_ids(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.suit_id.as_str()).collect()
    }
}

/// Partition an already filtered and sorted list by suit.
///
/// Group order is the order in which suits are first seen; relative item
/// order inside a group is preserved.
pub fn group_by_suit<'a>(items: Vec<&'a CatalogItem>, suits: &[SuitMeta]) -> GroupedResult<'a> {
    let mut index: HashMap<SuitId, usize> = HashMap::new();
    let mut buckets: Vec<(SuitId, Vec<&'a CatalogItem>)> = Vec::new();

    for item in items {
        let key = item.group_key();
        match index.get(&key) {
            Some(&position) => buckets[position].1.push(item),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![item]));
            }
        }
    }

    let groups = buckets
        .into_iter()
        .map(|(suit_id, items)| SuitGroup {
            suit: resolve_suit(suits, &suit_id),
            suit_id,
            items,
        })
        .collect();

    GroupedResult { groups }
}
