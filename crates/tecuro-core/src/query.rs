use std::collections::BTreeSet;

use tecuro_types::{FilterState, SortKey};
use url::form_urlencoded;

use crate::history::{History, Location};

/// Comma-joined concern tags
pub const CONCERNS_KEY: &str = "c";
/// Comma-joined trait names
pub const TRAITS_KEY: &str = "t";
/// Raw sort key
pub const SORT_KEY: &str = "sort";

/// Restore filter state from a query string.
///
/// Accepts the string with or without its leading `?`. Only `c`, `t` and
/// `sort` are read; the first occurrence of a repeated key wins. Empty list
/// segments are dropped, and an absent or empty key leaves the field at its
/// default. Never fails.
pub fn decode(query: &str) -> FilterState {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut concerns: Option<String> = None;
    let mut traits: Option<String> = None;
    let mut sort: Option<String> = None;

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        let slot = match &*key {
            CONCERNS_KEY => &mut concerns,
            TRAITS_KEY => &mut traits,
            SORT_KEY => &mut sort,
            _ => continue,
        };
        if slot.is_none() {
            *slot = Some(value.into_owned());
        }
    }

    let mut state = FilterState::default();
    if let Some(concerns) = concerns.filter(|v| !v.is_empty()) {
        state.replace_concerns(split_list(&concerns));
    }
    if let Some(traits) = traits.filter(|v| !v.is_empty()) {
        state.replace_traits(split_list(&traits));
    }
    if let Some(sort) = sort.filter(|v| !v.is_empty()) {
        state.sort_key = SortKey::parse(&sort);
    }
    state
}

/// Serialize filter state into a query string (without `?`).
///
/// Default fields are omitted, so the all-default state encodes to `""`.
/// Keys come out in `c`, `t`, `sort` order and facet values in sorted order.
pub fn encode(state: &FilterState) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    if !state.selected_concerns.is_empty() {
        serializer.append_pair(CONCERNS_KEY, &join_list(&state.selected_concerns));
    }
    if !state.selected_traits.is_empty() {
        serializer.append_pair(TRAITS_KEY, &join_list(&state.selected_traits));
    }
    if !state.sort_key.is_default() {
        serializer.append_pair(SORT_KEY, state.sort_key.as_str());
    }

    serializer.finish()
}

/// Write `state` into the address bar as a history replacement.
///
/// Any other query parameter on `location` is dropped. Returns the URL that
/// was written.
pub fn replace_url<H: History + ?Sized>(
    history: &mut H,
    location: &Location,
    state: &FilterState,
) -> String {
    let url = location.with_query(&encode(state));
    history.replace_state(&url);
    url
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').filter(|segment| !segment.is_empty())
}

fn join_list(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}
