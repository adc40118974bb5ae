use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::sort::SortKey;

/// Facet selections and sort key of the product browser.
///
/// Facets are ordered sets: toggling the same control repeatedly never
/// produces duplicates, and iteration (and therefore URL encoding) is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub selected_concerns: BTreeSet<String>,
    #[serde(default)]
    pub selected_traits: BTreeSet<String>,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_concerns(concerns);
        self
    }

    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.replace_traits(traits);
        self
    }

    pub fn with_sort(mut self, key: impl Into<SortKey>) -> Self {
        self.sort_key = key.into();
        self
    }

    pub fn replace_concerns<I, S>(&mut self, concerns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_concerns = concerns.into_iter().map(Into::into).collect();
    }

    pub fn replace_traits<I, S>(&mut self, traits: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_traits = traits.into_iter().map(Into::into).collect();
    }

    /// True when nothing would be written to the URL
    pub fn is_default(&self) -> bool {
        self.selected_concerns.is_empty()
            && self.selected_traits.is_empty()
            && self.sort_key.is_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = FilterState::default();
        assert!(state.selected_concerns.is_empty());
        assert!(state.selected_traits.is_empty());
        assert_eq!(state.sort_key, SortKey::Alphabetical);
        assert!(state.is_default());
    }

    #[test]
    fn test_duplicates_collapse() {
        let state = FilterState::new()
            .with_concerns(["acne", "dryness", "acne", "acne"])
            .with_traits(["vegan", "vegan"]);

        assert_eq!(state.selected_concerns.len(), 2);
        assert_eq!(state.selected_traits.len(), 1);
        assert!(!state.is_default());
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = FilterState::new().with_concerns(["acne", "dryness"]);
        state.replace_concerns(["redness"]);

        let concerns: Vec<&str> = state.selected_concerns.iter().map(String::as_str).collect();
        assert_eq!(concerns, vec!["redness"]);
    }
}
