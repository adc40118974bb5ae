use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::lenient;
use super::suit::SuitId;

/// One product from `products.json`.
///
/// Every field is optional in the source data and `null` counts as missing.
/// Missing `concerns` behave as an empty tag list; a trait is only set when
/// its value is `true`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suit: Option<SuitId>,
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub concerns: Vec<String>,
    #[serde(
        default,
        deserialize_with = "lenient::flag_map",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub traits: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_suit(mut self, suit: impl Into<SuitId>) -> Self {
        self.suit = Some(suit.into());
        self
    }

    pub fn with_concerns<I, S>(mut self, concerns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.concerns = concerns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_trait(mut self, name: impl Into<String>, value: bool) -> Self {
        self.traits.insert(name.into(), value);
        self
    }

    /// Suit this item is grouped under; `"default"` when the item has none.
    ///
    /// An empty suit string counts as absent.
    pub fn group_key(&self) -> SuitId {
        match &self.suit {
            Some(suit) if !suit.as_str().is_empty() => suit.clone(),
            _ => SuitId::default_group(),
        }
    }

    pub fn has_concern(&self, concern: &str) -> bool {
        self.concerns.iter().any(|c| c == concern)
    }

    /// A trait only counts when it is present and `true`.
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.get(name).copied().unwrap_or(false)
    }
}
