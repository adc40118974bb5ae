use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a suit (a curated product line)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SuitId(String);

impl SuitId {
    /// Group id used for products that carry no suit
    pub const DEFAULT: &'static str = "default";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn default_group() -> Self {
        Self(Self::DEFAULT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SuitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SuitId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SuitId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SuitId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Display metadata for a suit, as served by `suits.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuitMeta {
    pub id: SuitId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub banner_image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl SuitMeta {
    /// Synthetic record used when a product references a suit that has no metadata.
    ///
    /// The suit id doubles as the display name and there is no banner.
    pub fn fallback(id: &SuitId) -> Self {
        Self {
            id: id.clone(),
            name: id.as_str().to_string(),
            banner_image: String::new(),
            description: None,
        }
    }

    pub fn has_banner(&self) -> bool {
        !self.banner_image.is_empty()
    }
}

/// Find the metadata for `id`, falling back to [`SuitMeta::fallback`].
pub fn resolve_suit(suits: &[SuitMeta], id: &SuitId) -> SuitMeta {
    suits
        .iter()
        .find(|suit| &suit.id == id)
        .cloned()
        .unwrap_or_else(|| SuitMeta::fallback(id))
}
