use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered product list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by display name
    ByName,
}

/// Active sort selection.
///
/// The key space is open: anything the sort control produces is kept
/// verbatim so it survives a trip through the URL, even when no ordering
/// is attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// `alpha`, the default
    #[default]
    Alphabetical,
    /// `pop`
    ///
    /// There is no popularity metric in the catalog yet, so this sorts by
    /// name exactly like [`SortKey::Alphabetical`].
    Popularity,
    /// Any other key; accepted and persisted, applies no ordering
    Other(String),
}

impl SortKey {
    pub const ALPHA: &'static str = "alpha";
    pub const POP: &'static str = "pop";

    /// Parse a raw key. An empty key means the default.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | Self::ALPHA => SortKey::Alphabetical,
            Self::POP => SortKey::Popularity,
            other => SortKey::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Alphabetical => Self::ALPHA,
            SortKey::Popularity => Self::POP,
            SortKey::Other(raw) => raw,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, SortKey::Alphabetical)
    }

    /// Ordering for this key, `None` keeps catalog order.
    pub fn ordering(&self) -> Option<SortOrder> {
        match self {
            // TODO: give Popularity its own order once products carry a popularity score
            SortKey::Alphabetical | SortKey::Popularity => Some(SortOrder::ByName),
            SortKey::Other(_) => None,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::parse(s))
    }
}

impl From<String> for SortKey {
    fn from(s: String) -> Self {
        SortKey::parse(&s)
    }
}

impl From<&str> for SortKey {
    fn from(s: &str) -> Self {
        SortKey::parse(s)
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}
