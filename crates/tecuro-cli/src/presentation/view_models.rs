use serde::Serialize;
use std::fmt;

use tecuro_engine::{GroupedResult, SearchHit};
use tecuro_runtime::FormMessage;
use tecuro_types::{CatalogItem, SuitMeta};

use super::palette::Palette;

/// Turns a view model into its plain-text rendering.
pub trait CreateView {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a>;
}

/// JSON envelope of every command's output
#[derive(Debug, Serialize)]
pub struct CommandResultViewModel<T>
where
    T: Serialize,
{
    pub content: T,
}

impl<T> CommandResultViewModel<T>
where
    T: Serialize,
{
    pub fn new(content: T) -> Self {
        Self { content }
    }
}

/// Grouped product listing plus the URL the filter was written to
#[derive(Debug, Serialize)]
pub struct BrowseViewModel<'a> {
    pub url: String,
    #[serde(flatten)]
    pub grouped: GroupedResult<'a>,
}

#[derive(Debug, Serialize)]
pub struct MarkupViewModel {
    pub url: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
pub struct FeaturedProductsViewModel {
    pub products: Vec<CatalogItem>,
}

#[derive(Debug, Serialize)]
pub struct FeaturedSuitsViewModel {
    pub suits: Vec<SuitMeta>,
}

#[derive(Debug, Serialize)]
pub struct GlossaryViewModel {
    pub query: String,
    pub hits: Vec<GlossaryHitViewModel>,
}

#[derive(Debug, Serialize)]
pub struct GlossaryHitViewModel {
    pub name: String,
    pub aliases: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub score: f64,
}

impl From<SearchHit<'_>> for GlossaryHitViewModel {
    fn from(hit: SearchHit<'_>) -> Self {
        Self {
            name: hit.ingredient.name.clone(),
            aliases: hit.ingredient.aliases.clone(),
            tags: hit.ingredient.tags.clone(),
            description: hit.ingredient.description.clone(),
            score: hit.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubscribeViewModel {
    pub success: bool,
    pub message: String,
    pub color: &'static str,
}

impl From<&FormMessage> for SubscribeViewModel {
    fn from(message: &FormMessage) -> Self {
        Self {
            success: message.is_success(),
            message: message.text().to_string(),
            color: message.color(),
        }
    }
}
