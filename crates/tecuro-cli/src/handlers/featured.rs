use anyhow::Result;
use tecuro_runtime::landing::{featured_products, featured_suits};
use tecuro_runtime::{Config, JsonSource};

use crate::types::FeaturedKind;
use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::{FeaturedProductsViewModel, FeaturedSuitsViewModel};

pub async fn handle<S: JsonSource>(
    source: &S,
    config: &Config,
    kind: FeaturedKind,
    limit: Option<usize>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let limit = Some(limit.unwrap_or(config.featured_limit));

    match kind {
        FeaturedKind::Products => {
            let products = featured_products(source, limit).await?;
            renderer.render(FeaturedProductsViewModel { products })
        }
        FeaturedKind::Suits => {
            let suits = featured_suits(source, limit).await?;
            renderer.render(FeaturedSuitsViewModel { suits })
        }
    }
}
