//! Featured products and suits on the landing page.

use tecuro_engine::featured;
use tecuro_types::{CatalogItem, SuitMeta};
use tracing::error;

use crate::Result;
use crate::catalog::{PRODUCTS_RESOURCE, SUITS_RESOURCE};
use crate::render::{Container, RenderDispatcher};
use crate::source::JsonSource;

pub async fn featured_products<S: JsonSource>(
    source: &S,
    limit: Option<usize>,
) -> Result<Vec<CatalogItem>> {
    let products: Vec<CatalogItem> = source.fetch_json(PRODUCTS_RESOURCE).await?;
    Ok(featured(&products, limit).to_vec())
}

pub async fn featured_suits<S: JsonSource>(
    source: &S,
    limit: Option<usize>,
) -> Result<Vec<SuitMeta>> {
    let suits: Vec<SuitMeta> = source.fetch_json(SUITS_RESOURCE).await?;
    Ok(featured(&suits, limit).to_vec())
}

/// Draw the featured products. On a failed fetch the error is logged and the
/// container keeps whatever it held; returns whether anything was drawn.
pub async fn render_featured_products<S: JsonSource>(
    source: &S,
    dispatcher: &RenderDispatcher,
    container: &mut Container,
    limit: Option<usize>,
) -> bool {
    match featured_products(source, limit).await {
        Ok(products) => {
            dispatcher.render_products(&products, container);
            true
        }
        Err(err) => {
            error!(error = %err, "failed to load featured products");
            false
        }
    }
}

/// Suit counterpart of [`render_featured_products`].
pub async fn render_featured_suits<S: JsonSource>(
    source: &S,
    dispatcher: &RenderDispatcher,
    container: &mut Container,
    limit: Option<usize>,
) -> bool {
    match featured_suits(source, limit).await {
        Ok(suits) => {
            dispatcher.render_suits(&suits, container);
            true
        }
        Err(err) => {
            error!(error = %err, "failed to load featured suits");
            false
        }
    }
}
