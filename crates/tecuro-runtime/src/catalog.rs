use serde::{Deserialize, Serialize};
use tecuro_types::{CatalogItem, Ingredient, SuitMeta};
use tracing::{error, info};

use crate::Result;
use crate::source::JsonSource;

pub const PRODUCTS_RESOURCE: &str = "products.json";
pub const SUITS_RESOURCE: &str = "suits.json";
pub const INGREDIENTS_RESOURCE: &str = "ingredients.json";

/// Products and suit metadata for one page session; never mutated after load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<CatalogItem>,
    pub suits: Vec<SuitMeta>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogItem>, suits: Vec<SuitMeta>) -> Self {
        Self { products, suits }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Fetch products and suits concurrently; fails if either does.
    pub async fn load<S: JsonSource>(source: &S) -> Result<Self> {
        let (products, suits) = tokio::try_join!(
            source.fetch_json::<Vec<CatalogItem>>(PRODUCTS_RESOURCE),
            source.fetch_json::<Vec<SuitMeta>>(SUITS_RESOURCE),
        )?;
        info!(
            products = products.len(),
            suits = suits.len(),
            "catalog loaded"
        );
        Ok(Self { products, suits })
    }

    /// Like [`Catalog::load`], but a failure is logged and yields an empty
    /// catalog so the page stays usable.
    pub async fn load_or_empty<S: JsonSource>(source: &S) -> Self {
        match Self::load(source).await {
            Ok(catalog) => catalog,
            Err(err) => {
                error!(error = %err, "failed to load catalog, showing no products");
                Self::default()
            }
        }
    }
}

/// Glossary entries, or an empty list (logged) when they cannot be loaded.
pub async fn load_ingredients_or_empty<S: JsonSource>(source: &S) -> Vec<Ingredient> {
    match source.fetch_json::<Vec<Ingredient>>(INGREDIENTS_RESOURCE).await {
        Ok(ingredients) => {
            info!(ingredients = ingredients.len(), "glossary loaded");
            ingredients
        }
        Err(err) => {
            error!(error = %err, "failed to load glossary, showing no ingredients");
            Vec::new()
        }
    }
}
