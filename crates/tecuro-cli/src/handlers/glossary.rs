use anyhow::Result;
use tecuro_engine::Glossary;
use tecuro_runtime::catalog::load_ingredients_or_empty;
use tecuro_runtime::{Config, JsonSource};

use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::GlossaryViewModel;

pub async fn handle<S: JsonSource>(
    source: &S,
    config: &Config,
    query: Option<String>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let entries = load_ingredients_or_empty(source).await;
    let glossary = Glossary::new(entries).with_threshold(config.search_threshold);

    let query = query.unwrap_or_default();
    let hits = glossary.search(&query).into_iter().map(Into::into).collect();

    renderer.render(GlossaryViewModel { query, hits })
}
