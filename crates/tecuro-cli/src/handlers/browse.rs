use anyhow::Result;
use tecuro_core::{Location, MemoryHistory, decode, encode};
use tecuro_runtime::{BrowsePage, Config, JsonSource};
use tecuro_types::SortKey;
use tracing::debug;

use crate::presentation::ConsoleRenderer;
use crate::presentation::view_models::{BrowseViewModel, MarkupViewModel};

#[derive(Debug, Default)]
pub struct BrowseRequest {
    pub path: Option<String>,
    pub query: Option<String>,
    pub concerns: Vec<String>,
    pub traits: Vec<String>,
    pub sort: Option<String>,
    pub markup: bool,
}

pub async fn handle<S: JsonSource>(
    source: &S,
    config: &Config,
    request: BrowseRequest,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let location = initial_location(config, &request);
    debug!(url = %location, "opening product browser");

    let mut page = BrowsePage::new(location.clone(), MemoryHistory::new(location));
    let url = page.initialize(source).await;

    if request.markup {
        return renderer.render(MarkupViewModel {
            url,
            html: page.container().html().to_string(),
        });
    }

    renderer.render(BrowseViewModel {
        url,
        grouped: page.store().compute(),
    })
}

/// The address the page is opened at: `--query` with the facet flags
/// folded in, re-encoded so only known parameters survive.
fn initial_location(config: &Config, request: &BrowseRequest) -> Location {
    let path = request.path.as_deref().unwrap_or(&config.default_path);
    let mut state = decode(request.query.as_deref().unwrap_or(""));

    state.selected_concerns.extend(
        request
            .concerns
            .iter()
            .filter(|c| !c.is_empty())
            .cloned(),
    );
    state.selected_traits.extend(
        request
            .traits
            .iter()
            .filter(|t| !t.is_empty())
            .cloned(),
    );
    if let Some(sort) = &request.sort {
        state.sort_key = SortKey::parse(sort);
    }

    Location::new(path, encode(&state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_merge_into_query() {
        let request = BrowseRequest {
            query: Some("?c=redness&utm_source=mail".to_string()),
            concerns: vec!["acne".to_string(), String::new()],
            traits: vec!["vegan".to_string()],
            sort: Some("pop".to_string()),
            ..Default::default()
        };

        let location = initial_location(&Config::default(), &request);

        insta::assert_snapshot!(location.href(), @"/products.html?c=acne%2Credness&t=vegan&sort=pop");
    }

    #[test]
    fn test_no_flags_gives_bare_path() {
        let request = BrowseRequest {
            path: Some("/shop".to_string()),
            ..Default::default()
        };

        let location = initial_location(&Config::default(), &request);

        assert_eq!(location.href(), "/shop");
    }
}
