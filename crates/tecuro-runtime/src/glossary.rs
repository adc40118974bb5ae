use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tecuro_engine::Glossary;
use tracing::debug;

use crate::catalog::load_ingredients_or_empty;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::render::{Container, RenderDispatcher};
use crate::source::JsonSource;

/// Ingredient glossary with a debounced search box.
pub struct GlossaryPage {
    glossary: Arc<Glossary>,
    container: Arc<Mutex<Container>>,
    dispatcher: Arc<RenderDispatcher>,
    debouncer: Debouncer,
}

impl GlossaryPage {
    pub fn new(glossary: Glossary, dispatcher: RenderDispatcher, delay: Duration) -> Self {
        Self {
            glossary: Arc::new(glossary),
            container: Arc::new(Mutex::new(Container::new())),
            dispatcher: Arc::new(dispatcher),
            debouncer: Debouncer::new(delay),
        }
    }

    /// Load the glossary and draw every entry. A failed load renders an
    /// empty glossary.
    pub async fn initialize<S: JsonSource>(
        source: &S,
        dispatcher: RenderDispatcher,
        config: &Config,
    ) -> Self {
        let entries = load_ingredients_or_empty(source).await;
        let glossary = Glossary::new(entries).with_threshold(config.search_threshold);
        let page = Self::new(glossary, dispatcher, config.search_debounce());
        page.render_now("");
        page
    }

    /// Search box input. Supersedes any search still waiting on the delay.
    pub fn on_input(&mut self, text: impl Into<String>) {
        let query = text.into();
        let glossary = Arc::clone(&self.glossary);
        let container = Arc::clone(&self.container);
        let dispatcher = Arc::clone(&self.dispatcher);

        self.debouncer.call(async move {
            render(&glossary, &dispatcher, &container, &query);
        });
    }

    pub fn render_now(&self, query: &str) {
        render(&self.glossary, &self.dispatcher, &self.container, query);
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn glossary(&self) -> &Glossary {
        &self.glossary
    }

    pub fn html(&self) -> String {
        self.lock_container().html().to_string()
    }

    pub fn renders(&self) -> usize {
        self.lock_container().renders()
    }

    fn lock_container(&self) -> std::sync::MutexGuard<'_, Container> {
        self.container.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn render(glossary: &Glossary, dispatcher: &RenderDispatcher, container: &Mutex<Container>, query: &str) {
    let hits = glossary.filter(query);
    debug!(query, hits = hits.len(), "glossary search");

    let mut container = container.lock().unwrap_or_else(PoisonError::into_inner);
    dispatcher.render_ingredients(&hits, &mut container);
}
