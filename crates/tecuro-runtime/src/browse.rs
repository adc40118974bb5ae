use tecuro_core::{History, Location, decode, replace_url};
use tecuro_types::FilterState;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::controls::Controls;
use crate::render::{Container, RenderDispatcher};
use crate::source::JsonSource;
use crate::store::StateStore;

/// The product browser: filter controls, the grouped product grid and the
/// address bar, kept in step with one another.
///
/// Every interaction goes through [`BrowsePage::apply`], which recomputes the
/// grid, redraws the container and replaces the current history entry.
pub struct BrowsePage<H: History> {
    store: StateStore,
    controls: Controls,
    derive_controls: bool,
    location: Location,
    history: H,
    container: Container,
    dispatcher: RenderDispatcher,
}

impl<H: History> BrowsePage<H> {
    /// A page at `location` whose controls will be derived from the catalog.
    pub fn new(location: Location, history: H) -> Self {
        Self {
            store: StateStore::default(),
            controls: Controls::default(),
            derive_controls: true,
            location,
            history,
            container: Container::new(),
            dispatcher: RenderDispatcher::default(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: RenderDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Use a fixed set of controls instead of deriving them from the catalog.
    pub fn with_controls(mut self, controls: Controls) -> Self {
        self.controls = controls;
        self.derive_controls = false;
        self
    }

    /// Fetch the catalog, restore the filter from the URL and draw.
    ///
    /// A failed fetch leaves the page with an empty catalog.
    pub async fn initialize<S: JsonSource>(&mut self, source: &S) -> String {
        let catalog = Catalog::load_or_empty(source).await;
        self.initialize_with(catalog)
    }

    pub fn initialize_with(&mut self, catalog: Catalog) -> String {
        self.store = StateStore::new(catalog);
        if self.derive_controls {
            self.controls = Controls::from_catalog(self.store.products());
        }

        let restored = decode(self.location.search());
        debug!(query = self.location.search(), "restoring filter from url");
        self.store.restore(restored);
        self.controls.sync(self.store.filter());

        self.apply()
    }

    /// Returns false, changing nothing, when no concern checkbox has `value`.
    pub fn toggle_concern(&mut self, value: &str, checked: bool) -> bool {
        if !self.controls.concerns.set_checked(value, checked) {
            warn!(concern = value, "no such concern control");
            return false;
        }
        self.store.set_concerns(self.controls.concerns.checked_values());
        self.apply();
        true
    }

    /// Returns false, changing nothing, when no trait checkbox has `value`.
    pub fn toggle_trait(&mut self, value: &str, checked: bool) -> bool {
        if !self.controls.traits.set_checked(value, checked) {
            warn!(trait_name = value, "no such trait control");
            return false;
        }
        self.store.set_traits(self.controls.traits.checked_values());
        self.apply();
        true
    }

    pub fn change_sort(&mut self, value: &str) {
        self.controls.sort.set(value);
        self.store.set_sort(value);
        self.apply();
    }

    /// Recompute, redraw and write the filter into the address bar.
    /// Returns the URL now in the address bar.
    pub fn apply(&mut self) -> String {
        let grouped = self.store.compute();
        self.dispatcher.render_groups(&grouped, &mut self.container);

        let url = replace_url(&mut self.history, &self.location, self.store.filter());
        self.location = Location::parse(&url);
        url
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    pub fn filter(&self) -> &FilterState {
        self.store.filter()
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn container(&self) -> &Container {
        &self.container
    }
}
