pub mod browse;
pub mod catalog;
pub mod config;
pub mod controls;
pub mod debounce;
pub mod error;
pub mod glossary;
pub mod landing;
pub mod newsletter;
pub mod render;
pub mod source;
pub mod store;

pub use browse::BrowsePage;
pub use catalog::{Catalog, INGREDIENTS_RESOURCE, PRODUCTS_RESOURCE, SUITS_RESOURCE};
pub use config::{Config, resolve_config_path};
pub use controls::{Checkbox, CheckboxGroup, Controls, SortSelect};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use glossary::GlossaryPage;
pub use newsletter::{FormMessage, NewsletterForm};
pub use render::{CardRenderer, Container, IconPass, MarkupCards, NoIcons, RenderDispatcher};
pub use source::{DataSource, FsSource, HttpSource, JsonSource};
pub use store::StateStore;
