use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use tecuro_engine::GroupedResult;
use tecuro_types::{CatalogItem, Ingredient, SuitMeta};
use tracing::debug;

/// Trait flags that get a badge on the product card, with their labels
pub const TRAIT_BADGES: [(&str, &str); 3] = [
    ("fragranceFree", "Fragrance-free"),
    ("alcoholFree", "Alcohol-free"),
    ("syntheticPreservativeFree", "No synthetic preservatives"),
];

/// Render target whose markup is replaced wholesale on every draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Container {
    html: String,
    renders: usize,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, html: String) {
        self.html = html;
        self.renders += 1;
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// How many times the markup has been replaced
    pub fn renders(&self) -> usize {
        self.renders
    }
}

/// Produces the markup for one card
pub trait CardRenderer {
    fn render_product(&self, product: &CatalogItem) -> String;
    fn render_suit(&self, suit: &SuitMeta) -> String;
    fn render_ingredient(&self, ingredient: &Ingredient) -> String;
}

/// Post-render pass that swaps icon placeholders for icons. Nothing is
/// returned and nothing waits on it.
pub trait IconPass {
    fn replace_icons(&self);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconPass for NoIcons {
    fn replace_icons(&self) {}
}

/// The site's card templates
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupCards;

impl CardRenderer for MarkupCards {
    fn render_product(&self, product: &CatalogItem) -> String {
        let alt = if product.name.is_empty() {
            "Product image"
        } else {
            product.name.as_str()
        };
        let badges: String = TRAIT_BADGES
            .iter()
            .filter(|(flag, _)| product.has_trait(flag))
            .map(|(_, label)| badge(label))
            .collect();

        format!(
            concat!(
                "<article class=\"card\">",
                "<div class=\"media-container rounded-xl border border-stone-200 bg-stone-50 mb-3\">",
                "<img src=\"{src}\" alt=\"{alt}\" class=\"media-img\">",
                "</div>",
                "<h3 class=\"card-title\">{name}</h3>",
                "<p class=\"card-body\">{body}</p>",
                "<div class=\"mt-2 flex flex-wrap gap-2 text-xs text-stone-600\">{badges}</div>",
                "</article>"
            ),
            src = attr(product.hero_image.as_deref().unwrap_or("")),
            alt = attr(alt),
            name = text(&product.name),
            body = text(product.short_description.as_deref().unwrap_or("")),
            badges = badges,
        )
    }

    fn render_suit(&self, suit: &SuitMeta) -> String {
        let name = if suit.name.is_empty() {
            "Suit"
        } else {
            suit.name.as_str()
        };

        format!(
            concat!(
                "<article class=\"card\">",
                "<div class=\"suit-card-banner mb-3\">",
                "<img src=\"{src}\" alt=\"{alt} banner\">",
                "</div>",
                "<h3 class=\"card-title\">{name}</h3>",
                "<p class=\"card-body\">{body}</p>",
                "</article>"
            ),
            src = attr(&suit.banner_image),
            alt = attr(name),
            name = text(&suit.name),
            body = text(suit.description.as_deref().unwrap_or("")),
        )
    }

    fn render_ingredient(&self, ingredient: &Ingredient) -> String {
        let tags: String = ingredient.tags.iter().map(|t| badge(t)).collect();

        format!(
            concat!(
                "<article class=\"card\">",
                "<h3 class=\"card-title\">{name}</h3>",
                "<div class=\"text-xs text-stone-600 mb-2\">{aliases}</div>",
                "<p class=\"card-body\">{body}</p>",
                "<div class=\"mt-2 flex flex-wrap gap-2 text-xs text-stone-600\">{tags}</div>",
                "</article>"
            ),
            name = text(&ingredient.name),
            aliases = text(&ingredient.aliases.join(", ")),
            body = text(ingredient.description.as_deref().unwrap_or("")),
            tags = tags,
        )
    }
}

fn badge(label: &str) -> String {
    format!(
        "<span class=\"px-2 py-1 rounded-full border border-stone-200\">{}</span>",
        text(label)
    )
}

/// Turns engine output into container markup.
///
/// Every draw fully replaces the container and is followed by the icon pass.
pub struct RenderDispatcher {
    cards: Box<dyn CardRenderer + Send + Sync>,
    icons: Box<dyn IconPass + Send + Sync>,
}

impl Default for RenderDispatcher {
    fn default() -> Self {
        Self::new(MarkupCards, NoIcons)
    }
}

impl RenderDispatcher {
    pub fn new<C, I>(cards: C, icons: I) -> Self
    where
        C: CardRenderer + Send + Sync + 'static,
        I: IconPass + Send + Sync + 'static,
    {
        Self {
            cards: Box::new(cards),
            icons: Box::new(icons),
        }
    }

    /// One section per suit: title, optional banner, then the card grid.
    pub fn render_groups(&self, grouped: &GroupedResult<'_>, container: &mut Container) {
        let sections: String = grouped
            .iter()
            .map(|group| {
                let banner = if group.suit.has_banner() {
                    format!(
                        "<div class=\"suit-banner mb-4\"><img src=\"{}\" alt=\"{}\"></div>",
                        attr(&group.suit.banner_image),
                        attr(&group.suit.name)
                    )
                } else {
                    String::new()
                };
                let cards: String = group
                    .items
                    .iter()
                    .map(|item| self.cards.render_product(item))
                    .collect();

                format!(
                    concat!(
                        "<section class=\"mb-10\">",
                        "<h2 class=\"section-title\">{title}</h2>",
                        "{banner}",
                        "<div class=\"grid sm:grid-cols-2 md:grid-cols-3 gap-6\">{cards}</div>",
                        "</section>"
                    ),
                    title = text(&group.suit.name),
                    banner = banner,
                    cards = cards,
                )
            })
            .collect();

        debug!(
            groups = grouped.len(),
            items = grouped.item_count(),
            "rendering product grid"
        );
        self.draw(container, sections);
    }

    pub fn render_products(&self, products: &[CatalogItem], container: &mut Container) {
        let cards = products.iter().map(|p| self.cards.render_product(p)).collect();
        self.draw(container, cards);
    }

    pub fn render_suits(&self, suits: &[SuitMeta], container: &mut Container) {
        let cards = suits.iter().map(|s| self.cards.render_suit(s)).collect();
        self.draw(container, cards);
    }

    pub fn render_ingredients(&self, ingredients: &[&Ingredient], container: &mut Container) {
        let cards = ingredients
            .iter()
            .map(|i| self.cards.render_ingredient(i))
            .collect();
        self.draw(container, cards);
    }

    fn draw(&self, container: &mut Container, html: String) {
        container.replace(html);
        self.icons.replace_icons();
    }
}
