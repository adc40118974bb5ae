use std::fmt;

use super::palette::Palette;
use super::view_models::{
    BrowseViewModel, CreateView, FeaturedProductsViewModel, FeaturedSuitsViewModel,
    GlossaryViewModel, MarkupViewModel, SubscribeViewModel,
};

impl CreateView for BrowseViewModel<'_> {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(BrowseView {
            data: self,
            palette,
        })
    }
}

struct BrowseView<'a, 'b> {
    data: &'a BrowseViewModel<'b>,
    palette: Palette,
}

impl fmt::Display for BrowseView<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;

        if self.data.grouped.is_empty() {
            writeln!(f, "No products match the current filters.")?;
        }

        for group in self.data.grouped.iter() {
            writeln!(
                f,
                "{} {}",
                p.heading(&group.suit.name),
                p.dim(format!("[{}] {} item(s)", group.suit_id, group.items.len()))
            )?;
            for item in &group.items {
                write!(f, "  - {}", item.name)?;
                if !item.concerns.is_empty() {
                    write!(f, "  {}", p.dim(item.concerns.join(", ")))?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "URL: {}", p.accent(&self.data.url))
    }
}

impl CreateView for MarkupViewModel {
    fn create_view<'a>(&'a self, _palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(MarkupView { data: self })
    }
}

struct MarkupView<'a> {
    data: &'a MarkupViewModel,
}

impl fmt::Display for MarkupView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.html)?;
        writeln!(f, "URL: {}", self.data.url)
    }
}

impl CreateView for FeaturedProductsViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeaturedProductsView {
            data: self,
            palette,
        })
    }
}

struct FeaturedProductsView<'a> {
    data: &'a FeaturedProductsViewModel,
    palette: Palette,
}

impl fmt::Display for FeaturedProductsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, product) in self.data.products.iter().enumerate() {
            write!(f, "{}. {}", i + 1, self.palette.heading(&product.name))?;
            if let Some(description) = &product.short_description {
                write!(f, "  {}", self.palette.dim(description))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CreateView for FeaturedSuitsViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(FeaturedSuitsView {
            data: self,
            palette,
        })
    }
}

struct FeaturedSuitsView<'a> {
    data: &'a FeaturedSuitsViewModel,
    palette: Palette,
}

impl fmt::Display for FeaturedSuitsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, suit) in self.data.suits.iter().enumerate() {
            writeln!(
                f,
                "{}. {} {}",
                i + 1,
                self.palette.heading(&suit.name),
                self.palette.dim(format!("[{}]", suit.id))
            )?;
        }
        Ok(())
    }
}

impl CreateView for GlossaryViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(GlossaryView {
            data: self,
            palette,
        })
    }
}

struct GlossaryView<'a> {
    data: &'a GlossaryViewModel,
    palette: Palette,
}

impl fmt::Display for GlossaryView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.palette;

        if self.data.hits.is_empty() {
            return writeln!(f, "No ingredients match.");
        }

        for hit in &self.data.hits {
            write!(f, "{}", p.heading(&hit.name))?;
            if !hit.aliases.is_empty() {
                write!(f, " ({})", hit.aliases.join(", "))?;
            }
            if !hit.tags.is_empty() {
                write!(f, "  {}", p.dim(hit.tags.join(", ")))?;
            }
            writeln!(f)?;
            if let Some(description) = &hit.description {
                writeln!(f, "    {}", description)?;
            }
        }
        Ok(())
    }
}

impl CreateView for SubscribeViewModel {
    fn create_view<'a>(&'a self, palette: Palette) -> Box<dyn fmt::Display + 'a> {
        Box::new(SubscribeView {
            data: self,
            palette,
        })
    }
}

struct SubscribeView<'a> {
    data: &'a SubscribeViewModel,
    palette: Palette,
}

impl fmt::Display for SubscribeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.success {
            writeln!(f, "{}", self.palette.success(&self.data.message))
        } else {
            writeln!(f, "{}", self.palette.error(&self.data.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tecuro_engine::compute;
    use tecuro_types::{CatalogItem, FilterState};

    #[test]
    fn test_browse_view_lists_groups_and_url() {
        let items = vec![
            CatalogItem::new("Gel").with_suit("glow").with_concerns(["acne"]),
            CatalogItem::new("Oil"),
        ];
        let model = BrowseViewModel {
            url: "/products.html".to_string(),
            grouped: compute(&items, &[], &FilterState::default()),
        };

        let text = model.create_view(Palette::plain()).to_string();

        assert!(text.contains("glow [glow] 1 item(s)\n  - Gel  acne\n"));
        assert!(text.contains("default [default] 1 item(s)\n  - Oil\n"));
        assert!(text.ends_with("URL: /products.html\n"));
    }

    #[test]
    fn test_empty_browse_view() {
        let model = BrowseViewModel {
            url: "/products.html?c=acne".to_string(),
            grouped: Default::default(),
        };

        let text = model.create_view(Palette::plain()).to_string();

        assert_eq!(
            text,
            "No products match the current filters.\nURL: /products.html?c=acne\n"
        );
    }
}
