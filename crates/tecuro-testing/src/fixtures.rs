//! Sample data shared by the integration tests.
//!
//! Suit `calm` has metadata with a banner, `glow` has metadata without one,
//! and `travel` has none at all. `Night Oil` carries no suit and lands in the
//! default group.

use tecuro_types::{CatalogItem, Ingredient, SuitId, SuitMeta};

pub fn sample_products() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Barrier Balm")
            .with_suit("calm")
            .with_concerns(["dryness", "redness"])
            .with_trait("fragranceFree", true)
            .with_trait("alcoholFree", true),
        CatalogItem::new("Clarifying Gel")
            .with_suit("glow")
            .with_concerns(["acne"])
            .with_trait("fragranceFree", true)
            .with_trait("alcoholFree", false),
        CatalogItem::new("azure Mist")
            .with_suit("calm")
            .with_concerns(["redness"])
            .with_trait("alcoholFree", true),
        CatalogItem::new("Night Oil").with_concerns(["dryness"]),
        CatalogItem::new("Travel Cleanser")
            .with_suit("travel")
            .with_concerns(["acne", "dryness"])
            .with_trait("syntheticPreservativeFree", true),
    ]
}

pub fn sample_suits() -> Vec<SuitMeta> {
    vec![
        SuitMeta {
            id: SuitId::from("calm"),
            name: "Calm Suit".to_string(),
            banner_image: "/img/calm.jpg".to_string(),
            description: Some("Soothing care for reactive skin.".to_string()),
        },
        SuitMeta {
            id: SuitId::from("glow"),
            name: "Glow Suit".to_string(),
            banner_image: String::new(),
            description: None,
        },
    ]
}

pub fn sample_ingredients() -> Vec<Ingredient> {
    vec![
        Ingredient::new("Retinol")
            .with_aliases(["Vitamin A"])
            .with_tags(["anti-aging"])
            .with_description("Encourages cell turnover."),
        Ingredient::new("Niacinamide")
            .with_aliases(["Vitamin B3"])
            .with_tags(["brightening"]),
        Ingredient::new("Squalane").with_tags(["hydration"]),
        Ingredient::new("Hyaluronic Acid").with_tags(["hydration"]),
    ]
}
