use tecuro_core::{Location, MemoryHistory};
use tecuro_runtime::{BrowsePage, FsSource};
use tecuro_testing::TestWorld;
use tecuro_testing::fixtures::{sample_products, sample_suits};

fn page(url: &str) -> BrowsePage<MemoryHistory> {
    let location = Location::parse(url);
    BrowsePage::new(location.clone(), MemoryHistory::new(location))
}

fn item_names(page: &BrowsePage<MemoryHistory>) -> Vec<(String, Vec<String>)> {
    page.store()
        .compute()
        .iter()
        .map(|group| {
            (
                group.suit_id.to_string(),
                group.items.iter().map(|item| item.name.clone()).collect(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_state_is_restored_from_url() {
    let world = TestWorld::new().with_sample_catalog();
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html?c=dryness&t=fragranceFree&sort=pop&utm_source=mail#grid");

    let url = page.initialize(&source).await;

    assert_eq!(url, "/products.html?c=dryness&t=fragranceFree&sort=pop");
    assert!(page.controls().concerns.is_checked("dryness"));
    assert!(!page.controls().concerns.is_checked("acne"));
    assert!(page.controls().traits.is_checked("fragranceFree"));
    assert_eq!(page.controls().sort.value(), "pop");
    assert_eq!(
        item_names(&page),
        vec![("calm".to_string(), vec!["Barrier Balm".to_string()])]
    );
}

#[tokio::test]
async fn test_default_state_renders_everything_at_bare_path() {
    let world = TestWorld::new().with_sample_catalog();
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html");

    let url = page.initialize(&source).await;

    assert_eq!(url, "/products.html");
    let groups: Vec<String> = item_names(&page).into_iter().map(|(id, _)| id).collect();
    assert_eq!(groups, vec!["calm", "glow", "default", "travel"]);
    assert_eq!(
        item_names(&page)[0].1,
        vec!["azure Mist".to_string(), "Barrier Balm".to_string()]
    );

    let html = page.container().html();
    assert!(html.contains("<h2 class=\"section-title\">Calm Suit</h2>"));
    assert!(html.contains("<h2 class=\"section-title\">travel</h2>"));
    assert_eq!(html.matches("suit-banner").count(), 1);
}

#[tokio::test]
async fn test_interaction_only_replaces_history() {
    let world = TestWorld::new().with_sample_catalog();
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html");
    page.initialize(&source).await;

    assert!(page.toggle_concern("acne", true));
    assert!(page.toggle_concern("redness", true));
    assert!(page.toggle_trait("alcoholFree", true));
    page.change_sort("pop");
    assert!(page.toggle_concern("acne", false));

    assert_eq!(page.history().len(), 1);
    assert_eq!(page.history().replacements(), 6);
    assert_eq!(
        page.history().current().href(),
        "/products.html?c=redness&t=alcoholFree&sort=pop"
    );
    assert_eq!(page.container().renders(), 6);
}

#[tokio::test]
async fn test_missing_resource_degrades_to_empty_catalog() {
    let world = TestWorld::new().with_json("products.json", &sample_products());
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html?c=acne");

    let url = page.initialize(&source).await;

    assert!(page.store().compute().is_empty());
    assert!(page.store().catalog().is_empty());
    assert_eq!(page.container().html(), "");
    assert_eq!(page.container().renders(), 1);
    assert_eq!(url, "/products.html?c=acne");
}

#[tokio::test]
async fn test_malformed_resource_degrades_to_empty_catalog() {
    let world = TestWorld::new()
        .with_raw("products.json", "[{\"name\": ")
        .with_json("suits.json", &sample_suits());
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html");

    page.initialize(&source).await;

    assert!(page.store().compute().is_empty());
    assert!(page.controls().concerns.is_empty());
}

#[tokio::test]
async fn test_records_with_null_fields_still_load() {
    let world = TestWorld::new()
        .with_raw(
            "products.json",
            r#"[
                {"name": "Barrier Balm", "suit": "calm", "concerns": ["dryness"], "traits": {"vegan": true}},
                {"name": "Mist", "suit": null, "concerns": null, "traits": null},
                {"name": "Toner", "concerns": ["acne", 7], "traits": {"vegan": 1}}
            ]"#,
        )
        .with_json("suits.json", &sample_suits());
    let source = FsSource::new(world.data_dir());
    let mut page = page("/products.html");

    page.initialize(&source).await;

    assert_eq!(page.store().catalog().products.len(), 3);
    assert_eq!(
        item_names(&page),
        vec![
            ("calm".to_string(), vec!["Barrier Balm".to_string()]),
            (
                "default".to_string(),
                vec!["Mist".to_string(), "Toner".to_string()]
            ),
        ]
    );

    assert!(page.toggle_trait("vegan", true));
    assert_eq!(
        item_names(&page),
        vec![("calm".to_string(), vec!["Barrier Balm".to_string()])]
    );
}
