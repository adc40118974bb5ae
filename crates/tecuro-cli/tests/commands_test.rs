use assert_cmd::Command;
use predicates::prelude::*;
use tecuro_testing::TestWorld;

#[allow(deprecated)]
fn tecuro(world: &TestWorld) -> Command {
    let mut cmd = Command::cargo_bin("tecuro").unwrap();
    world.configure_command(&mut cmd);
    cmd
}

#[test]
fn test_featured_products_default_limit() {
    let world = TestWorld::new().with_sample_catalog();

    tecuro(&world)
        .args(["featured", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Barrier Balm"))
        .stdout(predicate::str::contains("3. azure Mist"))
        .stdout(predicate::str::contains("4.").not());
}

#[test]
fn test_featured_limit_from_config() {
    let world = TestWorld::new()
        .with_sample_catalog()
        .with_config("featured_limit = 2\n");

    tecuro(&world)
        .args(["featured", "products"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Clarifying Gel"))
        .stdout(predicate::str::contains("3.").not());
}

#[test]
fn test_featured_suits_with_limit() {
    let world = TestWorld::new().with_sample_catalog();

    tecuro(&world)
        .args(["featured", "suits", "--limit", "1"])
        .assert()
        .success()
        .stdout("1. Calm Suit [calm]\n");
}

#[test]
fn test_featured_without_data_fails() {
    let world = TestWorld::new();

    tecuro(&world)
        .args(["featured", "products"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to load"))
        .stderr(predicate::str::contains("products.json"));
}

#[test]
fn test_glossary_search() {
    let world = TestWorld::new().with_sample_catalog();

    tecuro(&world)
        .args(["glossary", "vitamin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retinol (Vitamin A)"))
        .stdout(predicate::str::contains("Niacinamide (Vitamin B3)"))
        .stdout(predicate::str::contains("Squalane").not());
}

#[test]
fn test_glossary_lists_everything_without_query() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_catalog();

    let json = world.run_json(&["glossary"])?.json()?;

    let hits = json["content"]["hits"].as_array().map_or(0, Vec::len);
    assert_eq!(hits, 4);
    assert_eq!(json["content"]["hits"][0]["name"], "Retinol");
    Ok(())
}

#[test]
fn test_glossary_no_match() {
    let world = TestWorld::new().with_sample_catalog();

    tecuro(&world)
        .args(["glossary", "zzzzzz"])
        .assert()
        .success()
        .stdout("No ingredients match.\n");
}

#[test]
fn test_subscribe_success() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["subscribe", "--email", "a@b.co", "--consent"])?;

    assert!(result.success());
    insta::assert_snapshot!(result.stdout().trim(), @"Thanks for subscribing!");
    Ok(())
}

#[test]
fn test_subscribe_rejected() {
    let world = TestWorld::new();

    tecuro(&world)
        .args(["subscribe", "--email", "nope"])
        .assert()
        .failure()
        .stdout("Enter a valid email. Please agree to receive emails.\n")
        .stderr(predicate::str::contains("Error: subscription was not accepted"));
}

#[test]
fn test_subscribe_json() -> anyhow::Result<()> {
    let world = TestWorld::new();

    let result = world.run_json(&["subscribe", "--email", "a@b.co"])?;

    assert!(!result.success());
    let json = result.json()?;
    assert_eq!(json["content"]["success"], false);
    assert_eq!(json["content"]["message"], "Please agree to receive emails.");
    assert_eq!(json["content"]["color"], "#7f1d1d");
    Ok(())
}

#[test]
fn test_rust_log_overrides_log_level() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample_catalog()
        .with_env("RUST_LOG", "tecuro_runtime=debug");

    let result = world.run(&["browse"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stderr().contains("reading resource"));
    assert!(result.stderr().contains("catalog loaded"));
    Ok(())
}

#[test]
fn test_default_log_level_is_quiet() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_catalog();

    let result = world.run(&["browse"])?;

    assert!(result.success());
    assert!(!result.stderr().contains("catalog loaded"));
    Ok(())
}
