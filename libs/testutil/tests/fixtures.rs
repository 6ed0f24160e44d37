use blockkit_testutil::{FixtureFormat, assert_schema, fixtures, keys_of, load_fixture};
use serde_json::json;

const SURFACE_SCHEMA: &str = "schema/surface.schema.json";

#[test]
fn json_and_yaml_fixtures_load_as_json_values() {
    let modal = load_fixture!("divider_modal.json");
    assert_eq!(modal["title"]["text"], json!("Divider"));

    let home = load_fixture!("header_home.yaml");
    assert_eq!(home["blocks"][0]["text"]["text"], json!("Inbox"));
    assert_eq!(home["private_metadata"], json!(r#"{"page":2}"#));
}

#[test]
fn yaml_fixtures_keep_key_order() {
    let home = fixtures!().value("header_home.yaml").unwrap();
    assert_eq!(
        keys_of(&home),
        ["type", "blocks", "callback_id", "private_metadata"]
    );
}

#[test]
fn format_follows_the_extension() {
    assert_eq!(FixtureFormat::of("a.json").unwrap(), FixtureFormat::Json);
    assert_eq!(FixtureFormat::of("b.yml").unwrap(), FixtureFormat::Yaml);
    assert!(FixtureFormat::of("Cargo.toml").is_err());
    assert!(fixtures!().value("../Cargo.toml").is_err());
}

#[test]
fn fixture_names_stay_in_the_fixture_dir() {
    let fixtures = fixtures!();
    assert!(fixtures.dir().ends_with("tests/fixtures"));
    assert!(fixtures.path("schema/surface.schema.json").unwrap().exists());
    assert!(fixtures.path("../fixtures.rs").is_err());
    assert!(fixtures.path("/etc/hosts").is_err());
}

#[test]
fn fixtures_satisfy_the_surface_schema() {
    assert_schema!(SURFACE_SCHEMA, load_fixture!("divider_modal.json"));
    assert_schema!(SURFACE_SCHEMA, load_fixture!("header_home.yaml"));
}

#[test]
fn schema_reports_every_violation() {
    let record = json!({
        "type": "modal",
        "title": {"type": "plain_text", "text": "This title is definitely too long"}
    });
    let err = fixtures!()
        .check_schema(SURFACE_SCHEMA, &record)
        .unwrap_err()
        .to_string();
    assert!(err.starts_with("schema/surface.schema.json rejected the record"));
    assert!(err.contains("; "), "expected two violations: {err}");
}

#[test]
fn compiled_schemas_are_shared() {
    let fixtures = fixtures!();
    let first = fixtures.schema(SURFACE_SCHEMA).unwrap();
    let second = fixtures.schema(SURFACE_SCHEMA).unwrap();
    assert!(std::sync::Arc::ptr_eq(&first, &second));
}
