use std::env;
use std::io::Write;
use std::sync::{Mutex, OnceLock};

use serde_json::Value;
use tempfile::NamedTempFile;

use grocer_cli::commands::{self, config, discounts, pairings, related, trending};
use grocer_catalog::Recommender;
use grocer_core::config::{AppConfig, LoadOptions};

const FIXTURE: &str = r#"[
  {"id": "FV-001", "name": "Fuji Apple", "category": "fruitsVeggies", "price": 2.49,
   "discountPrice": 1.99, "isDiscounted": true, "tags": ["fruit"]},
  {"id": "FV-002", "name": "Banana", "category": "fruitsVeggies", "price": 1.29,
   "tags": ["fruit"]},
  {"id": "SN-001", "name": "Salted Chips", "category": "snacks", "price": 3.49,
   "tags": ["salty"]},
  {"id": "CD-001", "name": "Kombucha", "category": "coldDrinks", "price": 3.99,
   "tags": ["healthy"]},
  {"id": "DP-001", "name": "Whole Milk", "category": "dairyProducts", "price": 2.89}
]"#;

fn fixture_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp fixture file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");
    file
}

fn fixture_recommender(
    file: &NamedTempFile,
) -> Recommender<Box<dyn grocer_catalog::CatalogSource>> {
    let source = commands::catalog_source(Some(file.path()), &AppConfig::default())
        .expect("fixture source should load");
    Recommender::new(source)
}

fn listed_ids(json_output: &str) -> Vec<String> {
    let products: Value = serde_json::from_str(json_output).expect("listing should be JSON");
    products
        .as_array()
        .expect("listing should be an array")
        .iter()
        .map(|product| product["id"].as_str().expect("id").to_string())
        .collect()
}

#[tokio::test]
async fn related_ranks_the_other_fruit_first() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = related::run(&recommender, "FV-001", 4, true).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(listed_ids(&result.output), ["FV-002", "SN-001", "CD-001", "DP-001"]);
}

#[tokio::test]
async fn related_renders_human_readable_lines_by_default() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = related::run(&recommender, "FV-001", 2, false).await;
    assert_eq!(result.exit_code, 0);
    assert!(result.output.contains("Banana"));
    assert!(result.output.contains("fruitsVeggies"));
}

#[tokio::test]
async fn related_fails_cleanly_for_an_unknown_product() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = related::run(&recommender, "XX-999", 4, false).await;
    assert_eq!(result.exit_code, 1);

    let payload: Value = serde_json::from_str(&result.output).expect("outcome payload");
    assert_eq!(payload["command"], "related");
    assert_eq!(payload["status"], "error");
    assert_eq!(payload["error_class"], "unknown_product");
}

#[tokio::test]
async fn pairings_follow_the_fruit_rule() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = pairings::run(&recommender, "FV-001", 3, true).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(listed_ids(&result.output), ["FV-002", "SN-001", "CD-001"]);
}

#[tokio::test]
async fn trending_skips_the_undiscounted_snack_slot() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = trending::run(&recommender, 4, true).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(listed_ids(&result.output), ["FV-001", "CD-001", "DP-001"]);
}

#[tokio::test]
async fn discounts_lists_only_discounted_products() {
    let file = fixture_file();
    let recommender = fixture_recommender(&file);

    let result = discounts::run(&recommender, true).await;
    assert_eq!(result.exit_code, 0);
    assert_eq!(listed_ids(&result.output), ["FV-001"]);
}

#[test]
fn invalid_fixture_file_is_rejected() {
    let mut file = NamedTempFile::new().expect("temp fixture file");
    file.write_all(b"not json").expect("write fixture");

    let result = commands::catalog_source(Some(file.path()), &AppConfig::default());
    assert!(result.is_err());
}

#[test]
fn config_reports_env_overridden_values() {
    with_env(&[("GROCER_CATALOG_BASE_URL", "http://shop.internal:9090")], || {
        let config = AppConfig::load(LoadOptions::default()).expect("config should load");
        let output = config::run(&config);

        assert!(output.contains("catalog.base_url = http://shop.internal:9090"));
        assert!(output.contains("cache_ttl_secs = 300"));
    });
}

fn env_guard() -> &'static Mutex<()> {
    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(()))
}

fn with_env(vars: &[(&str, &str)], run: impl FnOnce()) {
    let _guard = env_guard().lock().expect("env guard");
    for (key, value) in vars {
        env::set_var(key, value);
    }
    run();
    for (key, _) in vars {
        env::remove_var(key);
    }
}
