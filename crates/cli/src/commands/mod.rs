pub mod config;
pub mod discounts;
pub mod pairings;
pub mod related;
pub mod trending;

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use grocer_catalog::{CatalogSource, HttpCatalogClient, StaticCatalogSource};
use grocer_core::{AppConfig, Product};

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn listing(products: &[Product], json: bool) -> Self {
        let output = if json {
            serde_json::to_string_pretty(products)
                .unwrap_or_else(|error| format!("[] // serialization failed: {error}"))
        } else if products.is_empty() {
            "no products to show".to_string()
        } else {
            products.iter().map(render_line).collect::<Vec<_>>().join("\n")
        };
        Self { exit_code: 0, output }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

fn render_line(product: &Product) -> String {
    let price = if product.is_discounted {
        format!("${} (was ${})", product.effective_price(), product.price)
    } else {
        format!("${}", product.price)
    };
    format!("{:<12} {:<28} {:<14} {price}", product.id.0, product.name, product.category.as_str())
}

/// Resolve the catalog source for a command: a JSON fixture when `--catalog`
/// was given, the configured HTTP backend otherwise.
pub fn catalog_source(
    fixture: Option<&Path>,
    config: &AppConfig,
) -> anyhow::Result<Box<dyn CatalogSource>> {
    match fixture {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("could not read catalog fixture `{}`", path.display()))?;
            let products: Vec<Product> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid catalog fixture `{}`", path.display()))?;
            Ok(Box::new(StaticCatalogSource::new(products)))
        }
        None => {
            let client = HttpCatalogClient::new(&config.catalog)
                .context("could not build catalog HTTP client")?;
            Ok(Box::new(client))
        }
    }
}
