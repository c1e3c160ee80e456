use grocer_catalog::{CatalogSource, Recommender};
use grocer_core::ProductId;

use super::CommandResult;

pub async fn run<S: CatalogSource>(
    recommender: &Recommender<S>,
    product_id: &str,
    limit: usize,
    json: bool,
) -> CommandResult {
    let id = ProductId(product_id.to_string());
    let Some(current) = recommender.product(&id).await else {
        return CommandResult::failure(
            "related",
            "unknown_product",
            format!("product `{product_id}` is not in the catalog"),
            1,
        );
    };

    let related = recommender.related_products(&current, limit).await;
    CommandResult::listing(&related, json)
}
