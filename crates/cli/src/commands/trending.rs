use grocer_catalog::{CatalogSource, Recommender};

use super::CommandResult;

pub async fn run<S: CatalogSource>(
    recommender: &Recommender<S>,
    limit: usize,
    json: bool,
) -> CommandResult {
    let trending = recommender.trending_products(limit).await;
    CommandResult::listing(&trending, json)
}
