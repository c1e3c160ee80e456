use grocer_catalog::{CatalogSource, Recommender};

use super::CommandResult;

pub async fn run<S: CatalogSource>(recommender: &Recommender<S>, json: bool) -> CommandResult {
    let discounted = recommender.discounted_products().await;
    CommandResult::listing(&discounted, json)
}
