use chrono::Duration;
use tracing::debug;

use grocer_core::recs;
use grocer_core::{Category, Product, ProductId};

use crate::cache::CatalogCache;
use crate::source::CatalogSource;

/// The consumer boundary for recommendation panels and catalog reads.
///
/// Every method is infallible: recommendations are a cosmetic feature, so a
/// broken backend degrades to whatever the cache still holds (possibly
/// nothing) and the panel simply shows fewer items. The only await point is
/// the catalog fetch inside the cache.
#[derive(Debug)]
pub struct Recommender<S> {
    cache: CatalogCache<S>,
}

impl<S: CatalogSource> Recommender<S> {
    pub fn new(source: S) -> Self {
        Self { cache: CatalogCache::new(source) }
    }

    pub fn with_cache_ttl(source: S, ttl: Duration) -> Self {
        Self { cache: CatalogCache::with_ttl(source, ttl) }
    }

    /// Top related products for a product view, ranked by similarity score.
    pub async fn related_products(&self, current: &Product, limit: usize) -> Vec<Product> {
        let catalog = self.cache.products().await;
        let related = recs::related_products(&catalog, current, limit);
        debug!(product = %current.id, returned = related.len(), "related products computed");
        related
    }

    /// Complementary picks from the category pairing table.
    pub async fn frequently_bought_together(
        &self,
        current: &Product,
        limit: usize,
    ) -> Vec<Product> {
        let catalog = self.cache.products().await;
        recs::frequently_bought_together(&catalog, current, limit)
    }

    /// The fixed trending sampler over the cached catalog.
    pub async fn trending_products(&self, limit: usize) -> Vec<Product> {
        let catalog = self.cache.products().await;
        recs::trending_products(&catalog, limit)
    }

    /// Resolve a product by id from the cached catalog.
    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        self.cache.products().await.into_iter().find(|product| &product.id == id)
    }

    /// All products in one category, in catalog order.
    pub async fn products_in_category(&self, category: Category) -> Vec<Product> {
        self.cache
            .products()
            .await
            .into_iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// All currently discounted products. The backend has no dedicated
    /// endpoint for this, so it is a client-side filter of the listing.
    pub async fn discounted_products(&self) -> Vec<Product> {
        self.cache.products().await.into_iter().filter(|product| product.is_discounted).collect()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use rust_decimal::Decimal;

    use grocer_core::{Category, Product, ProductId};

    use super::Recommender;
    use crate::source::{CatalogError, CatalogSource, StaticCatalogSource};

    struct OfflineSource;

    #[async_trait]
    impl CatalogSource for OfflineSource {
        async fn fetch_all(&self) -> Result<Vec<Product>, CatalogError> {
            Err(CatalogError::Unavailable("backend offline".to_string()))
        }
    }

    fn product(id: &str, category: Category, is_discounted: bool) -> Product {
        Product {
            id: ProductId(id.to_string()),
            name: id.to_string(),
            description: None,
            category,
            price: Decimal::from(2),
            discount_price: is_discounted.then(|| Decimal::from(1)),
            is_discounted,
            unit: None,
            image_url: None,
            tags: Vec::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("apple", Category::FruitsVeggies, true),
            product("chips", Category::Snacks, false),
            product("cola", Category::ColdDrinks, false),
            product("milk", Category::DairyProducts, true),
        ]
    }

    #[tokio::test]
    async fn resolves_products_and_category_reads() {
        let recommender = Recommender::new(StaticCatalogSource::new(fixture()));

        let apple = recommender.product(&ProductId("apple".to_string())).await;
        assert_eq!(apple.expect("apple should exist").category, Category::FruitsVeggies);

        let snacks = recommender.products_in_category(Category::Snacks).await;
        assert_eq!(snacks.len(), 1);

        let discounted = recommender.discounted_products().await;
        let ids: Vec<&str> = discounted.iter().map(|product| product.id.0.as_str()).collect();
        assert_eq!(ids, ["apple", "milk"]);
    }

    #[tokio::test]
    async fn entry_points_return_empty_when_backend_is_down() {
        let recommender = Recommender::new(OfflineSource);
        let current = product("apple", Category::FruitsVeggies, false);

        assert!(recommender.related_products(&current, 4).await.is_empty());
        assert!(recommender.frequently_bought_together(&current, 3).await.is_empty());
        assert!(recommender.trending_products(4).await.is_empty());
        assert!(recommender.product(&current.id).await.is_none());
        assert!(recommender.discounted_products().await.is_empty());
    }

    #[tokio::test]
    async fn related_products_come_from_the_cached_catalog() {
        let recommender = Recommender::new(StaticCatalogSource::new(fixture()));
        let current = product("chips", Category::Snacks, false);

        let related = recommender.related_products(&current, 2).await;
        assert_eq!(related.len(), 2);
        assert!(related.iter().all(|candidate| candidate.id != current.id));
    }
}
