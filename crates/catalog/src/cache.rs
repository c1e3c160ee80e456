use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use grocer_core::Product;

use crate::source::CatalogSource;

/// How long a fetched catalog snapshot stays fresh.
pub const DEFAULT_CATALOG_TTL_SECS: i64 = 5 * 60;

#[derive(Debug, Clone)]
struct Snapshot {
    products: Vec<Product>,
    fetched_at: DateTime<Utc>,
}

/// Process-lifetime cache over the full product listing.
///
/// Populated lazily on first read and refreshed once the snapshot outlives
/// the TTL. Reads never fail: a refresh error falls back to the previous
/// snapshot regardless of its age, or to an empty listing when nothing was
/// ever fetched. There is no invalidation or teardown.
#[derive(Debug)]
pub struct CatalogCache<S> {
    source: S,
    ttl: Duration,
    state: Mutex<Option<Snapshot>>,
}

impl<S: CatalogSource> CatalogCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, Duration::seconds(DEFAULT_CATALOG_TTL_SECS))
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self { source, ttl, state: Mutex::new(None) }
    }

    /// The current catalog: cached snapshot while fresh, otherwise a refresh
    /// with stale-or-empty fallback. The lock is held across the refresh so
    /// concurrent expired readers wait for one fetch instead of racing their
    /// own.
    pub async fn products(&self) -> Vec<Product> {
        let mut state = self.state.lock().await;

        if let Some(snapshot) = state.as_ref() {
            if Utc::now() - snapshot.fetched_at < self.ttl {
                debug!(products = snapshot.products.len(), "serving catalog from cache");
                return snapshot.products.clone();
            }
        }

        match self.source.fetch_all().await {
            Ok(products) => {
                debug!(products = products.len(), "catalog refreshed");
                *state = Some(Snapshot { products: products.clone(), fetched_at: Utc::now() });
                products
            }
            Err(error) => {
                warn!(%error, "catalog refresh failed, serving stale-or-empty");
                state.as_ref().map(|snapshot| snapshot.products.clone()).unwrap_or_default()
            }
        }
    }
}
