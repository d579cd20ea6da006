//! Best-100 refresh and category persistence shared by the HTTP handlers and
//! the scheduled job.

use trendlens_core::{Product, CATEGORY_BEST100};
use trendlens_db::Storage;
use trendlens_scraper::{Best100Scraper, ScraperError};

#[derive(Debug)]
pub struct RefreshOutcome {
    pub products: Vec<Product>,
    pub persisted: bool,
}

/// Replaces the stored batch for `category` with `products`.
///
/// Skipped when the batch is empty or storage is unavailable; a database
/// failure is logged, never propagated. Returns whether the batch was
/// written.
pub async fn persist_category(storage: &Storage, category: &str, products: &[Product]) -> bool {
    if products.is_empty() {
        tracing::info!(category, "empty batch; keeping stored products");
        return false;
    }
    let Some(pool) = storage.pool() else {
        tracing::warn!(category, count = products.len(), "storage unavailable; batch not persisted");
        return false;
    };

    match trendlens_db::replace_category_products(pool, category, products).await {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(category, error = %e, "failed to persist products");
            false
        }
    }
}

/// Scrapes the best-100 page once and stores the result under
/// [`CATEGORY_BEST100`].
///
/// # Errors
///
/// Returns the [`ScraperError`] from the page fetch; nothing is persisted in
/// that case.
pub async fn refresh_best100(
    scraper: &Best100Scraper,
    storage: &Storage,
) -> Result<RefreshOutcome, ScraperError> {
    let products = scraper.scrape().await?;
    let persisted = persist_category(storage, CATEGORY_BEST100, &products).await;
    tracing::info!(count = products.len(), persisted, "best-100 refresh complete");
    Ok(RefreshOutcome {
        products,
        persisted,
    })
}
