//! Database operations for the `products` table.
//!
//! A category is always written as a whole batch: the previous rows for that
//! category are deleted and the new batch inserted in one transaction.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use trendlens_core::Product;

use crate::DbError;

/// Number of sample rows returned by [`storage_stats`].
pub const STATS_SAMPLE_SIZE: i64 = 5;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub category: String,
    pub rank: i32,
    pub name: String,
    pub price: String,
    pub url: String,
    pub image_url: String,
    pub mall_name: String,
    pub keyword: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ProductRow {
    #[must_use]
    pub fn into_product(self) -> Product {
        Product {
            rank: u32::try_from(self.rank).unwrap_or(0),
            name: self.name,
            price: self.price,
            url: self.url,
            image_url: self.image_url,
            mall_name: self.mall_name,
            category: self.category,
            keyword: self.keyword,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// Row counts plus a few sample rows, for the debug endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    pub total: i64,
    pub categories: Vec<CategoryCount>,
    pub samples: Vec<ProductRow>,
}

/// Replaces every product stored under `category` with `products`.
///
/// The delete and the bulk insert run in one transaction, so readers see
/// either the old batch or the new one. Each product is stored under
/// `category` regardless of its own `category` field. Running the same batch
/// twice leaves the table in the same state.
///
/// Returns the number of rows inserted.
///
/// # Errors
///
/// Returns [`DbError::RankOutOfRange`] if a rank does not fit `INTEGER`, or
/// [`DbError::Sqlx`] if any statement fails (the transaction is rolled back).
pub async fn replace_category_products(
    pool: &PgPool,
    category: &str,
    products: &[Product],
) -> Result<u64, DbError> {
    let mut ranks: Vec<i32> = Vec::with_capacity(products.len());
    let mut names: Vec<String> = Vec::with_capacity(products.len());
    let mut prices: Vec<String> = Vec::with_capacity(products.len());
    let mut urls: Vec<String> = Vec::with_capacity(products.len());
    let mut image_urls: Vec<String> = Vec::with_capacity(products.len());
    let mut mall_names: Vec<String> = Vec::with_capacity(products.len());
    let mut keywords: Vec<Option<String>> = Vec::with_capacity(products.len());

    for product in products {
        ranks.push(i32::try_from(product.rank).map_err(|_| DbError::RankOutOfRange(product.rank))?);
        names.push(product.name.clone());
        prices.push(product.price.clone());
        urls.push(product.url.clone());
        image_urls.push(product.image_url.clone());
        mall_names.push(product.mall_name.clone());
        keywords.push(product.keyword.clone());
    }

    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM products WHERE category = $1")
        .bind(category)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let inserted = if products.is_empty() {
        0
    } else {
        sqlx::query(
            "INSERT INTO products \
                 (category, rank, name, price, url, image_url, mall_name, keyword) \
             SELECT $1, * FROM UNNEST(\
                  $2::int4[], $3::text[], $4::text[], $5::text[], $6::text[], $7::text[], \
                  $8::text[])",
        )
        .bind(category)
        .bind(&ranks)
        .bind(&names)
        .bind(&prices)
        .bind(&urls)
        .bind(&image_urls)
        .bind(&mall_names)
        .bind(&keywords)
        .execute(&mut *tx)
        .await?
        .rows_affected()
    };

    tx.commit().await?;

    tracing::info!(category, deleted, inserted, "category products replaced");
    Ok(inserted)
}

/// Lists the products stored under `category` in rank order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_products_by_category(
    pool: &PgPool,
    category: &str,
) -> Result<Vec<ProductRow>, DbError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, category, rank, name, price, url, image_url, mall_name, keyword, created_at \
         FROM products \
         WHERE category = $1 \
         ORDER BY rank ASC, id ASC",
    )
    .bind(category)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Total row count, per-category counts, and the first
/// [`STATS_SAMPLE_SIZE`] rows by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any query fails.
pub async fn storage_stats(pool: &PgPool) -> Result<StorageStats, DbError> {
    let total: i64 = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    let categories = sqlx::query_as::<_, CategoryCount>(
        "SELECT category, COUNT(*) AS count \
         FROM products \
         GROUP BY category \
         ORDER BY category ASC",
    )
    .fetch_all(pool)
    .await?;

    let samples = sqlx::query_as::<_, ProductRow>(
        "SELECT id, category, rank, name, price, url, image_url, mall_name, keyword, created_at \
         FROM products \
         ORDER BY id ASC \
         LIMIT $1",
    )
    .bind(STATS_SAMPLE_SIZE)
    .fetch_all(pool)
    .await?;

    Ok(StorageStats {
        total,
        categories,
        samples,
    })
}
