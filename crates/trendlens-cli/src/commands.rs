//! Command handlers for the CLI.
//!
//! Lookups that have a fallback path always print something. Commands that
//! read or write stored products need a reachable database and fail
//! otherwise.

use serde::Serialize;
use sqlx::PgPool;
use trendlens_core::{AppConfig, Product, CATEGORY_BEST100, CATEGORY_POPULAR};
use trendlens_db::{PoolConfig, Storage};
use trendlens_keywords::{KeywordService, ProductScan, Sourced};
use trendlens_scraper::Best100Scraper;

async fn connect(config: &AppConfig) -> Storage {
    Storage::connect(
        config.database_url.as_deref(),
        PoolConfig::from_app_config(config),
    )
    .await
}

async fn require_pool(config: &AppConfig) -> anyhow::Result<PgPool> {
    match connect(config).await {
        Storage::Connected(pool) => Ok(pool),
        Storage::Unavailable => anyhow::bail!("database unavailable; check DATABASE_URL"),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_products(products: &[Product]) {
    for product in products {
        println!(
            "{:>3}  {}  [{}]  {}",
            product.rank, product.name, product.price, product.url
        );
    }
}

fn print_scan(label: &str, scan: &Sourced<ProductScan>) {
    println!(
        "{label}: {} products (source: {:?})",
        scan.value.count, scan.source
    );
    print_products(&scan.value.items);
}

pub(crate) async fn run_db_ping(config: &AppConfig) -> anyhow::Result<()> {
    let pool = require_pool(config).await?;
    trendlens_db::health_check(&pool).await?;
    println!("database ok");
    Ok(())
}

pub(crate) async fn run_db_migrate(config: &AppConfig) -> anyhow::Result<()> {
    let Some(url) = config.database_url.as_deref() else {
        anyhow::bail!("DATABASE_URL is not set");
    };
    let pool = trendlens_db::connect_pool(url, PoolConfig::from_app_config(config)).await?;
    let applied = trendlens_db::run_migrations(&pool).await?;
    println!("applied {applied} migration(s)");
    Ok(())
}

pub(crate) async fn run_db_stats(config: &AppConfig) -> anyhow::Result<()> {
    let pool = require_pool(config).await?;
    let stats = trendlens_db::storage_stats(&pool).await?;
    print_json(&stats)
}

/// Scrapes the best-100 page once. With `dry_run` the products are only
/// printed; otherwise they replace the stored `전체` batch.
pub(crate) async fn run_crawl(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let scraper = Best100Scraper::new(
        config.http_timeout_secs,
        &config.user_agent,
        &config.best100_url,
    )?;
    let products = scraper.scrape().await?;
    print_products(&products);

    if dry_run {
        println!("dry-run: {} products scraped, nothing stored", products.len());
        return Ok(());
    }
    if products.is_empty() {
        println!("no products scraped; stored batch left unchanged");
        return Ok(());
    }

    let pool = require_pool(config).await?;
    let inserted =
        trendlens_db::replace_category_products(&pool, CATEGORY_BEST100, &products).await?;
    println!("stored {inserted} products under {CATEGORY_BEST100}");
    Ok(())
}

/// Popular keyword scan. Only a live scan replaces the stored batch, and
/// only when storage is reachable.
pub(crate) async fn run_scan_popular(config: &AppConfig, dry_run: bool) -> anyhow::Result<()> {
    let service = KeywordService::from_config(config)?;
    let scan = service.popular_scan().await;
    print_scan(CATEGORY_POPULAR, &scan);

    if dry_run || !scan.source.is_live() {
        return Ok(());
    }

    match connect(config).await {
        Storage::Connected(pool) => {
            let inserted =
                trendlens_db::replace_category_products(&pool, CATEGORY_POPULAR, &scan.value.items)
                    .await?;
            println!("stored {inserted} products under {CATEGORY_POPULAR}");
        }
        Storage::Unavailable => {
            tracing::warn!("storage unavailable; popular scan not stored");
        }
    }
    Ok(())
}

pub(crate) async fn run_scan_groups(config: &AppConfig) -> anyhow::Result<()> {
    let service = KeywordService::from_config(config)?;
    let scan = service.group_scan().await;
    print_scan("category groups", &scan);
    Ok(())
}

pub(crate) async fn run_scan_category(config: &AppConfig, category: &str) -> anyhow::Result<()> {
    let service = KeywordService::from_config(config)?;
    let scan = service.category_scan(category).await?;
    print_scan(category, &scan);
    Ok(())
}

pub(crate) async fn run_analyze(config: &AppConfig, keyword: &str) -> anyhow::Result<()> {
    let service = KeywordService::from_config(config)?;
    let analysis = service.keyword_analysis(keyword).await;
    tracing::info!(keyword, source = ?analysis.source, "keyword analysis");
    print_json(&analysis.value)
}

pub(crate) async fn run_trend(config: &AppConfig, keyword: &str) -> anyhow::Result<()> {
    let service = KeywordService::from_config(config)?;
    let trend = service.trend_analysis(keyword).await;
    tracing::info!(keyword, source = ?trend.source, "trend analysis");
    print_json(&trend.value)
}

pub(crate) async fn run_items(config: &AppConfig, category: &str) -> anyhow::Result<()> {
    let pool = require_pool(config).await?;
    let rows = trendlens_db::list_products_by_category(&pool, category).await?;
    let products: Vec<Product> = rows
        .into_iter()
        .map(trendlens_db::ProductRow::into_product)
        .collect();
    println!("{category}: {} stored products", products.len());
    print_products(&products);
    Ok(())
}
