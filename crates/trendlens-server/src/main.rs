mod api;
mod middleware;
mod refresh;
mod scheduler;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use trendlens_db::{PoolConfig, Storage};
use trendlens_keywords::KeywordService;
use trendlens_scraper::Best100Scraper;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = trendlens_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = ?config.env, bind_addr = %config.bind_addr, "starting trendlens-server");

    let storage = Storage::connect(
        config.database_url.as_deref(),
        PoolConfig::from_app_config(&config),
    )
    .await;
    let keywords = Arc::new(KeywordService::from_config(&config)?);
    let scraper = Arc::new(Best100Scraper::new(
        config.http_timeout_secs,
        &config.user_agent,
        &config.best100_url,
    )?);

    let _scheduler = scheduler::build_scheduler(
        Arc::clone(&scraper),
        storage.clone(),
        &config.crawl_schedule,
    )
    .await?;

    let state = AppState {
        storage,
        keywords,
        scraper,
    };
    let app = build_app(state, &config.cors_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
