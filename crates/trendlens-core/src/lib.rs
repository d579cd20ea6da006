pub mod app_config;
pub mod categories;
pub mod config;
pub mod keywords;
pub mod products;

pub use app_config::{AppConfig, Environment, NaverCredentials, SearchAdCredentials};
pub use categories::{
    category_keywords, category_names, CategoryGroup, CATEGORY_GROUPS, POPULAR_KEYWORDS,
};
pub use config::{load_app_config, load_app_config_from_env};
pub use keywords::{
    Competition, DataSource, KeywordInsight, Level, SearchVolumeStats, Seasonality,
    ShoppingIntent, TrendDirection, TrendPoint, TrendSummary,
};
pub use products::{
    assign_dense_ranks, strip_bold_markup, Product, CATEGORY_BEST100, CATEGORY_POPULAR,
    MAX_BEST_PRODUCTS, PRICE_UNAVAILABLE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),
}
