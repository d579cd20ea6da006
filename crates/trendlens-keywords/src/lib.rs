//! Keyword scoring, extraction, and the live-first lookup service behind the
//! trend dashboard.

pub mod extract;
pub mod fallback;
pub mod insights;
pub mod lexicon;
pub mod scorer;
pub mod service;
pub mod types;

pub use scorer::{competition_level, relevance, shopping_intent, shopping_score};
pub use service::KeywordService;
pub use types::{
    AnalysisSummary, BlogPost, BlogSearch, KeywordAnalysis, KeywordIdea, ProductScan,
    ShoppingSearch, Sourced, TrendAnalysis, TrendChart,
};
