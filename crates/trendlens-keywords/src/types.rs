//! Result records returned by [`KeywordService`](crate::KeywordService).
//!
//! Each record has one shape regardless of whether it was built from live
//! API data or from the fallback tables.

use serde::Serialize;
use trendlens_core::{
    Competition, DataSource, KeywordInsight, Product, SearchVolumeStats, TrendDirection,
    TrendPoint, TrendSummary,
};
use trendlens_naver::{KeywordToolRow, ShopItem};

/// A value plus the stage of the fallback chain that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub value: T,
}

impl<T> Sourced<T> {
    pub fn live(value: T) -> Self {
        Self {
            source: DataSource::Live,
            value,
        }
    }

    pub fn curated(value: T) -> Self {
        Self {
            source: DataSource::Curated,
            value,
        }
    }

    pub fn synthesized(value: T) -> Self {
        Self {
            source: DataSource::Synthesized,
            value,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Sourced<U> {
        Sourced {
            source: self.source,
            value: f(self.value),
        }
    }
}

/// Integer averages over keyword-tool rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub avg_monthly_search: u64,
    pub avg_click_count: u64,
    pub avg_click_price: u64,
}

/// Keyword-tool analysis of one seed keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    pub competition: Competition,
    /// `0..=100` competition index; only the curated and synthesized paths
    /// have one.
    pub competition_index: Option<u8>,
    pub monthly_searches: u64,
    pub trend_direction: TrendDirection,
    pub related_keywords: Vec<KeywordInsight>,
    pub search_volume_stats: SearchVolumeStats,
    pub summary: AnalysisSummary,
    /// Raw keyword-tool rows; empty unless the data is live.
    pub rows: Vec<KeywordToolRow>,
    pub insights: Vec<String>,
}

/// One keyword idea for a seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordIdea {
    pub keyword: String,
    pub relevance: u8,
    pub monthly_volume: u64,
    pub competition: Competition,
}

/// `DataLab` trend plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendAnalysis {
    pub summary: TrendSummary,
    pub related_keywords: Vec<KeywordInsight>,
    pub search_volume_stats: SearchVolumeStats,
    pub insights: Vec<String>,
}

/// Shopping search response with the query echoed back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingSearch {
    pub keyword: String,
    pub total: u64,
    pub start: u32,
    pub display: u32,
    pub items: Vec<ShopItem>,
}

/// A blog or news hit with highlight markup removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub title: String,
    pub description: String,
    pub bloggername: String,
    pub bloggerlink: String,
    pub postdate: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogSearch {
    pub keyword: String,
    pub total: u64,
    pub display: usize,
    pub blogs: Vec<BlogPost>,
}

/// Ranked products collected from several keyword searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductScan {
    pub items: Vec<Product>,
    pub count: usize,
}

impl ProductScan {
    #[must_use]
    pub fn new(items: Vec<Product>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// Chart series for one keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendChart {
    pub keyword: String,
    pub points: Vec<TrendPoint>,
}
