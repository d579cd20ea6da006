//! Keyword and trend data model shared by the scoring, fallback, and API
//! layers. Every value here is computed per request and never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse competition bucket for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Competition {
    Low,
    Medium,
    High,
}

impl Competition {
    /// Korean display label used by the dashboard.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "낮음",
            Self::Medium => "보통",
            Self::High => "높음",
        }
    }

    /// Maps the search-ad API `compIdx` label (`"높음"`, `"중간"`, `"낮음"`).
    /// Unknown labels map to `Medium`.
    #[must_use]
    pub fn from_comp_idx(raw: &str) -> Self {
        match raw.trim() {
            "높음" | "high" | "HIGH" => Self::High,
            "낮음" | "low" | "LOW" => Self::Low,
            _ => Self::Medium,
        }
    }

    /// Buckets a `0..=100` competition index: above 80 is high, above 50 medium.
    #[must_use]
    pub fn from_index(index: u8) -> Self {
        if index > 80 {
            Self::High
        } else if index > 50 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

impl fmt::Display for Competition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Five-step level used for popularity and search-volume labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    VeryLow,
    Low,
    Normal,
    High,
    VeryHigh,
}

impl Level {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "매우 낮음",
            Self::Low => "낮음",
            Self::Normal => "보통",
            Self::High => "높음",
            Self::VeryHigh => "매우 높음",
        }
    }
}

/// What a shopper most likely wants when typing a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShoppingIntent {
    Purchase,
    BrandExploration,
    CategoryExploration,
    Goal,
    Assist,
    Match,
    General,
}

impl ShoppingIntent {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Purchase => "구매 의도",
            Self::BrandExploration => "브랜드 탐색 의도",
            Self::CategoryExploration => "카테고리 탐색 의도",
            Self::Goal => "골 관심 의도",
            Self::Assist => "어시스트 관심 의도",
            Self::Match => "경기 관심 의도",
            Self::General => "일반 검색 의도",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
}

impl TrendDirection {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Rising => "상승",
            Self::Falling => "하락",
            Self::Flat => "유지",
        }
    }

    /// Compares the first and last values of a series.
    #[must_use]
    pub fn between(first: f64, last: f64) -> Self {
        if last > first {
            Self::Rising
        } else if last < first {
            Self::Falling
        } else {
            Self::Flat
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seasonality {
    YearRound,
    Seasonal,
}

impl Seasonality {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::YearRound => "연중",
            Self::Seasonal => "계절성",
        }
    }
}

/// Which stage of the live → curated → synthesized chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Curated,
    Synthesized,
}

impl DataSource {
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, Self::Live)
    }
}

/// A candidate keyword scored against a seed term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordInsight {
    pub keyword: String,
    /// `100` only for an exact seed match; every other candidate is `0..=95`.
    pub relevance: u8,
    /// Formatted count such as `"12,345"`, or a level label.
    pub search_volume: String,
    pub competition: Competition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<ShoppingIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shopping_score: Option<u8>,
}

impl KeywordInsight {
    /// Builds an insight without the shopping-specific fields.
    #[must_use]
    pub fn basic(
        keyword: impl Into<String>,
        relevance: u8,
        search_volume: impl Into<String>,
        competition: Competition,
    ) -> Self {
        Self {
            keyword: keyword.into(),
            relevance,
            search_volume: search_volume.into(),
            competition,
            price_range: None,
            category: None,
            intent: None,
            shopping_score: None,
        }
    }
}

/// One day of relative search interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    /// Relative interest, `0.0..=100.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchVolumeStats {
    pub daily_searches: u64,
    pub weekly_searches: u64,
    pub monthly_searches: u64,
    pub volume_level: Level,
    pub competition: Competition,
    pub trend_direction: TrendDirection,
    /// Percentage string, e.g. `"12%"`.
    pub growth_rate: String,
    pub seasonality: Seasonality,
}

/// Aggregate view over a trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub keyword: String,
    pub avg_ratio: f64,
    pub max_ratio: f64,
    pub direction: TrendDirection,
    pub data_points: usize,
    pub popularity: Level,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn competition_serializes_lowercase() {
        let json = serde_json::to_string(&Competition::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn competition_from_comp_idx_maps_korean_labels() {
        assert_eq!(Competition::from_comp_idx("높음"), Competition::High);
        assert_eq!(Competition::from_comp_idx("중간"), Competition::Medium);
        assert_eq!(Competition::from_comp_idx("낮음"), Competition::Low);
        assert_eq!(Competition::from_comp_idx(""), Competition::Medium);
    }

    #[test]
    fn competition_from_index_boundaries() {
        assert_eq!(Competition::from_index(81), Competition::High);
        assert_eq!(Competition::from_index(80), Competition::Medium);
        assert_eq!(Competition::from_index(51), Competition::Medium);
        assert_eq!(Competition::from_index(50), Competition::Low);
    }

    #[test]
    fn trend_direction_between_compares_endpoints() {
        assert_eq!(TrendDirection::between(10.0, 20.0), TrendDirection::Rising);
        assert_eq!(TrendDirection::between(20.0, 10.0), TrendDirection::Falling);
        assert_eq!(TrendDirection::between(15.0, 15.0), TrendDirection::Flat);
    }

    #[test]
    fn keyword_insight_basic_omits_shopping_fields_in_json() {
        let insight = KeywordInsight::basic("노트북추천", 95, "3,200", Competition::High);
        let json = serde_json::to_value(&insight).unwrap();
        assert!(json.get("price_range").is_none());
        assert!(json.get("intent").is_none());
        assert_eq!(json["competition"], "high");
    }

    #[test]
    fn intent_labels_are_distinct() {
        let intents = [
            ShoppingIntent::Purchase,
            ShoppingIntent::BrandExploration,
            ShoppingIntent::CategoryExploration,
            ShoppingIntent::Goal,
            ShoppingIntent::Assist,
            ShoppingIntent::Match,
            ShoppingIntent::General,
        ];
        let mut labels: Vec<&str> = intents.iter().map(|i| i.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), intents.len());
    }
}
