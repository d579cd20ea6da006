//! Curated and synthesized stand-ins for live API data.
//!
//! Each generator first looks the seed up in a curated table (exact key,
//! then either-contains) and synthesizes a record only when nothing matches.
//! Random values come from the caller's RNG so tests can seed it.

mod tables;

use chrono::{Duration, NaiveDate};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use rand::seq::IndexedRandom;
use rand::Rng;
use trendlens_core::{
    assign_dense_ranks, Competition, KeywordInsight, Product, SearchVolumeStats, Seasonality,
    TrendDirection, TrendPoint, TrendSummary,
};
use trendlens_naver::ShopItem;

use crate::insights::analysis_insights;
use crate::lexicon::lookup;
use crate::scorer::{
    competition_level, daily_volume_level, format_count, growth_rate, monthly_volume_level,
    popularity_level, relevance, shopping_intent,
};
use crate::types::{
    AnalysisSummary, BlogPost, BlogSearch, KeywordAnalysis, KeywordIdea, ShoppingSearch, Sourced,
};

pub use tables::TREND_WINDOW_POINTS;

const DIRECTIONS: [TrendDirection; 3] = [
    TrendDirection::Rising,
    TrendDirection::Falling,
    TrendDirection::Flat,
];

const COMPETITIONS: [Competition; 3] = [Competition::Low, Competition::Medium, Competition::High];

/// Scores `terms` against `seed` and orders them by relevance, highest
/// first. Ties keep their input order.
pub fn rank_candidates<R, I, S>(
    seed: &str,
    terms: I,
    volume: std::ops::RangeInclusive<u64>,
    rng: &mut R,
) -> Vec<KeywordInsight>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut ranked: Vec<KeywordInsight> = terms
        .into_iter()
        .map(|term| {
            let term = term.into();
            KeywordInsight::basic(
                term.clone(),
                relevance(&term, seed),
                format_count(rng.random_range(volume.clone())),
                competition_level(&term),
            )
        })
        .collect();
    ranked.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    ranked
}

/// Related keywords for `seed` without a live search.
pub fn related_keywords<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> Sourced<Vec<KeywordInsight>> {
    if let Some(terms) = lookup(tables::RELATED, seed) {
        return Sourced::curated(rank_candidates(seed, terms.iter().copied(), 2_000..=15_000, rng));
    }
    let terms = tables::RELATED_SUFFIXES.iter().map(|s| format!("{seed}{s}"));
    Sourced::synthesized(rank_candidates(seed, terms, 1_000..=8_000, rng))
}

/// Shopping-oriented related keywords for `seed`, already in curated order.
pub fn shopping_keywords<R: Rng + ?Sized>(
    seed: &str,
    rng: &mut R,
) -> Sourced<Vec<KeywordInsight>> {
    let curated = lookup(tables::SHOPPING_KEYWORDS, seed);
    let rows: Vec<(String, &str, &str)> = match curated {
        Some(entries) => entries
            .iter()
            .map(|(keyword, price, category)| ((*keyword).to_string(), *price, *category))
            .collect(),
        None => tables::SHOPPING_SUFFIXES
            .iter()
            .map(|(suffix, price)| (format!("{seed}{suffix}"), *price, tables::SYNTHESIZED_CATEGORY))
            .collect(),
    };

    let insights = rows
        .into_iter()
        .zip(0u8..)
        .map(|((keyword, price, category), i)| KeywordInsight {
            relevance: 95u8.saturating_sub(i.saturating_mul(3)).max(70),
            search_volume: format_count(rng.random_range(2_000..=25_000)),
            competition: competition_level(&keyword),
            price_range: Some(price.to_string()),
            category: Some(category.to_string()),
            intent: Some(shopping_intent(&keyword)),
            shopping_score: Some(90u8.saturating_sub(i.saturating_mul(4)).max(60)),
            keyword,
        })
        .collect();

    if curated.is_some() {
        Sourced::curated(insights)
    } else {
        Sourced::synthesized(insights)
    }
}

/// Keyword-tool style analysis for `seed`.
pub fn keyword_analysis<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> Sourced<KeywordAnalysis> {
    let curated = lookup(tables::ANALYSIS, seed);
    let (competition_index, monthly, direction, related): (u8, u64, TrendDirection, Vec<String>) =
        match curated {
            Some(entry) => (
                entry.competition_index,
                entry.monthly_searches,
                entry.direction,
                entry.related.iter().map(ToString::to_string).collect(),
            ),
            None => (
                rng.random_range(40..=90),
                rng.random_range(5_000..=50_000),
                *DIRECTIONS.choose(rng).unwrap_or(&TrendDirection::Flat),
                tables::ANALYSIS_SUFFIXES
                    .iter()
                    .map(|s| format!("{seed}{s}"))
                    .collect(),
            ),
        };

    let competition = Competition::from_index(competition_index);
    let related_keywords = rank_candidates(seed, related, 1_000..=15_000, rng);
    let daily = monthly / 30;
    let analysis = KeywordAnalysis {
        keyword: seed.to_string(),
        competition,
        competition_index: Some(competition_index),
        monthly_searches: monthly,
        trend_direction: direction,
        related_keywords,
        search_volume_stats: SearchVolumeStats {
            daily_searches: daily,
            weekly_searches: monthly / 4,
            monthly_searches: monthly,
            volume_level: monthly_volume_level(monthly),
            competition,
            trend_direction: direction,
            growth_rate: format!("{}%", rng.random_range(5..=25)),
            seasonality: Seasonality::YearRound,
        },
        summary: AnalysisSummary {
            avg_monthly_search: monthly,
            avg_click_count: 0,
            avg_click_price: 0,
        },
        rows: Vec::new(),
        insights: analysis_insights(seed, direction, monthly, competition),
    };

    if curated.is_some() {
        Sourced::curated(analysis)
    } else {
        Sourced::synthesized(analysis)
    }
}

/// Keyword ideas built from fixed suffixes and prefixes. Half of `count`
/// comes from each list.
pub fn keyword_ideas<R: Rng + ?Sized>(seed: &str, count: usize, rng: &mut R) -> Vec<KeywordIdea> {
    let half = count / 2;
    let mut ideas = Vec::with_capacity(count);

    for suffix in tables::IDEA_SUFFIXES.iter().take(half) {
        ideas.push(KeywordIdea {
            keyword: format!("{seed}{suffix}"),
            relevance: rng.random_range(70..=95),
            monthly_volume: rng.random_range(1_000..=20_000),
            competition: Competition::from_index(rng.random_range(40..=90)),
        });
    }
    for prefix in tables::IDEA_PREFIXES.iter().take(half) {
        ideas.push(KeywordIdea {
            keyword: format!("{prefix}{seed}"),
            relevance: rng.random_range(60..=85),
            monthly_volume: rng.random_range(500..=15_000),
            competition: Competition::from_index(rng.random_range(30..=80)),
        });
    }

    ideas.truncate(count);
    ideas
}

/// Search volume statistics for `seed`.
pub fn search_volume<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> Sourced<SearchVolumeStats> {
    if let Some(entry) = lookup(tables::SEARCH_VOLUME, seed) {
        return Sourced::curated(SearchVolumeStats {
            daily_searches: entry.daily,
            weekly_searches: entry.weekly,
            monthly_searches: entry.monthly,
            volume_level: daily_volume_level(entry.daily).0,
            competition: entry.competition,
            trend_direction: entry.direction,
            growth_rate: growth_rate(entry.daily),
            seasonality: entry.seasonality,
        });
    }

    let daily = rng.random_range(1_000..=5_000);
    Sourced::synthesized(SearchVolumeStats {
        daily_searches: daily,
        weekly_searches: daily * 7,
        monthly_searches: daily * 30,
        volume_level: daily_volume_level(daily).0,
        competition: *COMPETITIONS.choose(rng).unwrap_or(&Competition::Medium),
        trend_direction: *DIRECTIONS.choose(rng).unwrap_or(&TrendDirection::Flat),
        growth_rate: growth_rate(daily),
        seasonality: if rng.random_bool(0.5) {
            Seasonality::YearRound
        } else {
            Seasonality::Seasonal
        },
    })
}

/// Trend summary for `seed` over the default window.
#[must_use]
pub fn trend_summary(seed: &str) -> Sourced<TrendSummary> {
    let (found, (avg, max, direction)) = match lookup(tables::TREND_SUMMARY, seed) {
        Some(entry) => (true, *entry),
        None => (false, tables::DEFAULT_TREND_SUMMARY),
    };
    let summary = TrendSummary {
        keyword: seed.to_string(),
        avg_ratio: avg,
        max_ratio: max,
        direction,
        data_points: TREND_WINDOW_POINTS,
        popularity: popularity_level(avg),
    };
    if found {
        Sourced::curated(summary)
    } else {
        Sourced::synthesized(summary)
    }
}

/// Seven daily points ending at `today`, each within ten of a random base.
pub fn trend_chart<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<TrendPoint> {
    let base: i32 = rng.random_range(30..=80);
    (0..TREND_WINDOW_POINTS)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(i64::try_from(days_back).unwrap_or_default());
            let value = (base + rng.random_range(-10..=10)).clamp(0, 100);
            TrendPoint {
                date: date.format("%m/%d").to_string(),
                ratio: f64::from(value),
            }
        })
        .collect()
}

/// Shopping search results for `seed` built from the sample product table.
pub fn shopping_search<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> Sourced<ShoppingSearch> {
    let curated = lookup(tables::PRODUCTS, seed);
    let entries: Vec<(String, u64, String, String)> = match curated {
        Some(products) => products
            .iter()
            .map(|(title, price, brand, category)| {
                ((*title).to_string(), *price, (*brand).to_string(), (*category).to_string())
            })
            .collect(),
        None => tables::SYNTHESIZED_PRODUCTS
            .iter()
            .zip(1..)
            .map(|((price, brand), n)| {
                (
                    format!("{seed} 상품 {n}"),
                    *price,
                    (*brand).to_string(),
                    tables::SYNTHESIZED_CATEGORY.to_string(),
                )
            })
            .collect(),
    };

    let items: Vec<ShopItem> = entries
        .into_iter()
        .map(|(title, price, brand, category)| ShopItem {
            link: format!(
                "{}{}",
                tables::MOCK_SEARCH_URL,
                utf8_percent_encode(&title, NON_ALPHANUMERIC)
            ),
            image: tables::MOCK_IMAGE_URL.to_string(),
            lprice: price.to_string(),
            hprice: (price + 50_000).to_string(),
            mall_name: tables::MOCK_MALL_NAME.to_string(),
            product_id: rng.random_range(1_000_000..=9_999_999u32).to_string(),
            product_type: "1".to_string(),
            maker: brand.clone(),
            brand,
            category1: category,
            title,
            ..ShopItem::default()
        })
        .collect();

    let count = u32::try_from(items.len()).unwrap_or(u32::MAX);
    let search = ShoppingSearch {
        keyword: seed.to_string(),
        total: u64::from(count) * 100,
        start: 1,
        display: count,
        items,
    };
    if curated.is_some() {
        Sourced::curated(search)
    } else {
        Sourced::synthesized(search)
    }
}

/// A single placeholder post used when blog search is unavailable.
pub fn blog_search<R: Rng + ?Sized>(seed: &str, rng: &mut R) -> BlogSearch {
    BlogSearch {
        keyword: seed.to_string(),
        total: rng.random_range(1_000..=10_000),
        display: 1,
        blogs: vec![BlogPost {
            title: format!("{seed} 관련 정보"),
            description: format!("{seed}에 대한 상세한 정보를 제공합니다."),
            bloggername: String::new(),
            bloggerlink: String::new(),
            postdate: String::new(),
            link: String::new(),
        }],
    }
}

/// Ranked sample products for a keyword scan, `per_keyword` from each
/// keyword and at most `limit` overall.
pub fn scan_products<R: Rng + ?Sized>(
    keywords: &[&str],
    per_keyword: usize,
    limit: usize,
    category: &str,
    rng: &mut R,
) -> Vec<Product> {
    let mut products: Vec<Product> = keywords
        .iter()
        .flat_map(|keyword| {
            shopping_search(keyword, rng)
                .value
                .items
                .into_iter()
                .take(per_keyword)
                .map(|item| product_from_item(&item, category, keyword))
                .collect::<Vec<_>>()
        })
        .take(limit)
        .collect();
    assign_dense_ranks(&mut products);
    products
}

/// Converts a shopping hit into a stored product. `rank` is left at zero.
#[must_use]
pub fn product_from_item(item: &ShopItem, category: &str, keyword: &str) -> Product {
    Product {
        rank: 0,
        name: trendlens_core::strip_bold_markup(&item.title),
        price: if item.lprice.trim().is_empty() {
            trendlens_core::PRICE_UNAVAILABLE.to_string()
        } else {
            item.lprice.clone()
        },
        url: item.link.clone(),
        image_url: item.image.clone(),
        mall_name: item.mall_name.clone(),
        category: category.to_string(),
        keyword: Some(keyword.to_string()),
    }
}

#[cfg(test)]
#[path = "../fallback_test.rs"]
mod tests;
