//! Live-first keyword and product lookups.
//!
//! Every operation tries the matching Naver client first and falls back to
//! [`crate::fallback`] when the client is missing, fails, or returns nothing
//! usable. Randomness is only drawn after the last `.await` of an operation
//! so the returned futures stay `Send`.

use chrono::{NaiveDate, Utc};
use trendlens_core::{
    assign_dense_ranks, category_keywords, AppConfig, Competition, CoreError, KeywordInsight,
    Product, SearchVolumeStats, Seasonality, TrendDirection, TrendPoint, TrendSummary,
    CATEGORY_GROUPS, CATEGORY_POPULAR, POPULAR_KEYWORDS,
};
use trendlens_naver::{
    DatalabClient, DatalabResponse, DocumentItem, DocumentKind, KeywordToolRow, NaverError,
    SearchAdClient, SearchClient, ShopItem,
};

use crate::extract::{extract_meaningful_keywords, extract_shopping_keywords};
use crate::fallback::{self, TREND_WINDOW_POINTS};
use crate::insights::{analysis_insights, trend_insights};
use crate::scorer::{
    competition_level, daily_volume_level, format_count, growth_rate, monthly_volume_level,
    parse_price, popularity_level, price_range, relevance, shopping_intent, shopping_score,
};
use crate::types::{
    AnalysisSummary, BlogPost, BlogSearch, KeywordAnalysis, KeywordIdea, ProductScan,
    ShoppingSearch, Sourced, TrendAnalysis, TrendChart,
};

pub const MAX_RELATED_KEYWORDS: usize = 10;
pub const MAX_SHOPPING_KEYWORDS: usize = 12;
pub const MAX_ANALYSIS_RELATED: usize = 8;
pub const FALLBACK_IDEA_COUNT: usize = 10;

const RELATED_SEARCH_DISPLAY: u32 = 20;
const SHOPPING_RELATED_DISPLAY: u32 = 30;
const VOLUME_SEARCH_DISPLAY: u32 = 10;

/// `(keywords per scan, results per keyword, overall cap)`.
pub const POPULAR_SCAN: (usize, u32, usize) = (20, 5, 100);
pub const GROUP_SCAN: (usize, u32, usize) = (5, 4, 50);
pub const CATEGORY_SCAN: (usize, u32, usize) = (5, 8, 40);

/// Keyword, trend, and product lookups over optional Naver clients.
///
/// A `None` client means its credentials were not configured; every
/// operation on it goes straight to the fallback tables.
pub struct KeywordService {
    search: Option<SearchClient>,
    datalab: Option<DatalabClient>,
    searchad: Option<SearchAdClient>,
}

impl KeywordService {
    #[must_use]
    pub fn new(
        search: Option<SearchClient>,
        datalab: Option<DatalabClient>,
        searchad: Option<SearchAdClient>,
    ) -> Self {
        Self {
            search,
            datalab,
            searchad,
        }
    }

    /// A service with no live clients; every answer comes from the fallback
    /// tables.
    #[must_use]
    pub fn offline() -> Self {
        Self::new(None, None, None)
    }

    /// Builds one client per configured credential set.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, NaverError> {
        let timeout = config.http_timeout_secs;
        let ua = config.user_agent.as_str();

        let search = config
            .naver_search
            .as_ref()
            .map(|creds| SearchClient::new(creds, timeout, ua))
            .transpose()?;
        let datalab = config
            .naver_datalab
            .as_ref()
            .map(|creds| DatalabClient::new(creds, timeout, ua))
            .transpose()?;
        let searchad = config
            .searchad
            .as_ref()
            .map(|creds| SearchAdClient::new(creds, timeout, ua))
            .transpose()?;

        tracing::info!(
            search = search.is_some(),
            datalab = datalab.is_some(),
            searchad = searchad.is_some(),
            "keyword service clients configured"
        );
        Ok(Self::new(search, datalab, searchad))
    }

    #[must_use]
    pub fn has_search(&self) -> bool {
        self.search.is_some()
    }

    // -----------------------------------------------------------------------
    // Keyword tool
    // -----------------------------------------------------------------------

    /// Competition, volume, and related keywords for `seed` from the search-ad
    /// keyword tool.
    pub async fn keyword_analysis(&self, seed: &str) -> Sourced<KeywordAnalysis> {
        if let Some(rows) = self.keyword_tool_rows(seed, true).await {
            return Sourced::live(analysis_from_rows(seed, rows));
        }
        fallback::keyword_analysis(seed, &mut rand::rng())
    }

    /// Keyword ideas for `seed`.
    pub async fn keyword_ideas(&self, seed: &str, show_detail: bool) -> Sourced<Vec<KeywordIdea>> {
        if let Some(rows) = self.keyword_tool_rows(seed, show_detail).await {
            let ideas = rows
                .iter()
                .map(|row| KeywordIdea {
                    keyword: row.rel_keyword.clone(),
                    relevance: relevance(&row.rel_keyword, seed),
                    monthly_volume: to_count(row.monthly_volume()),
                    competition: Competition::from_comp_idx(&row.comp_idx),
                })
                .collect();
            return Sourced::live(ideas);
        }
        Sourced::synthesized(fallback::keyword_ideas(
            seed,
            FALLBACK_IDEA_COUNT,
            &mut rand::rng(),
        ))
    }

    async fn keyword_tool_rows(&self, seed: &str, show_detail: bool) -> Option<Vec<KeywordToolRow>> {
        let client = self.searchad.as_ref()?;
        match client.keyword_tool(seed, show_detail).await {
            Ok(response) if !response.keyword_list.is_empty() => Some(response.keyword_list),
            Ok(_) => {
                tracing::warn!(keyword = %seed, "keyword tool returned no rows");
                None
            }
            Err(e) => {
                tracing::warn!(keyword = %seed, error = %e, "keyword tool request failed");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search-derived keywords
    // -----------------------------------------------------------------------

    /// Up to [`MAX_RELATED_KEYWORDS`] keywords mined from blog and news hits.
    pub async fn related_keywords(&self, seed: &str) -> Sourced<Vec<KeywordInsight>> {
        if let Some(items) = self.document_items(seed).await {
            let related = related_from_documents(seed, &items, &mut rand::rng());
            if !related.is_empty() {
                return Sourced::live(related);
            }
            tracing::warn!(keyword = %seed, "no related keywords extracted from search results");
        }
        fallback::related_keywords(seed, &mut rand::rng()).map(|mut related| {
            related.truncate(MAX_RELATED_KEYWORDS);
            related
        })
    }

    /// Up to [`MAX_SHOPPING_KEYWORDS`] shopping-oriented keywords mined from
    /// shop listings, highest shopping score first.
    pub async fn shopping_related(&self, seed: &str) -> Sourced<Vec<KeywordInsight>> {
        if let Some(items) = self.shop_items(seed, SHOPPING_RELATED_DISPLAY).await {
            let related = shopping_from_items(seed, &items, &mut rand::rng());
            if !related.is_empty() {
                return Sourced::live(related);
            }
            tracing::warn!(keyword = %seed, "no shopping keywords extracted from listings");
        }
        fallback::shopping_keywords(seed, &mut rand::rng()).map(|mut related| {
            related.truncate(MAX_SHOPPING_KEYWORDS);
            related
        })
    }

    /// Search volume estimated from the combined blog and news hit count.
    pub async fn search_volume(&self, seed: &str) -> Sourced<SearchVolumeStats> {
        if let Some(client) = &self.search {
            match client.search_blog_and_news(seed, VOLUME_SEARCH_DISPLAY).await {
                Ok(page) => return Sourced::live(volume_from_total(page.total)),
                Err(e) => {
                    tracing::warn!(keyword = %seed, error = %e, "search volume lookup failed");
                }
            }
        }
        fallback::search_volume(seed, &mut rand::rng())
    }

    // -----------------------------------------------------------------------
    // DataLab
    // -----------------------------------------------------------------------

    /// Daily points for the last week.
    pub async fn trend_chart(&self, seed: &str) -> Sourced<TrendChart> {
        let points = match self.recent_trend(seed).await {
            Some(response) => Sourced::live(chart_points(&response)),
            None => Sourced::synthesized(fallback::trend_chart(
                Utc::now().date_naive(),
                &mut rand::rng(),
            )),
        };
        points.map(|points| TrendChart {
            keyword: seed.to_string(),
            points,
        })
    }

    /// Trend summary plus related keywords, search volume, and insight
    /// sentences. The source reflects the trend summary only.
    pub async fn trend_analysis(&self, seed: &str) -> Sourced<TrendAnalysis> {
        let summary = match self.recent_trend(seed).await {
            Some(response) => Sourced::live(summarize_trend(seed, &response)),
            None => fallback::trend_summary(seed),
        };
        let related = self.related_keywords(seed).await.value;
        let volume = self.search_volume(seed).await.value;

        summary.map(|summary| TrendAnalysis {
            insights: trend_insights(seed, &summary, &related, &volume),
            summary,
            related_keywords: related,
            search_volume_stats: volume,
        })
    }

    async fn recent_trend(&self, seed: &str) -> Option<DatalabResponse> {
        let client = self.datalab.as_ref()?;
        match client.recent_trend(seed).await {
            Ok(response) if !response.first_series().is_empty() => Some(response),
            Ok(_) => {
                tracing::warn!(keyword = %seed, "datalab returned an empty series");
                None
            }
            Err(e) => {
                tracing::warn!(keyword = %seed, error = %e, "datalab trend request failed");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Search passthroughs
    // -----------------------------------------------------------------------

    pub async fn shopping_search(&self, seed: &str, display: u32) -> Sourced<ShoppingSearch> {
        if let Some(client) = &self.search {
            match client.search_shop(seed, display).await {
                Ok(page) if !page.items.is_empty() => {
                    return Sourced::live(ShoppingSearch {
                        keyword: seed.to_string(),
                        total: page.total,
                        start: page.start,
                        display: page.display,
                        items: page.items,
                    });
                }
                Ok(_) => tracing::warn!(keyword = %seed, "shop search returned no items"),
                Err(e) => tracing::warn!(keyword = %seed, error = %e, "shop search failed"),
            }
        }
        fallback::shopping_search(seed, &mut rand::rng())
    }

    /// Blog posts for `seed` with highlight markup removed.
    pub async fn blog_search(&self, seed: &str, display: u32) -> Sourced<BlogSearch> {
        if let Some(client) = &self.search {
            match client.search_documents(DocumentKind::Blog, seed, display).await {
                Ok(page) if !page.items.is_empty() => {
                    let blogs: Vec<BlogPost> = page.items.iter().map(blog_post).collect();
                    return Sourced::live(BlogSearch {
                        keyword: seed.to_string(),
                        total: page.total,
                        display: blogs.len(),
                        blogs,
                    });
                }
                Ok(_) => tracing::warn!(keyword = %seed, "blog search returned no items"),
                Err(e) => tracing::warn!(keyword = %seed, error = %e, "blog search failed"),
            }
        }
        Sourced::synthesized(fallback::blog_search(seed, &mut rand::rng()))
    }

    // -----------------------------------------------------------------------
    // Product scans
    // -----------------------------------------------------------------------

    /// Shop results for the popular keyword list, stored under
    /// [`CATEGORY_POPULAR`].
    pub async fn popular_scan(&self) -> Sourced<ProductScan> {
        let (keywords, per_keyword, limit) = POPULAR_SCAN;
        let jobs: Vec<(&str, &str)> = POPULAR_KEYWORDS
            .iter()
            .take(keywords)
            .map(|k| (*k, CATEGORY_POPULAR))
            .collect();
        self.scan(&jobs, per_keyword, limit).await
    }

    /// Shop results for every category group, each product tagged with its
    /// group name.
    pub async fn group_scan(&self) -> Sourced<ProductScan> {
        let (keywords, per_keyword, limit) = GROUP_SCAN;
        let jobs: Vec<(&str, &str)> = CATEGORY_GROUPS
            .iter()
            .flat_map(|group| {
                group
                    .keywords
                    .iter()
                    .take(keywords)
                    .map(move |k| (*k, group.name))
            })
            .collect();
        self.scan(&jobs, per_keyword, limit).await
    }

    /// Shop results for one category group.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnsupportedCategory`] for an unknown category.
    pub async fn category_scan(&self, category: &str) -> Result<Sourced<ProductScan>, CoreError> {
        let (keywords, per_keyword, limit) = CATEGORY_SCAN;
        let jobs: Vec<(&str, &str)> = category_keywords(category)?
            .iter()
            .take(keywords)
            .map(|k| (*k, category))
            .collect();
        Ok(self.scan(&jobs, per_keyword, limit).await)
    }

    /// Searches each `(keyword, category)` job in order until `limit`
    /// products are collected. A failing keyword is logged and skipped.
    async fn scan(&self, jobs: &[(&str, &str)], per_keyword: u32, limit: usize) -> Sourced<ProductScan> {
        let mut products: Vec<Product> = Vec::new();

        if let Some(client) = &self.search {
            for (keyword, category) in jobs {
                if products.len() >= limit {
                    break;
                }
                match client.search_shop(keyword, per_keyword).await {
                    Ok(page) => products.extend(
                        page.items
                            .iter()
                            .map(|item| fallback::product_from_item(item, category, keyword)),
                    ),
                    Err(e) => {
                        tracing::warn!(keyword = %keyword, error = %e, "scan search failed; skipping keyword");
                    }
                }
            }
        }

        if !products.is_empty() {
            products.truncate(limit);
            assign_dense_ranks(&mut products);
            tracing::info!(count = products.len(), "product scan complete");
            return Sourced::live(ProductScan::new(products));
        }

        let per_keyword = usize::try_from(per_keyword).unwrap_or(usize::MAX);
        let mut rng = rand::rng();
        for (keyword, category) in jobs {
            products.extend(fallback::scan_products(
                &[*keyword],
                per_keyword,
                per_keyword,
                category,
                &mut rng,
            ));
        }
        products.truncate(limit);
        assign_dense_ranks(&mut products);
        Sourced::synthesized(ProductScan::new(products))
    }

    // -----------------------------------------------------------------------
    // helpers
    // -----------------------------------------------------------------------

    async fn document_items(&self, seed: &str) -> Option<Vec<DocumentItem>> {
        let client = self.search.as_ref()?;
        match client.blog_and_news_items(seed, RELATED_SEARCH_DISPLAY).await {
            Ok(items) if !items.is_empty() => Some(items),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(keyword = %seed, error = %e, "document search failed");
                None
            }
        }
    }

    async fn shop_items(&self, seed: &str, display: u32) -> Option<Vec<ShopItem>> {
        let client = self.search.as_ref()?;
        match client.search_shop(seed, display).await {
            Ok(page) if !page.items.is_empty() => Some(page.items),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(keyword = %seed, error = %e, "shop search failed");
                None
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

#[allow(clippy::cast_precision_loss)]
fn average(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Builds an analysis from keyword-tool rows. The row for `seed` itself, or
/// the first row, supplies the headline figures.
fn analysis_from_rows(seed: &str, rows: Vec<KeywordToolRow>) -> KeywordAnalysis {
    let head = rows
        .iter()
        .find(|row| row.rel_keyword == seed)
        .or_else(|| rows.first());
    let monthly = head.map_or(0, |row| to_count(row.monthly_volume()));
    let competition = head.map_or(Competition::Medium, |row| {
        Competition::from_comp_idx(&row.comp_idx)
    });

    let mut related: Vec<KeywordInsight> = rows
        .iter()
        .filter(|row| row.rel_keyword != seed)
        .take(MAX_ANALYSIS_RELATED)
        .map(|row| {
            KeywordInsight::basic(
                row.rel_keyword.clone(),
                relevance(&row.rel_keyword, seed),
                format_count(to_count(row.monthly_volume())),
                Competition::from_comp_idx(&row.comp_idx),
            )
        })
        .collect();
    related.sort_by(|a, b| b.relevance.cmp(&a.relevance));

    let summary = AnalysisSummary {
        avg_monthly_search: to_count(average(rows.iter().map(KeywordToolRow::monthly_volume))),
        avg_click_count: to_count(average(rows.iter().map(|r| r.avg_click_count))),
        avg_click_price: to_count(average(rows.iter().map(|r| r.avg_click_price))),
    };

    let direction = TrendDirection::Flat;
    let daily = monthly / 30;
    KeywordAnalysis {
        keyword: seed.to_string(),
        competition,
        competition_index: None,
        monthly_searches: monthly,
        trend_direction: direction,
        related_keywords: related,
        search_volume_stats: SearchVolumeStats {
            daily_searches: daily,
            weekly_searches: monthly / 4,
            monthly_searches: monthly,
            volume_level: monthly_volume_level(monthly),
            competition,
            trend_direction: direction,
            growth_rate: growth_rate(daily),
            seasonality: Seasonality::YearRound,
        },
        summary,
        insights: analysis_insights(seed, direction, monthly, competition),
        rows,
    }
}

fn related_from_documents<R: rand::Rng + ?Sized>(
    seed: &str,
    items: &[DocumentItem],
    rng: &mut R,
) -> Vec<KeywordInsight> {
    let mut seen = std::collections::HashSet::new();
    let mut related: Vec<KeywordInsight> = Vec::new();

    for item in items {
        let text = format!(
            "{} {}",
            trendlens_core::strip_bold_markup(&item.title),
            trendlens_core::strip_bold_markup(&item.description)
        );
        for keyword in extract_meaningful_keywords(&text, seed) {
            if keyword == seed || keyword.chars().count() <= 1 || !seen.insert(keyword.clone()) {
                continue;
            }
            related.push(KeywordInsight::basic(
                keyword.clone(),
                relevance(&keyword, seed),
                format_count(rng.random_range(1_000..=10_000)),
                competition_level(&keyword),
            ));
        }
    }

    related.sort_by(|a, b| b.relevance.cmp(&a.relevance));
    related.truncate(MAX_RELATED_KEYWORDS);
    related
}

fn shopping_from_items<R: rand::Rng + ?Sized>(
    seed: &str,
    items: &[ShopItem],
    rng: &mut R,
) -> Vec<KeywordInsight> {
    let mut seen = std::collections::HashSet::new();
    let mut related: Vec<KeywordInsight> = Vec::new();

    for item in items {
        let title = trendlens_core::strip_bold_markup(&item.title);
        let sources = [title.as_str(), item.brand.as_str(), item.maker.as_str()]
            .into_iter()
            .chain(item.categories());
        let category = if item.category1.is_empty() {
            "기타".to_string()
        } else {
            item.category1.clone()
        };

        for source in sources.filter(|s| !s.is_empty()) {
            for keyword in extract_shopping_keywords(source) {
                if keyword == seed || keyword.chars().count() <= 1 || !seen.insert(keyword.clone()) {
                    continue;
                }
                related.push(KeywordInsight {
                    relevance: relevance(&keyword, seed),
                    search_volume: format_count(rng.random_range(1_000..=20_000)),
                    competition: competition_level(&keyword),
                    price_range: Some(price_range(parse_price(&item.lprice)).to_string()),
                    category: Some(category.clone()),
                    intent: Some(shopping_intent(&keyword)),
                    shopping_score: Some(shopping_score(&keyword)),
                    keyword,
                });
            }
        }
    }

    related.sort_by(|a, b| b.shopping_score.cmp(&a.shopping_score));
    related.truncate(MAX_SHOPPING_KEYWORDS);
    related
}

/// Volume statistics from a search hit count: ten daily searches per hit,
/// never below one thousand.
fn volume_from_total(total: u64) -> SearchVolumeStats {
    let daily = total.saturating_mul(10).max(1_000);
    let (volume_level, competition) = daily_volume_level(daily);
    SearchVolumeStats {
        daily_searches: daily,
        weekly_searches: daily.saturating_mul(7),
        monthly_searches: daily.saturating_mul(30),
        volume_level,
        competition,
        trend_direction: if daily > 10_000 {
            TrendDirection::Rising
        } else {
            TrendDirection::Flat
        },
        growth_rate: growth_rate(daily),
        seasonality: Seasonality::YearRound,
    }
}

/// Averages the last week of the first series; direction compares its first
/// and last points.
fn summarize_trend(seed: &str, response: &DatalabResponse) -> TrendSummary {
    let series = response.first_series();
    let window = &series[series.len().saturating_sub(TREND_WINDOW_POINTS)..];
    let avg = average(window.iter().map(|p| p.ratio));
    let max = series.iter().map(|p| p.ratio).fold(0.0, f64::max);
    let direction = match (series.first(), series.last()) {
        (Some(first), Some(last)) => TrendDirection::between(first.ratio, last.ratio),
        _ => TrendDirection::Flat,
    };

    TrendSummary {
        keyword: seed.to_string(),
        avg_ratio: (avg * 10.0).round() / 10.0,
        max_ratio: max,
        direction,
        data_points: series.len(),
        popularity: popularity_level(avg),
    }
}

fn chart_points(response: &DatalabResponse) -> Vec<TrendPoint> {
    response
        .first_series()
        .iter()
        .map(|point| TrendPoint {
            date: NaiveDate::parse_from_str(&point.period, "%Y-%m-%d")
                .map_or_else(|_| point.period.clone(), |d| d.format("%m/%d").to_string()),
            ratio: point.ratio.clamp(0.0, 100.0),
        })
        .collect()
}

fn blog_post(item: &DocumentItem) -> BlogPost {
    BlogPost {
        title: trendlens_core::strip_bold_markup(&item.title),
        description: trendlens_core::strip_bold_markup(&item.description),
        bloggername: item.bloggername.clone(),
        bloggerlink: item.bloggerlink.clone(),
        postdate: item.postdate.clone(),
        link: item.link.clone(),
    }
}

#[cfg(test)]
mod tests {
    use trendlens_naver::{DatalabPoint, DatalabResult};

    use super::*;

    fn row(keyword: &str, pc: f64, mobile: f64, comp: &str) -> KeywordToolRow {
        KeywordToolRow {
            rel_keyword: keyword.to_string(),
            monthly_pc_qty: pc,
            monthly_mobile_qty: mobile,
            comp_idx: comp.to_string(),
            avg_click_count: 10.0,
            avg_click_price: 300.0,
            ..KeywordToolRow::default()
        }
    }

    fn series(ratios: &[f64]) -> DatalabResponse {
        DatalabResponse {
            results: vec![DatalabResult {
                data: ratios
                    .iter()
                    .enumerate()
                    .map(|(i, r)| DatalabPoint {
                        period: format!("2024-03-{:02}", i + 1),
                        ratio: *r,
                    })
                    .collect(),
                ..DatalabResult::default()
            }],
            ..DatalabResponse::default()
        }
    }

    #[test]
    fn analysis_prefers_seed_row() {
        let rows = vec![
            row("노트북추천", 1_000.0, 2_000.0, "중간"),
            row("노트북", 30_000.0, 60_000.0, "높음"),
            row("맥북", 5_000.0, 5_000.0, "낮음"),
        ];
        let analysis = analysis_from_rows("노트북", rows);
        assert_eq!(analysis.monthly_searches, 90_000);
        assert_eq!(analysis.competition, Competition::High);
        assert_eq!(analysis.competition_index, None);
        assert_eq!(analysis.related_keywords.len(), 2);
        assert_eq!(analysis.related_keywords[0].keyword, "노트북추천");
        assert_eq!(analysis.summary.avg_click_price, 300);
        assert_eq!(analysis.rows.len(), 3);
    }

    #[test]
    fn volume_has_floor_and_levels() {
        let low = volume_from_total(3);
        assert_eq!(low.daily_searches, 1_000);
        assert_eq!(low.trend_direction, TrendDirection::Flat);

        let high = volume_from_total(6_000);
        assert_eq!(high.daily_searches, 60_000);
        assert_eq!(high.monthly_searches, 1_800_000);
        assert_eq!(high.competition, Competition::High);
        assert_eq!(high.trend_direction, TrendDirection::Rising);
        assert_eq!(high.growth_rate, "50%");
    }

    #[test]
    fn volume_saturates_on_huge_totals() {
        let stats = volume_from_total(u64::MAX / 20);
        assert_eq!(stats.daily_searches, (u64::MAX / 20) * 10);
        assert_eq!(stats.weekly_searches, u64::MAX);
        assert_eq!(stats.monthly_searches, u64::MAX);
        assert_eq!(stats.competition, Competition::High);
        assert_eq!(stats.growth_rate, "50%");

        let capped = volume_from_total(u64::MAX);
        assert_eq!(capped.daily_searches, u64::MAX);
        assert_eq!(capped.monthly_searches, u64::MAX);
    }

    #[test]
    fn trend_summary_uses_last_week() {
        let response = series(&[10.0, 100.0, 20.0, 20.0, 20.0, 20.0, 20.0, 20.0, 90.0]);
        let summary = summarize_trend("수건", &response);
        assert!((summary.max_ratio - 100.0).abs() < f64::EPSILON);
        assert_eq!(summary.data_points, 9);
        assert_eq!(summary.direction, TrendDirection::Rising);
        assert!((summary.avg_ratio - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn chart_dates_are_month_day() {
        let points = chart_points(&series(&[12.5, 130.0]));
        assert_eq!(points[0].date, "03/01");
        assert!((points[1].ratio - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn count_conversion_rejects_nonsense() {
        assert_eq!(to_count(f64::NAN), 0);
        assert_eq!(to_count(-5.0), 0);
        assert_eq!(to_count(1_499.6), 1_500);
    }
}
