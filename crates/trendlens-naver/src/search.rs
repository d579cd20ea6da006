//! Client for the Naver Open API search endpoints (shopping, blog, news).

use reqwest::{Client, Url};
use trendlens_core::NaverCredentials;

use crate::error::NaverError;
use crate::http::{build_client, join, parse_base_url, read_json};
use crate::types::{DocumentItem, DocumentSearchResponse, ShopSearchResponse};

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/";

/// Upper bound the search API accepts for `display`.
pub const MAX_DISPLAY: u32 = 100;

/// Per-kind cap when blog and news results are combined.
pub const COMBINED_DISPLAY_PER_KIND: u32 = 5;

/// Document search endpoints that share the blog/news response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Blog,
    News,
}

impl DocumentKind {
    fn path(self) -> &'static str {
        match self {
            Self::Blog => "v1/search/blog.json",
            Self::News => "v1/search/news.json",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::News => "news",
        }
    }
}

/// Client for `openapi.naver.com` search.
///
/// Use [`SearchClient::new`] for production or [`SearchClient::with_base_url`]
/// to point at a mock server in tests.
pub struct SearchClient {
    client: Client,
    credentials: NaverCredentials,
    base_url: Url,
}

impl SearchClient {
    /// Creates a client pointed at the production search API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: &NaverCredentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, NaverError> {
        Self::with_base_url(credentials, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the client cannot be constructed, or
    /// [`NaverError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        credentials: &NaverCredentials,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NaverError> {
        Ok(Self {
            client: build_client(timeout_secs, user_agent)?,
            credentials: credentials.clone(),
            base_url: parse_base_url(base_url)?,
        })
    }

    /// Searches shopping listings by similarity. `display` is clamped to
    /// `1..=100`.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure or timeout.
    /// - [`NaverError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NaverError::Deserialize`] if the body does not match.
    pub async fn search_shop(
        &self,
        query: &str,
        display: u32,
    ) -> Result<ShopSearchResponse, NaverError> {
        let url = self.build_url("v1/search/shop.json", query, display)?;
        let response = self.get(url).await?;
        read_json(response, &format!("shop search (query={query})")).await
    }

    /// Searches blog posts or news articles.
    ///
    /// # Errors
    ///
    /// Same as [`search_shop`](Self::search_shop).
    pub async fn search_documents(
        &self,
        kind: DocumentKind,
        query: &str,
        display: u32,
    ) -> Result<DocumentSearchResponse, NaverError> {
        let url = self.build_url(kind.path(), query, display)?;
        let response = self.get(url).await?;
        read_json(
            response,
            &format!("{} search (query={query})", kind.as_str()),
        )
        .await
    }

    /// Runs blog and news search with at most five items each and merges
    /// them, blog first. Totals are summed.
    ///
    /// A kind that fails is logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns the last error only when both kinds fail.
    pub async fn search_blog_and_news(
        &self,
        query: &str,
        display: u32,
    ) -> Result<DocumentSearchResponse, NaverError> {
        let per_kind = display.clamp(1, COMBINED_DISPLAY_PER_KIND);
        let mut combined = DocumentSearchResponse {
            start: 1,
            ..DocumentSearchResponse::default()
        };
        let mut last_error = None;
        let mut any_ok = false;

        for kind in [DocumentKind::Blog, DocumentKind::News] {
            match self.search_documents(kind, query, per_kind).await {
                Ok(page) => {
                    any_ok = true;
                    combined.total = combined.total.saturating_add(page.total);
                    combined.items.extend(page.items);
                }
                Err(e) => {
                    tracing::warn!(kind = kind.as_str(), query, error = %e, "document search failed");
                    last_error = Some(e);
                }
            }
        }

        match (any_ok, last_error) {
            (false, Some(e)) => Err(e),
            _ => {
                combined.display = u32::try_from(combined.items.len()).unwrap_or(u32::MAX);
                Ok(combined)
            }
        }
    }

    /// Convenience for callers that only need the merged item list.
    ///
    /// # Errors
    ///
    /// Same as [`search_blog_and_news`](Self::search_blog_and_news).
    pub async fn blog_and_news_items(
        &self,
        query: &str,
        display: u32,
    ) -> Result<Vec<DocumentItem>, NaverError> {
        Ok(self.search_blog_and_news(query, display).await?.items)
    }

    fn build_url(&self, path: &str, query: &str, display: u32) -> Result<Url, NaverError> {
        let mut url = join(&self.base_url, path)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("display", &display.clamp(1, MAX_DISPLAY).to_string())
            .append_pair("start", "1")
            .append_pair("sort", "sim");
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, NaverError> {
        let response = self
            .client
            .get(url)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .send()
            .await?;
        Ok(response)
    }
}
