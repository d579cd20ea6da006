//! Client for the `DataLab` search trend endpoint.

use chrono::{Duration, NaiveDate, Utc};
use reqwest::{Client, Url};
use trendlens_core::NaverCredentials;

use crate::error::NaverError;
use crate::http::{build_client, join, parse_base_url, read_json};
use crate::types::{DatalabKeywordGroup, DatalabRequest, DatalabResponse};

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/";
const TREND_PATH: &str = "v1/datalab/search";

/// Window used by [`DatalabClient::recent_trend`].
pub const RECENT_WINDOW_DAYS: i64 = 7;

pub struct DatalabClient {
    client: Client,
    credentials: NaverCredentials,
    base_url: Url,
}

impl DatalabClient {
    /// Creates a client pointed at the production `DataLab` API.
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

    /// Daily relative interest for `keywords` as one keyword group named
    /// after the first keyword, between `start` and `end` inclusive.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure or timeout.
    /// - [`NaverError::UnexpectedStatus`] on a non-2xx response.
    /// - [`NaverError::Deserialize`] if the body does not match.
    pub async fn trend(
        &self,
        keywords: &[&str],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DatalabResponse, NaverError> {
        let group_name = keywords.first().copied().unwrap_or_default().to_string();
        let request = DatalabRequest {
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            time_unit: "date",
            keyword_groups: vec![DatalabKeywordGroup {
                group_name,
                keywords: keywords.iter().map(ToString::to_string).collect(),
            }],
        };

        let url = join(&self.base_url, TREND_PATH)?;
        let response = self
            .client
            .post(url)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .json(&request)
            .send()
            .await?;

        read_json(response, &format!("datalab trend (keywords={keywords:?})")).await
    }

    /// Trend for a single keyword over the last [`RECENT_WINDOW_DAYS`] days
    /// ending today (UTC).
    ///
    /// # Errors
    ///
    /// Same as [`trend`](Self::trend).
    pub async fn recent_trend(&self, keyword: &str) -> Result<DatalabResponse, NaverError> {
        let (start, end) = recent_window(Utc::now().date_naive());
        self.trend(&[keyword], start, end).await
    }
}

fn recent_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(RECENT_WINDOW_DAYS), today)
}
