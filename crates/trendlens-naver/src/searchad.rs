//! Client for the search-ad keyword tool.
//!
//! The keyword tool has accepted several header schemes over time. Requests
//! walk [`AuthStrategy::ORDER`] and return the first success; when every
//! strategy fails the individual failures are reported together.

use chrono::Utc;
use reqwest::{Client, RequestBuilder, Url};
use trendlens_core::SearchAdCredentials;

use crate::error::NaverError;
use crate::http::{build_client, join, parse_base_url, read_json};
use crate::signature::sign;
use crate::types::KeywordToolResponse;

const DEFAULT_BASE_URL: &str = "https://api.searchad.naver.com/";
const KEYWORD_TOOL_URI: &str = "/keywordstool";

/// One way of authenticating a keyword-tool request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// HMAC signature with `X-Timestamp`, `X-API-KEY`, `X-Customer`, and
    /// `X-Signature`.
    Signed,
    /// `X-API-KEY` and `X-Customer` without a signature.
    ApiKeyHeader,
    /// `Authorization: Bearer <key>` and `X-Customer`.
    Bearer,
    /// `API-Key` and `X-Customer`.
    ApiKeyAlt,
}

impl AuthStrategy {
    pub const ORDER: [Self; 4] = [Self::Signed, Self::ApiKeyHeader, Self::Bearer, Self::ApiKeyAlt];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Signed => "signed",
            Self::ApiKeyHeader => "api_key_header",
            Self::Bearer => "bearer",
            Self::ApiKeyAlt => "api_key_alt",
        }
    }
}

pub struct SearchAdClient {
    client: Client,
    credentials: SearchAdCredentials,
    base_url: Url,
}

impl SearchAdClient {
    /// Creates a client pointed at the production search-ad API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        credentials: &SearchAdCredentials,
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
        credentials: &SearchAdCredentials,
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

    /// Fetches related keywords and their statistics for `hint`.
    ///
    /// # Errors
    ///
    /// - [`NaverError::AllStrategiesFailed`] when no strategy succeeds.
    /// - [`NaverError::InvalidBaseUrl`] if the endpoint URL cannot be built.
    pub async fn keyword_tool(
        &self,
        hint: &str,
        show_detail: bool,
    ) -> Result<KeywordToolResponse, NaverError> {
        let mut url = join(&self.base_url, KEYWORD_TOOL_URI)?;
        url.query_pairs_mut()
            .append_pair("hintKeywords", hint)
            .append_pair("showDetail", if show_detail { "1" } else { "0" });

        let mut attempts = Vec::new();
        for strategy in AuthStrategy::ORDER {
            match self.try_strategy(strategy, url.clone(), hint).await {
                Ok(response) => {
                    tracing::debug!(
                        strategy = strategy.as_str(),
                        rows = response.keyword_list.len(),
                        "keyword tool request succeeded"
                    );
                    return Ok(response);
                }
                Err(e) => {
                    tracing::warn!(strategy = strategy.as_str(), error = %e, "keyword tool strategy failed");
                    attempts.push(format!("{}: {e}", strategy.as_str()));
                }
            }
        }

        Err(NaverError::AllStrategiesFailed { attempts })
    }

    async fn try_strategy(
        &self,
        strategy: AuthStrategy,
        url: Url,
        hint: &str,
    ) -> Result<KeywordToolResponse, NaverError> {
        let request = self.authorize(self.client.get(url), strategy)?;
        let response = request.send().await?;
        read_json(response, &format!("keyword tool (hint={hint})")).await
    }

    fn authorize(
        &self,
        request: RequestBuilder,
        strategy: AuthStrategy,
    ) -> Result<RequestBuilder, NaverError> {
        let creds = &self.credentials;
        let request = request
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .header("X-Customer", &creds.customer_id);

        Ok(match strategy {
            AuthStrategy::Signed => {
                let timestamp = Utc::now().timestamp_millis();
                let signature = sign(&creds.secret_key, timestamp, "GET", KEYWORD_TOOL_URI, "")?;
                request
                    .header("X-Timestamp", timestamp.to_string())
                    .header("X-API-KEY", &creds.api_key)
                    .header("X-Signature", signature)
            }
            AuthStrategy::ApiKeyHeader => request.header("X-API-KEY", &creds.api_key),
            AuthStrategy::Bearer => request.header(
                reqwest::header::AUTHORIZATION,
                format!("Bearer {}", creds.api_key),
            ),
            AuthStrategy::ApiKeyAlt => request.header("API-Key", &creds.api_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_strategy_is_tried_first() {
        assert_eq!(AuthStrategy::ORDER[0], AuthStrategy::Signed);
        assert_eq!(AuthStrategy::ORDER.len(), 4);
    }

    #[test]
    fn strategy_names_are_distinct() {
        let mut names: Vec<_> = AuthStrategy::ORDER.iter().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
