use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::error::NaverError;

pub(crate) fn build_client(timeout_secs: u64, user_agent: &str) -> Result<Client, NaverError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Parses `base_url` so that [`Url::join`] appends to its path instead of
/// replacing the last segment.
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, NaverError> {
    let normalised = format!("{}/", base_url.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| NaverError::InvalidBaseUrl {
        base_url: base_url.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn join(base: &Url, path: &str) -> Result<Url, NaverError> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| NaverError::InvalidBaseUrl {
            base_url: base.to_string(),
            reason: e.to_string(),
        })
}

/// Checks for a 2xx status and decodes the body as `T`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, NaverError> {
    let status = response.status();
    if !status.is_success() {
        return Err(NaverError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| NaverError::Deserialize {
        context: context.to_string(),
        source: e,
    })
}
