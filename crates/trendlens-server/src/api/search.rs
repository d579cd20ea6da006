use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;
use trendlens_keywords::{BlogSearch, ShoppingSearch};

use crate::middleware::RequestId;

use super::{require_keyword, respond, ApiError, ApiResponse, AppState, WithSource};

const DEFAULT_SHOPPING_DISPLAY: u32 = 20;
const DEFAULT_BLOG_DISPLAY: u32 = 10;

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub keyword: Option<String>,
    pub display: Option<u32>,
}

pub(super) async fn search_shopping(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<WithSource<ShoppingSearch>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let display = query.display.unwrap_or(DEFAULT_SHOPPING_DISPLAY);
    let result = state.keywords.shopping_search(&keyword, display).await;
    Ok(respond(req_id.0, WithSource::from_sourced(result, |r| r)))
}

pub(super) async fn search_blogs(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<WithSource<BlogSearch>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let display = query.display.unwrap_or(DEFAULT_BLOG_DISPLAY);
    let result = state.keywords.blog_search(&keyword, display).await;
    Ok(respond(req_id.0, WithSource::from_sourced(result, |r| r)))
}
