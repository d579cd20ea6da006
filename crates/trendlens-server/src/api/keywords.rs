use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use trendlens_core::KeywordInsight;
use trendlens_keywords::{KeywordAnalysis, KeywordIdea};

use crate::middleware::RequestId;

use super::{require_keyword, respond, ApiError, ApiResponse, AppState, WithSource};

#[derive(Debug, Deserialize)]
pub(super) struct KeywordQuery {
    pub keyword: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct IdeasQuery {
    pub keyword: Option<String>,
    /// `"0"` turns detail off; anything else, or nothing, keeps it on.
    pub show_detail: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct IdeasData {
    keyword: String,
    count: usize,
    ideas: Vec<KeywordIdea>,
}

#[derive(Debug, Serialize)]
pub(super) struct RelatedData {
    related_keywords: Vec<KeywordInsight>,
}

fn show_detail(raw: Option<&str>) -> bool {
    !matches!(raw.map(str::trim), Some("0"))
}

pub(super) async fn keyword_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<KeywordAnalysis>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let analysis = state.keywords.keyword_analysis(&keyword).await;
    Ok(respond(req_id.0, WithSource::from_sourced(analysis, |a| a)))
}

pub(super) async fn keyword_ideas(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<IdeasQuery>,
) -> Result<Json<ApiResponse<WithSource<IdeasData>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let ideas = state
        .keywords
        .keyword_ideas(&keyword, show_detail(query.show_detail.as_deref()))
        .await;
    Ok(respond(
        req_id.0,
        WithSource::from_sourced(ideas, |ideas| IdeasData {
            keyword,
            count: ideas.len(),
            ideas,
        }),
    ))
}

/// Shopping-oriented keywords, highest shopping score first.
pub(super) async fn shopping_related(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<RelatedData>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let related = state.keywords.shopping_related(&keyword).await;
    Ok(respond(
        req_id.0,
        WithSource::from_sourced(related, |related_keywords| RelatedData { related_keywords }),
    ))
}
