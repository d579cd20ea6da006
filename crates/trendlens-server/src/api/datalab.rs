use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Serialize;
use trendlens_core::{KeywordInsight, SearchVolumeStats, TrendPoint};
use trendlens_keywords::TrendAnalysis;

use crate::middleware::RequestId;

use super::keywords::KeywordQuery;
use super::{require_keyword, respond, ApiError, ApiResponse, AppState, WithSource};

#[derive(Debug, Serialize)]
pub(super) struct RelatedData {
    keyword: String,
    related_keywords: Vec<KeywordInsight>,
}

#[derive(Debug, Serialize)]
pub(super) struct ChartData {
    keyword: String,
    chart_data: Vec<TrendPoint>,
}

/// Trend summary for the last month plus related keywords, search volume,
/// and insight sentences.
pub(super) async fn trend_analysis(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<TrendAnalysis>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let trend = state.keywords.trend_analysis(&keyword).await;
    Ok(respond(req_id.0, WithSource::from_sourced(trend, |t| t)))
}

pub(super) async fn related_keywords(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<RelatedData>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let related = state.keywords.related_keywords(&keyword).await;
    Ok(respond(
        req_id.0,
        WithSource::from_sourced(related, |related_keywords| RelatedData {
            keyword,
            related_keywords,
        }),
    ))
}

pub(super) async fn search_volume(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<SearchVolumeStats>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let volume = state.keywords.search_volume(&keyword).await;
    Ok(respond(req_id.0, WithSource::from_sourced(volume, |v| v)))
}

/// Seven daily points ending today.
pub(super) async fn trend_chart(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<KeywordQuery>,
) -> Result<Json<ApiResponse<WithSource<ChartData>>>, ApiError> {
    let keyword = require_keyword(&req_id.0, query.keyword.as_deref())?;
    let chart = state.keywords.trend_chart(&keyword).await;
    Ok(respond(
        req_id.0,
        WithSource::from_sourced(chart, |chart| ChartData {
            keyword: chart.keyword,
            chart_data: chart.points,
        }),
    ))
}
