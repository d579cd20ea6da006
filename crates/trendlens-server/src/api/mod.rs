mod datalab;
mod keywords;
mod products;
mod search;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use trendlens_core::DataSource;
use trendlens_db::Storage;
use trendlens_keywords::{KeywordService, Sourced};
use trendlens_scraper::Best100Scraper;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub keywords: Arc<KeywordService>,
    pub scraper: Arc<Best100Scraper>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// A payload tagged with the fallback stage that produced it.
#[derive(Debug, Serialize)]
pub(super) struct WithSource<T: Serialize> {
    pub source: DataSource,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> WithSource<T> {
    pub(super) fn from_sourced<U>(sourced: Sourced<U>, f: impl FnOnce(U) -> T) -> Self {
        Self {
            source: sourced.source,
            body: f(sourced.value),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    storage: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "storage_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn respond<T: Serialize>(request_id: String, data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(request_id),
    })
}

/// Trims `keyword` and rejects it when missing or blank.
pub(super) fn require_keyword(
    request_id: &str,
    keyword: Option<&str>,
) -> Result<String, ApiError> {
    match keyword.map(str::trim) {
        Some(k) if !k.is_empty() => Ok(k.to_string()),
        _ => Err(ApiError::new(
            request_id,
            "bad_request",
            "keyword query parameter is required",
        )),
    }
}

pub(super) fn map_db_error(request_id: String, error: &trendlens_db::DbError) -> ApiError {
    if matches!(error, trendlens_db::DbError::Unavailable) {
        return ApiError::new(request_id, "storage_unavailable", "storage is unavailable");
    }
    tracing::error!(error = %error, "database query failed");
    ApiError::new(request_id, "internal_error", "database query failed")
}

/// Allows the configured origins, or any origin when the list is empty or
/// contains `*`.
fn build_cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return layer.allow_origin(tower_http::cors::Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(allowed)
}

pub fn build_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/items", get(products::list_items))
        .route("/debug", get(products::debug_info))
        .route("/crawl", get(products::crawl_popular))
        .route("/api/best100/refresh", post(products::refresh_best100))
        .route("/api/popular-products", get(products::popular_products))
        .route(
            "/api/products/category/{category}",
            get(products::category_products),
        )
        .route("/api/keyword/analysis", get(keywords::keyword_analysis))
        .route("/api/keyword/ideas", get(keywords::keyword_ideas))
        .route(
            "/api/keyword/shopping-related",
            get(keywords::shopping_related),
        )
        .route("/api/datalab/trend", get(datalab::trend_analysis))
        .route(
            "/api/datalab/related-keywords",
            get(datalab::related_keywords),
        )
        .route("/api/datalab/search-volume", get(datalab::search_volume))
        .route("/api/datalab/trend-chart", get(datalab::trend_chart))
        .route("/api/search/shopping", get(search::search_shopping))
        .route("/api/search/blogs", get(search::search_blogs))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors(cors_origins))
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let storage_ok = match state.storage.pool() {
        Some(pool) => match trendlens_db::health_check(pool).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "health check: storage ping failed");
                false
            }
        },
        None => false,
    };

    let data = if storage_ok {
        HealthData {
            status: "ok",
            storage: "ok",
        }
    } else {
        HealthData {
            status: "degraded",
            storage: "unavailable",
        }
    };
    (StatusCode::OK, respond(req_id.0, data))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    pub(crate) fn offline_state() -> AppState {
        AppState {
            storage: Storage::Unavailable,
            keywords: Arc::new(KeywordService::offline()),
            scraper: Arc::new(
                Best100Scraper::new(1, "trendlens-test", "http://127.0.0.1:1/best100")
                    .expect("scraper"),
            ),
        }
    }

    pub(crate) async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }

    #[test]
    fn api_error_codes_map_to_status() {
        let cases = [
            ("bad_request", StatusCode::BAD_REQUEST),
            ("storage_unavailable", StatusCode::SERVICE_UNAVAILABLE),
            ("upstream_error", StatusCode::BAD_GATEWAY),
            ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in cases {
            assert_eq!(ApiError::new("req-1", code, "x").into_response().status(), status);
        }
    }

    #[test]
    fn blank_keyword_is_rejected() {
        assert!(require_keyword("r", None).is_err());
        assert!(require_keyword("r", Some("   ")).is_err());
        assert_eq!(require_keyword("r", Some(" 수건 ")).unwrap(), "수건");
    }

    #[tokio::test]
    async fn health_reports_unavailable_storage() {
        let app = build_app(offline_state(), &[]);
        let (status, json) = get_json(app, "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "degraded");
        assert_eq!(json["data"]["storage"], "unavailable");
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn request_id_header_is_echoed() {
        let app = build_app(offline_state(), &["http://localhost:3000".to_string()]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .header("x-request-id", "abc-123")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.headers()["x-request-id"], "abc-123");
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn health_reports_connected_storage(pool: sqlx::PgPool) {
        let state = AppState {
            storage: Storage::Connected(pool),
            ..offline_state()
        };
        let (status, json) = get_json(build_app(state, &[]), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");
    }
}
