use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use trendlens_core::{category_names, Product, CATEGORY_BEST100, CATEGORY_POPULAR};
use trendlens_db::StorageStats;

use crate::middleware::RequestId;
use crate::refresh::{persist_category, refresh_best100 as run_refresh};

use super::{map_db_error, respond, ApiError, ApiResponse, AppState, WithSource};

#[derive(Debug, Deserialize)]
pub(super) struct ItemsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ItemsData {
    items: Vec<Product>,
    count: usize,
}

impl ItemsData {
    fn new(items: Vec<Product>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct DebugData {
    storage_available: bool,
    #[serde(flatten)]
    stats: Option<StorageStats>,
}

#[derive(Debug, Serialize)]
pub(super) struct ScanData {
    items: Vec<Product>,
    count: usize,
    persisted: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct GroupScanData {
    items: Vec<Product>,
    count: usize,
    categories: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(super) struct CategoryScanData {
    items: Vec<Product>,
    count: usize,
    category: String,
}

/// Stored products of one category, `전체` by default.
pub(super) async fn list_items(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<ApiResponse<ItemsData>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(CATEGORY_BEST100);

    let pool = state
        .storage
        .require()
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    let rows = trendlens_db::list_products_by_category(pool, category)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    let items = rows
        .into_iter()
        .map(trendlens_db::ProductRow::into_product)
        .collect();
    Ok(respond(req_id.0, ItemsData::new(items)))
}

pub(super) async fn debug_info(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<DebugData>>, ApiError> {
    let Some(pool) = state.storage.pool() else {
        return Ok(respond(
            req_id.0,
            DebugData {
                storage_available: false,
                stats: None,
            },
        ));
    };

    let stats = trendlens_db::storage_stats(pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;
    Ok(respond(
        req_id.0,
        DebugData {
            storage_available: true,
            stats: Some(stats),
        },
    ))
}

/// Scrapes the best-100 page now.
pub(super) async fn refresh_best100(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ScanData>>, ApiError> {
    let outcome = run_refresh(&state.scraper, &state.storage)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "best-100 refresh failed");
            ApiError::new(req_id.0.clone(), "upstream_error", e.to_string())
        })?;

    Ok(respond(
        req_id.0,
        ScanData {
            count: outcome.products.len(),
            items: outcome.products,
            persisted: outcome.persisted,
        },
    ))
}

/// Popularity scan over the fixed keyword list. Only live results replace
/// the stored `인기상품` batch.
pub(super) async fn crawl_popular(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<WithSource<ScanData>>> {
    let scan = state.keywords.popular_scan().await;
    let persisted = if scan.source.is_live() {
        persist_category(&state.storage, CATEGORY_POPULAR, &scan.value.items).await
    } else {
        false
    };

    respond(
        req_id.0,
        WithSource::from_sourced(scan, |scan| ScanData {
            count: scan.count,
            items: scan.items,
            persisted,
        }),
    )
}

pub(super) async fn popular_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<WithSource<GroupScanData>>> {
    let scan = state.keywords.group_scan().await;
    respond(
        req_id.0,
        WithSource::from_sourced(scan, |scan| GroupScanData {
            count: scan.count,
            items: scan.items,
            categories: category_names(),
        }),
    )
}

pub(super) async fn category_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(category): Path<String>,
) -> Result<Json<ApiResponse<WithSource<CategoryScanData>>>, ApiError> {
    let scan = state.keywords.category_scan(&category).await.map_err(|e| {
        tracing::debug!(error = %e, "rejected category");
        ApiError::new(
            req_id.0.clone(),
            "bad_request",
            format!("지원하지 않는 카테고리입니다: {category}"),
        )
    })?;

    Ok(respond(
        req_id.0,
        WithSource::from_sourced(scan, |scan| CategoryScanData {
            count: scan.count,
            items: scan.items,
            category,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use trendlens_db::Storage;
    use trendlens_scraper::Best100Scraper;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::build_app;
    use crate::api::tests::{get_json, offline_state};

    const PAGE: &str = r#"<html><body><ul>
      <li><a href="/p/1"><img src="/1.jpg" alt="무선 청소기 A"></a><span>99,000원</span></li>
      <li><a href="/p/2"><img src="/2.jpg" alt="에어프라이어 B"></a></li>
    </ul></body></html>"#;

    #[tokio::test]
    async fn items_without_storage_is_503() {
        let (status, json) = get_json(build_app(offline_state(), &[]), "/items").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"]["code"], "storage_unavailable");
    }

    #[tokio::test]
    async fn debug_without_storage_reports_unavailable() {
        let (status, json) = get_json(build_app(offline_state(), &[]), "/debug").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["storage_available"], false);
        assert!(json["data"].get("total").is_none());
    }

    #[tokio::test]
    async fn crawl_offline_is_not_persisted() {
        let (status, json) = get_json(build_app(offline_state(), &[]), "/crawl").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["source"], "synthesized");
        assert_eq!(json["data"]["persisted"], false);
        assert_eq!(json["data"]["items"][0]["rank"], 1);
        assert_eq!(json["data"]["items"][0]["category"], "인기상품");
    }

    #[tokio::test]
    async fn popular_products_lists_categories() {
        let (_, json) = get_json(build_app(offline_state(), &[]), "/api/popular-products").await;
        let categories = json["data"]["categories"].as_array().expect("categories");
        assert_eq!(categories.len(), 5);
        assert!(json["data"]["count"].as_u64().unwrap() <= 50);
    }

    #[tokio::test]
    async fn category_products_known_and_unknown() {
        let app = build_app(offline_state(), &[]);
        let uri = format!("/api/products/category/{}", "%EB%B7%B0%ED%8B%B0");
        let (status, json) = get_json(app.clone(), &uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["category"], "뷰티");
        assert!(json["data"]["count"].as_u64().unwrap() <= 40);

        let (status, json) = get_json(app, "/api/products/category/unknown").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"]["code"], "bad_request");
    }

    #[tokio::test]
    async fn refresh_scrapes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/best100"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let state = crate::api::AppState {
            scraper: Arc::new(
                Best100Scraper::new(5, "trendlens-test", &format!("{}/best100", server.uri()))
                    .expect("scraper"),
            ),
            ..offline_state()
        };
        let response = build_app(state, &[])
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/best100/refresh")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let json: serde_json::Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["persisted"], false);
        assert_eq!(json["data"]["items"][1]["name"], "에어프라이어 B");
    }

    #[tokio::test]
    async fn refresh_failure_is_bad_gateway() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/best100"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let state = crate::api::AppState {
            scraper: Arc::new(
                Best100Scraper::new(5, "trendlens-test", &format!("{}/best100", server.uri()))
                    .expect("scraper"),
            ),
            ..offline_state()
        };
        let response = build_app(state, &[])
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/best100/refresh")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[sqlx::test(migrations = "../../migrations")]
    async fn refresh_then_items_round_trip(pool: sqlx::PgPool) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/best100"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .mount(&server)
            .await;

        let state = crate::api::AppState {
            storage: Storage::Connected(pool),
            scraper: Arc::new(
                Best100Scraper::new(5, "trendlens-test", &format!("{}/best100", server.uri()))
                    .expect("scraper"),
            ),
            ..offline_state()
        };
        let app = build_app(state, &[]);
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/best100/refresh")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let (status, json) = get_json(app.clone(), "/items").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["count"], 2);
        assert_eq!(json["data"]["items"][0]["name"], "무선 청소기 A");
        assert_eq!(json["data"]["items"][0]["price"], "99,000원");

        let (_, json) = get_json(app, "/debug").await;
        assert_eq!(json["data"]["storage_available"], true);
        assert_eq!(json["data"]["total"], 2);
    }
}
