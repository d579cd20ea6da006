//! Integration tests for `SearchClient` and `DatalabClient` against a local
//! `wiremock` server.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendlens_core::NaverCredentials;
use trendlens_naver::{DatalabClient, DocumentKind, NaverError, SearchClient};

fn credentials() -> NaverCredentials {
    NaverCredentials {
        client_id: "test-id".into(),
        client_secret: "test-secret".into(),
    }
}

fn test_client(server: &MockServer) -> SearchClient {
    SearchClient::with_base_url(&credentials(), 5, "trendlens-test", &server.uri())
        .expect("failed to build test client")
}

fn documents(prefix: &str, total: u64, count: usize) -> serde_json::Value {
    let items: Vec<_> = (0..count)
        .map(|i| json!({"title": format!("{prefix} {i}"), "link": format!("https://{prefix}.example/{i}")}))
        .collect();
    json!({"total": total, "start": 1, "display": count, "items": items})
}

// ---------------------------------------------------------------------------
// shop search
// ---------------------------------------------------------------------------

#[tokio::test]
async fn shop_search_sends_credentials_and_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .and(query_param("query", "노트북"))
        .and(query_param("display", "30"))
        .and(query_param("sort", "sim"))
        .and(header("X-Naver-Client-Id", "test-id"))
        .and(header("X-Naver-Client-Secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1234,
            "start": 1,
            "display": 1,
            "items": [{
                "title": "<b>노트북</b> 15인치",
                "link": "https://shop.example/1",
                "lprice": "890000",
                "mallName": "테스트몰",
                "brand": "삼성",
                "category1": "디지털/가전"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server)
        .search_shop("노트북", 30)
        .await
        .expect("search succeeds");
    assert_eq!(page.total, 1234);
    assert_eq!(page.items[0].lprice, "890000");
    assert_eq!(page.items[0].mall_name, "테스트몰");
}

#[tokio::test]
async fn shop_search_maps_401_to_unexpected_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"errorCode": "024"})))
        .mount(&server)
        .await;

    let err = test_client(&server).search_shop("a", 10).await.unwrap_err();
    assert!(
        matches!(err, NaverError::UnexpectedStatus { status: 401, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn shop_search_reports_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/shop.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server).search_shop("a", 10).await.unwrap_err();
    assert!(matches!(err, NaverError::Deserialize { .. }), "got {err:?}");
}

// ---------------------------------------------------------------------------
// blog + news
// ---------------------------------------------------------------------------

#[tokio::test]
async fn blog_and_news_are_merged_with_summed_totals() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/blog.json"))
        .and(query_param("display", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("blog", 100, 5)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search/news.json"))
        .and(query_param("display", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("news", 40, 3)))
        .mount(&server)
        .await;

    let merged = test_client(&server)
        .search_blog_and_news("수건", 10)
        .await
        .expect("search succeeds");
    assert_eq!(merged.total, 140);
    assert_eq!(merged.display, 8);
    assert_eq!(merged.items[0].title, "blog 0");
    assert_eq!(merged.items[5].title, "news 0");
}

#[tokio::test]
async fn blog_and_news_totals_saturate_instead_of_overflowing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/blog.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("blog", u64::MAX - 1, 2)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("news", 10, 2)))
        .mount(&server)
        .await;

    let merged = test_client(&server)
        .search_blog_and_news("수건", 4)
        .await
        .expect("search succeeds");
    assert_eq!(merged.total, u64::MAX);
    assert_eq!(merged.display, 4);
}

#[tokio::test]
async fn one_failing_kind_is_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/blog.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/search/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("news", 7, 2)))
        .mount(&server)
        .await;

    let merged = test_client(&server)
        .search_blog_and_news("수건", 3)
        .await
        .expect("news alone is enough");
    assert_eq!(merged.total, 7);
    assert_eq!(merged.items.len(), 2);
}

#[tokio::test]
async fn both_kinds_failing_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_blog_and_news("수건", 3)
        .await
        .unwrap_err();
    assert!(
        matches!(err, NaverError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn single_document_kind_uses_its_endpoint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/search/news.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(documents("news", 1, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let page = test_client(&server)
        .search_documents(DocumentKind::News, "a", 1)
        .await
        .expect("search succeeds");
    assert_eq!(page.items.len(), 1);
}

// ---------------------------------------------------------------------------
// datalab
// ---------------------------------------------------------------------------

#[tokio::test]
async fn datalab_posts_keyword_group() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/datalab/search"))
        .and(header("X-Naver-Client-Id", "test-id"))
        .and(body_partial_json(json!({
            "startDate": "2024-01-01",
            "endDate": "2024-01-07",
            "timeUnit": "date",
            "keywordGroups": [{"groupName": "수건", "keywords": ["수건"]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "startDate": "2024-01-01",
            "endDate": "2024-01-07",
            "timeUnit": "date",
            "results": [{
                "title": "수건",
                "keywords": ["수건"],
                "data": [
                    {"period": "2024-01-01", "ratio": 40.5},
                    {"period": "2024-01-02", "ratio": 100.0}
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DatalabClient::with_base_url(&credentials(), 5, "trendlens-test", &server.uri())
        .expect("client");
    let response = client
        .trend(
            &["수건"],
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        )
        .await
        .expect("trend succeeds");
    let series = response.first_series();
    assert_eq!(series.len(), 2);
    assert!((series[1].ratio - 100.0).abs() < f64::EPSILON);
}
