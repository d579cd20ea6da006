//! Integration tests for `Best100Scraper` against a local `wiremock` server.

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use trendlens_scraper::{Best100Scraper, ScraperError};

const PAGE: &str = r#"<html><body><ul>
  <li class="simpleBestProductCardResponsive_simple_best_product_card_responsive__GPB5o">
    <a class="simpleBestProductCardResponsive_link__CPaQh" href="https://shopping.example.com/p/1">
      <img class="simpleBestProductCardResponsive_image__krLZN" src="https://img.example.com/1.jpg" alt="다이슨 무선청소기">
    </a>
    <div class="simpleBestProductCardResponsive_origin_price__XjEwV">890,000원</div>
    <div class="simpleBestProductCardResponsive_discount_price__1WgDd">799,000원</div>
  </li>
</ul></body></html>"#;

fn scraper_for(server: &MockServer) -> Best100Scraper {
    Best100Scraper::new(5, "trendlens-test/0.1", &format!("{}/best100", server.uri()))
        .expect("failed to build test scraper")
}

#[tokio::test]
async fn scrape_returns_products_from_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best100"))
        .and(header("user-agent", "trendlens-test/0.1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let products = scraper_for(&server).scrape().await.expect("scrape succeeds");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].rank, 1);
    assert_eq!(products[0].name, "다이슨 무선청소기");
    assert_eq!(products[0].price, "799,000원");
    assert_eq!(products[0].url, "https://shopping.example.com/p/1");
}

#[tokio::test]
async fn scrape_of_unrecognised_page_is_empty_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best100"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
        .mount(&server)
        .await;

    let products = scraper_for(&server).scrape().await.expect("scrape succeeds");
    assert!(products.is_empty());
}

#[tokio::test]
async fn not_found_maps_to_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best100"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = scraper_for(&server).scrape().await.unwrap_err();
    assert!(matches!(err, ScraperError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best100"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = scraper_for(&server).scrape().await.unwrap_err();
    assert!(
        matches!(err, ScraperError::UnexpectedStatus { status: 503, .. }),
        "got {err:?}"
    );
}

#[tokio::test]
async fn timeout_surfaces_as_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/best100"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(PAGE)
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let scraper = Best100Scraper::new(1, "trendlens-test/0.1", &format!("{}/best100", server.uri()))
        .expect("failed to build test scraper");
    let err = scraper.scrape().await.unwrap_err();
    assert!(matches!(err, ScraperError::Http(_)), "got {err:?}");
}
