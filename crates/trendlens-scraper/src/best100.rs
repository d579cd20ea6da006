//! Best-seller page scraper.

use std::sync::LazyLock;
use std::time::Duration;

use reqwest::Client;
use scraper::Html;
use trendlens_core::{assign_dense_ranks, Product, CATEGORY_BEST100, MAX_BEST_PRODUCTS};

use crate::error::ScraperError;
use crate::extract::extract_fields;
use crate::selector::SelectorChain;

/// Card selector candidates, from the build-hashed card class down to bare
/// list items and divs.
pub const CARD_SELECTORS: &[&str] = &[
    "li.simpleBestProductCardResponsive_simple_best_product_card_responsive__GPB5o",
    "li[class*='best_product']",
    "li[class*='product']",
    "div[class*='best_product']",
    "div[class*='product']",
    "[class*='best'] [class*='product']",
    "[class*='product'] [class*='item']",
    ".product_item",
    ".best_item",
    "li",
    "div",
];

static CARD_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| SelectorChain::new(CARD_SELECTORS));

/// Fetches the best-seller page and extracts ranked products from it.
///
/// One fetch per call with a fixed timeout; failures are reported, never
/// retried.
pub struct Best100Scraper {
    client: Client,
    page_url: String,
}

impl Best100Scraper {
    /// Creates a scraper for `page_url` with the configured timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str, page_url: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            page_url: page_url.to_string(),
        })
    }

    #[must_use]
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Downloads the page HTML.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network failure or timeout.
    pub async fn fetch_page(&self) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(&self.page_url)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "ko-KR,ko;q=0.9,en;q=0.8")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: self.page_url.clone(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.page_url.clone(),
            });
        }

        Ok(response.text().await?)
    }

    /// Fetches the page and extracts up to [`MAX_BEST_PRODUCTS`] products.
    ///
    /// An empty vector means the page loaded but no card selector matched
    /// anything usable; that is not an error.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`fetch_page`](Self::fetch_page).
    pub async fn scrape(&self) -> Result<Vec<Product>, ScraperError> {
        let html = self.fetch_page().await?;
        let products = extract_best_products(&html);
        tracing::info!(
            url = %self.page_url,
            count = products.len(),
            "best-100 page scraped"
        );
        Ok(products)
    }
}

/// Extracts ranked products from best-seller page HTML.
///
/// Cards whose title is too short are dropped before ranks are assigned, so
/// the result always carries a dense `1..=N` sequence.
#[must_use]
pub fn extract_best_products(html: &str) -> Vec<Product> {
    let document = Html::parse_document(html);

    let Some(matched) = CARD_CHAIN.resolve_document(&document) else {
        tracing::warn!("no card selector matched the best-100 page");
        return Vec::new();
    };
    tracing::debug!(
        pattern = matched.pattern,
        index = matched.index,
        candidates = matched.elements.len(),
        "card selector resolved"
    );

    let mut products: Vec<Product> = matched
        .elements
        .into_iter()
        .filter_map(extract_fields)
        .take(MAX_BEST_PRODUCTS)
        .map(|fields| Product {
            rank: 0,
            name: fields.title,
            price: fields.price,
            url: fields.url,
            image_url: fields.image_url,
            mall_name: String::new(),
            category: CATEGORY_BEST100.to_string(),
            keyword: None,
        })
        .collect();

    assign_dense_ranks(&mut products);
    products
}

#[cfg(test)]
mod tests {
    use trendlens_core::PRICE_UNAVAILABLE;

    use super::*;

    fn hashed_card(title: &str, price: &str) -> String {
        format!(
            r#"<li class="simpleBestProductCardResponsive_simple_best_product_card_responsive__GPB5o">
                <a class="simpleBestProductCardResponsive_link__CPaQh" href="https://shopping.example.com/{title}">
                  <img class="simpleBestProductCardResponsive_image__krLZN" src="https://img.example.com/{title}.jpg" alt="{title}">
                </a>
                <div class="simpleBestProductCardResponsive_origin_price__XjEwV">{price}</div>
            </li>"#
        )
    }

    #[test]
    fn extracts_hashed_cards_with_dense_ranks() {
        let html = format!(
            "<html><body><ul>{}{}{}</ul></body></html>",
            hashed_card("로봇청소기 X1", "399,000원"),
            hashed_card("아이", "1,000원"),
            hashed_card("에어프라이어 5.5L", "89,000원"),
        );
        let products = extract_best_products(&html);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].rank, 1);
        assert_eq!(products[0].name, "로봇청소기 X1");
        assert_eq!(products[0].price, "399,000원");
        assert_eq!(products[1].rank, 2);
        assert_eq!(products[1].name, "에어프라이어 5.5L");
        assert!(products.iter().all(|p| p.category == CATEGORY_BEST100));
    }

    #[test]
    fn falls_back_to_generic_list_items() {
        let html = r#"<html><body><ul>
            <li><a href="/a"><img src="/a.jpg" alt="무선 청소기"></a><span>12,000원</span></li>
            <li><img src="/b.jpg" alt="가습기 대용량"></li>
        </ul></body></html>"#;
        let products = extract_best_products(html);
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].url, "/a");
        assert_eq!(products[0].price, "12,000원");
        assert_eq!(products[1].price, PRICE_UNAVAILABLE);
    }

    #[test]
    fn page_without_cards_yields_empty() {
        let html = "<html><body><p>점검 중입니다</p></body></html>";
        assert!(extract_best_products(html).is_empty());
    }

    #[test]
    fn result_is_capped() {
        let cards: String = (0..150)
            .map(|i| hashed_card(&format!("상품 번호 {i}"), "10,000원"))
            .collect();
        let html = format!("<html><body><ul>{cards}</ul></body></html>");
        let products = extract_best_products(&html);
        assert_eq!(products.len(), MAX_BEST_PRODUCTS);
        assert_eq!(products.last().map(|p| p.rank), Some(100));
    }
}
