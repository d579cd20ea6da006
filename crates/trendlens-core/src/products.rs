use serde::{Deserialize, Serialize};

/// Price value stored when no price text could be extracted.
pub const PRICE_UNAVAILABLE: &str = "가격 없음";

/// Category tag for the scraped best-100 page.
pub const CATEGORY_BEST100: &str = "전체";

/// Category tag for the keyword popularity scan.
pub const CATEGORY_POPULAR: &str = "인기상품";

/// Upper bound on items kept from a single best-100 extraction pass.
pub const MAX_BEST_PRODUCTS: usize = 100;

/// A product listing, either scraped from the best-seller page or returned by
/// the shopping search API.
///
/// Products are created per extraction pass and persisted per category with
/// delete-then-insert semantics; they are never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// 1-based position within its batch. Batches always carry a dense
    /// `1..=N` sequence in output order.
    pub rank: u32,
    pub name: String,
    /// Display price as shown by the source, e.g. `"29,900원"`, or
    /// [`PRICE_UNAVAILABLE`].
    pub price: String,
    pub url: String,
    pub image_url: String,
    #[serde(default)]
    pub mall_name: String,
    /// Storage partition key.
    pub category: String,
    /// Search term that produced the listing, for API-sourced products.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl Product {
    /// Returns `true` when the listing carries a real price rather than the
    /// sentinel.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price != PRICE_UNAVAILABLE
    }
}

/// Rewrites `rank` on every product so the batch reads `1..=N` in its current
/// order.
pub fn assign_dense_ranks(products: &mut [Product]) {
    for (idx, product) in products.iter_mut().enumerate() {
        product.rank = u32::try_from(idx + 1).unwrap_or(u32::MAX);
    }
}

/// Removes the `<b>`/`</b>` highlight markup the search API wraps around
/// matched terms.
#[must_use]
pub fn strip_bold_markup(text: &str) -> String {
    text.replace("<b>", "").replace("</b>", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product(name: &str, rank: u32) -> Product {
        Product {
            rank,
            name: name.to_string(),
            price: "10,000원".to_string(),
            url: String::new(),
            image_url: String::new(),
            mall_name: String::new(),
            category: CATEGORY_BEST100.to_string(),
            keyword: None,
        }
    }

    #[test]
    fn assign_dense_ranks_renumbers_from_one() {
        let mut products = vec![
            make_product("a", 3),
            make_product("b", 7),
            make_product("c", 7),
        ];
        assign_dense_ranks(&mut products);
        let ranks: Vec<u32> = products.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn has_price_false_for_sentinel() {
        let mut product = make_product("a", 1);
        assert!(product.has_price());
        product.price = PRICE_UNAVAILABLE.to_string();
        assert!(!product.has_price());
    }

    #[test]
    fn strip_bold_markup_removes_highlight_tags() {
        assert_eq!(
            strip_bold_markup("<b>로봇청소기</b> 추천 <b>2024</b>"),
            "로봇청소기 추천 2024"
        );
    }

    #[test]
    fn keyword_omitted_from_json_when_absent() {
        let json = serde_json::to_value(make_product("a", 1)).unwrap();
        assert!(json.get("keyword").is_none());
        assert_eq!(json["category"], "전체");
    }

    #[test]
    fn mall_name_defaults_when_missing_from_json() {
        let json = serde_json::json!({
            "rank": 1,
            "name": "무선청소기",
            "price": "99,000원",
            "url": "https://example.com/p/1",
            "image_url": "https://example.com/p/1.jpg",
            "category": "전체"
        });
        let product: Product = serde_json::from_value(json).unwrap();
        assert_eq!(product.mall_name, "");
        assert!(product.keyword.is_none());
    }
}
