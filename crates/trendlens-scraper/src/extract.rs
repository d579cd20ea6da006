//! Per-card field extraction.
//!
//! Each field has its own fallback chain and is looked up independently, so a
//! missing price never costs the title and vice versa. Everything here is a
//! pure function of one element subtree.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use trendlens_core::PRICE_UNAVAILABLE;

use crate::selector::SelectorChain;

/// Titles shorter than this many characters are treated as decorative noise.
pub const MIN_TITLE_CHARS: usize = 3;

/// How many ancestors the link lookup climbs when the card holds no anchor.
pub const LINK_PARENT_WALK_DEPTH: usize = 5;

static IMAGE_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&["img.simpleBestProductCardResponsive_image__krLZN", "img"])
});

static LINK_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| {
    SelectorChain::new(&["a.simpleBestProductCardResponsive_link__CPaQh", "a"])
});

static ANCHOR_CHAIN: LazyLock<SelectorChain> = LazyLock::new(|| SelectorChain::new(&["a"]));

/// Discount price first so a promotion overrides the list price.
static PRICE_CHAIN: LazyLock<Vec<SelectorChain>> = LazyLock::new(|| {
    [
        "div.simpleBestProductCardResponsive_discount_price__1WgDd",
        "div.simpleBestProductCardResponsive_origin_price__XjEwV",
        "[class*='price']",
        "[class*='cost']",
        "[class*='amount']",
    ]
    .iter()
    .map(|pattern| SelectorChain::new(&[pattern]))
    .collect()
});

static WON_AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d,]+원").expect("valid regex"));

/// Fields pulled from a single product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub image_url: String,
    /// Empty when no anchor with an `href` was found.
    pub url: String,
    /// Price text, or [`PRICE_UNAVAILABLE`].
    pub price: String,
}

/// Extracts title, image, link, and price from one card element.
///
/// Returns `None` when the card has no image alt text of at least
/// [`MIN_TITLE_CHARS`] characters; such cards are dropped, not reported.
#[must_use]
pub fn extract_fields(card: ElementRef<'_>) -> Option<ExtractedFields> {
    let (title, image_url) = extract_title_and_image(card)?;
    if title.chars().count() < MIN_TITLE_CHARS {
        tracing::trace!(title = %title, "dropping card with short title");
        return None;
    }

    Some(ExtractedFields {
        title,
        image_url,
        url: extract_link(card),
        price: extract_price(card),
    })
}

/// Marker image first, then any image.
fn extract_title_and_image(card: ElementRef<'_>) -> Option<(String, String)> {
    let img = IMAGE_CHAIN.first_in(card)?;
    let title = img.value().attr("alt").unwrap_or_default().trim().to_string();
    let image_url = img.value().attr("src").unwrap_or_default().to_string();
    Some((title, image_url))
}

/// Marker anchor, then any anchor, then the nearest ancestor that is or
/// contains one.
fn extract_link(card: ElementRef<'_>) -> String {
    if let Some(href) = LINK_CHAIN.first_in(card).and_then(href_of) {
        return href;
    }

    card.ancestors()
        .filter_map(ElementRef::wrap)
        .take(LINK_PARENT_WALK_DEPTH)
        .find_map(|ancestor| {
            if ancestor.value().name() == "a" {
                href_of(ancestor)
            } else {
                ANCHOR_CHAIN.first_in(ancestor).and_then(href_of)
            }
        })
        .unwrap_or_default()
}

fn href_of(anchor: ElementRef<'_>) -> Option<String> {
    anchor.value().attr("href").map(str::to_string)
}

/// The first price candidate whose text holds a digit wins; otherwise the
/// first `"<digits>원"` run in the card text; otherwise the sentinel.
fn extract_price(card: ElementRef<'_>) -> String {
    let from_selectors = PRICE_CHAIN.iter().find_map(|chain| {
        let element = chain.first_in(card)?;
        let text = collapse_whitespace(&element.text().collect::<String>());
        contains_digit(&text).then_some(text)
    });
    if let Some(price) = from_selectors {
        return price;
    }

    let card_text = card.text().collect::<String>();
    WON_AMOUNT_RE
        .find_iter(&card_text)
        .map(|m| m.as_str())
        .find(|s| contains_digit(s))
        .map_or_else(|| PRICE_UNAVAILABLE.to_string(), str::to_string)
}

fn contains_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
