//! Heuristic keyword scoring.
//!
//! Every function here is total: unknown keywords get the default score for
//! their shape, never an error.

use trendlens_core::{Competition, Level, ShoppingIntent};

use crate::lexicon::{contains_brand, contains_intent_word, either_contains, BRANDS};

/// Highest score a keyword other than the seed itself can reach.
pub const MAX_RELATED_SCORE: u8 = 95;

/// Score of a keyword identical to the seed.
pub const EXACT_MATCH_SCORE: u8 = 100;

/// Intent groups in precedence order; the first group with a hit wins.
const INTENT_GROUPS: &[(ShoppingIntent, &[&str])] = &[
    (
        ShoppingIntent::Purchase,
        &["추천", "비교", "스펙", "가격", "효과", "코디", "스타일"],
    ),
    (ShoppingIntent::BrandExploration, &["브랜드", "제조사"]),
    (ShoppingIntent::CategoryExploration, &["카테고리"]),
    (ShoppingIntent::Goal, &["골"]),
    (ShoppingIntent::Assist, &["어시스트"]),
    (ShoppingIntent::Match, &["경기"]),
];

const PURCHASE_WORDS: &[&str] = &["추천", "비교", "스펙", "가격", "효과", "코디", "스타일"];

/// KRW bands as `(exclusive upper bound, label)`.
const PRICE_BANDS: &[(u64, &str)] = &[
    (10_000, "1만원 미만"),
    (50_000, "1만원 이상 5만원 미만"),
    (100_000, "5만원 이상 10만원 미만"),
    (200_000, "10만원 이상 20만원 미만"),
    (500_000, "20만원 이상 50만원 미만"),
];

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Relevance of `candidate` to `seed`.
///
/// `100` for an exact match. Otherwise base 50, +30 for a brand, +20 for an
/// intent word, +15 for four or more characters, +25 when one contains the
/// other; capped at [`MAX_RELATED_SCORE`].
#[must_use]
pub fn relevance(candidate: &str, seed: &str) -> u8 {
    if candidate == seed {
        return EXACT_MATCH_SCORE;
    }

    let mut score: u32 = 50;
    if contains_brand(candidate) {
        score += 30;
    }
    if contains_intent_word(candidate) {
        score += 20;
    }
    if char_len(candidate) >= 4 {
        score += 15;
    }
    if either_contains(candidate, seed) {
        score += 25;
    }
    clamp_score(score)
}

/// Competition bucket from keyword length alone: five or more characters is
/// high, three or more medium.
#[must_use]
pub fn competition_level(keyword: &str) -> Competition {
    match char_len(keyword) {
        n if n >= 5 => Competition::High,
        n if n >= 3 => Competition::Medium,
        _ => Competition::Low,
    }
}

#[must_use]
pub fn shopping_intent(keyword: &str) -> ShoppingIntent {
    INTENT_GROUPS
        .iter()
        .find(|(_, words)| words.iter().any(|w| keyword.contains(w)))
        .map_or(ShoppingIntent::General, |(intent, _)| *intent)
}

/// How strongly a keyword looks like a product query, `0..=95`.
#[must_use]
pub fn shopping_score(keyword: &str) -> u8 {
    let mut score: u32 = 0;
    if contains_brand(keyword) {
        score += 30;
    }
    if PURCHASE_WORDS.iter().any(|w| keyword.contains(w)) {
        score += 20;
    }
    if char_len(keyword) >= 4 {
        score += 10;
    }
    if BRANDS.iter().any(|b| either_contains(keyword, b)) {
        score += 15;
    }
    clamp_score(score)
}

/// KRW band label for a lowest-price value. Zero means the listing had no
/// price.
#[must_use]
pub fn price_range(lprice: u64) -> &'static str {
    if lprice == 0 {
        return "가격 정보 없음";
    }
    PRICE_BANDS
        .iter()
        .find(|(upper, _)| lprice < *upper)
        .map_or("50만원 이상", |(_, label)| label)
}

/// Parses the search API's string price; anything unparseable is zero.
#[must_use]
pub fn parse_price(raw: &str) -> u64 {
    raw.trim().replace(',', "").parse().unwrap_or(0)
}

/// Volume level and competition implied by an estimated daily search count.
#[must_use]
pub fn daily_volume_level(daily: u64) -> (Level, Competition) {
    match daily {
        d if d > 50_000 => (Level::VeryHigh, Competition::High),
        d if d > 20_000 => (Level::High, Competition::Medium),
        d if d > 5_000 => (Level::Normal, Competition::Medium),
        _ => (Level::Low, Competition::Low),
    }
}

#[must_use]
pub fn monthly_volume_level(monthly: u64) -> Level {
    match monthly {
        m if m > 50_000 => Level::High,
        m if m > 20_000 => Level::Normal,
        _ => Level::Low,
    }
}

/// Popularity from an average `DataLab` ratio.
#[must_use]
pub fn popularity_level(score: f64) -> Level {
    if score >= 80.0 {
        Level::VeryHigh
    } else if score >= 60.0 {
        Level::High
    } else if score >= 40.0 {
        Level::Normal
    } else if score >= 20.0 {
        Level::Low
    } else {
        Level::VeryLow
    }
}

/// Growth percentage label: one percent per thousand daily searches, kept
/// within 5 to 50.
#[must_use]
pub fn growth_rate(daily: u64) -> String {
    format!("{}%", (daily / 1000).clamp(5, 50))
}

/// Formats a count with thousands separators, e.g. `12,345`.
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn clamp_score(score: u32) -> u8 {
    u8::try_from(score.min(u32::from(MAX_RELATED_SCORE))).unwrap_or(MAX_RELATED_SCORE)
}
