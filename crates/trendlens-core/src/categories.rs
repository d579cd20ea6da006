//! Static keyword groups used by the popularity scan and the per-category
//! product listings.

use crate::CoreError;

/// A shopping category and the seed keywords searched to populate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

pub const CATEGORY_GROUPS: &[CategoryGroup] = &[
    CategoryGroup {
        name: "가전제품",
        keywords: &["로봇청소기", "에어프라이어", "공기청정기", "커피머신", "전자레인지"],
    },
    CategoryGroup {
        name: "생활용품",
        keywords: &["청소기", "선풍기", "가습기", "제습기", "온풍기"],
    },
    CategoryGroup {
        name: "주방용품",
        keywords: &["전기밥솥", "믹서기", "블렌더", "토스터", "전기포트"],
    },
    CategoryGroup {
        name: "패션",
        keywords: &["여름옷", "가을옷", "운동화", "가방", "모자"],
    },
    CategoryGroup {
        name: "뷰티",
        keywords: &["화장품", "스킨케어", "헤어케어", "향수", "메이크업"],
    },
];

/// Seed keywords for the popularity scan, in scan order.
pub const POPULAR_KEYWORDS: &[&str] = &[
    "로봇청소기",
    "에어프라이어",
    "공기청정기",
    "커피머신",
    "전자레인지",
    "청소기",
    "선풍기",
    "가습기",
    "제습기",
    "온풍기",
    "전기밥솥",
    "믹서기",
    "블렌더",
    "토스터",
    "전기포트",
    "다리미",
    "건조기",
    "세탁기",
    "냉장고",
    "TV",
];

/// Returns the seed keywords for a shopping category.
///
/// # Errors
///
/// Returns [`CoreError::UnsupportedCategory`] if `category` is not one of
/// [`CATEGORY_GROUPS`].
pub fn category_keywords(category: &str) -> Result<&'static [&'static str], CoreError> {
    CATEGORY_GROUPS
        .iter()
        .find(|group| group.name == category)
        .map(|group| group.keywords)
        .ok_or_else(|| CoreError::UnsupportedCategory(category.to_string()))
}

/// Names of every supported shopping category, in display order.
#[must_use]
pub fn category_names() -> Vec<&'static str> {
    CATEGORY_GROUPS.iter().map(|group| group.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_keywords_known_category() {
        let keywords = category_keywords("주방용품").unwrap();
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[0], "전기밥솥");
    }

    #[test]
    fn category_keywords_unknown_category_is_error() {
        let err = category_keywords("자동차").unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedCategory(ref c) if c == "자동차"));
    }

    #[test]
    fn every_group_has_five_keywords() {
        for group in CATEGORY_GROUPS {
            assert_eq!(group.keywords.len(), 5, "group {}", group.name);
        }
    }

    #[test]
    fn popular_keywords_has_twenty_unique_entries() {
        let mut sorted = POPULAR_KEYWORDS.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 20);
    }

    #[test]
    fn category_names_in_display_order() {
        assert_eq!(
            category_names(),
            vec!["가전제품", "생활용품", "주방용품", "패션", "뷰티"]
        );
    }
}
