//! Static word lists and pattern tables behind the scorer and extractor.

/// Brand and flagship product names.
pub const BRANDS: &[&str] = &[
    "삼성", "LG", "애플", "다이슨", "코봇", "아이로봇", "갤럭시", "아이폰", "맥북", "토트넘",
];

/// Words that signal a shopper comparing or about to buy.
pub const INTENT_WORDS: &[&str] = &[
    "추천", "비교", "브랜드", "스펙", "가격", "효과", "코디", "스타일",
];

/// Trailing particles that mark a word as a sentence fragment.
pub const PARTICLE_SUFFIXES: &[char] = &['은', '는', '이', '가', '을', '를', '의', '에', '로'];

/// Curated related terms per seed, consulted before free-text extraction.
pub const MEANINGFUL_PATTERNS: &[(&str, &[&str])] = &[
    (
        "로봇청소기",
        &[
            "스마트청소기", "무선청소기", "자동청소기", "청소로봇", "집안청소", "다이슨", "삼성",
            "LG", "코봇", "아이로봇", "로봇청소기추천", "청소기비교", "무선청소기추천", "스마트홈",
            "IoT청소기",
        ],
    ),
    (
        "여름원피스",
        &[
            "여름옷", "원피스", "여름패션", "여름스타일", "여름코디", "미니원피스", "맥시원피스",
            "플로럴원피스", "여름원피스추천", "여름원피스코디", "여름원피스스타일링",
            "여름원피스브랜드",
        ],
    ),
    (
        "수건",
        &[
            "타월", "욕실용품", "목욕용품", "건조용품", "욕실수건", "면수건", "마이크로화이버",
            "수건추천", "수건브랜드", "욕실타월", "수건세트", "고급수건", "수건정리",
        ],
    ),
    (
        "노트북",
        &[
            "컴퓨터", "랩탑", "휴대용컴퓨터", "전자기기", "IT제품", "삼성노트북", "LG노트북", "맥북",
            "게이밍노트북", "노트북추천", "노트북비교", "노트북스펙", "노트북브랜드", "노트북가격",
        ],
    ),
    (
        "스마트폰",
        &[
            "휴대폰", "모바일", "전화기", "디지털기기", "통신기기", "갤럭시", "아이폰",
            "스마트폰추천", "스마트폰비교", "스마트폰브랜드", "스마트폰가격", "스마트폰스펙",
            "5G스마트폰", "플래그십",
        ],
    ),
    (
        "핸드크림",
        &[
            "핸드케어", "손크림", "핸드로션", "핸드크림추천", "핸드크림브랜드", "아베노", "니베아",
            "더마", "핸드크림비교", "핸드크림효과", "겨울핸드크림", "여름핸드크림", "고급핸드크림",
        ],
    ),
    (
        "손흥민",
        &[
            "토트넘", "프리미어리그", "축구선수", "손흥민골", "손흥민어시스트", "손흥민뉴스",
            "손흥민경기", "손흥민인터뷰", "손흥민유니폼", "손흥민선수", "손흥민기록",
            "손흥민하이라이트",
        ],
    ),
];

/// Brand marker found in listing text → terms it implies.
pub const SHOPPING_BRAND_PATTERNS: &[(&str, &[&str])] = &[
    ("삼성", &["삼성", "갤럭시", "갤럭시폴드", "갤럭시노트", "갤럭시탭", "갤럭시워치"]),
    ("LG", &["LG", "울트라웨이브", "코드제로", "오브제", "그램", "스탠바이미"]),
    ("애플", &["아이폰", "아이패드", "아이맥", "에어팟", "애플워치", "맥북"]),
    ("다이슨", &["다이슨", "무선청소기", "청소기", "청소기스펙", "청소기비교"]),
    ("코봇", &["코봇", "로봇청소기", "로봇청소기추천", "로봇청소기비교", "로봇청소기스펙"]),
    ("아이로봇", &["아이로봇", "로봇청소기", "로봇청소기추천", "로봇청소기비교", "로봇청소기스펙"]),
    (
        "토트넘",
        &["토트넘", "손흥민", "손흥민골", "손흥민어시스트", "손흥민경기", "손흥민유니폼"],
    ),
];

/// Category marker found in listing text → terms it implies.
pub const SHOPPING_CATEGORY_PATTERNS: &[(&str, &[&str])] = &[
    (
        "청소",
        &["청소", "청소로봇", "청소기", "청소기스펙", "청소기비교", "스마트홈청소기", "IoT청소기"],
    ),
    (
        "원피스",
        &["원피스", "여름옷", "여름원피스", "여름패션", "미니원피스", "맥시원피스", "플로럴원피스"],
    ),
    (
        "수건",
        &["수건", "타월", "욕실용품", "면수건", "욕실타월", "수건세트", "고급수건"],
    ),
    (
        "노트북",
        &["노트북", "랩탑", "삼성노트북", "LG노트북", "게이밍노트북", "노트북추천", "노트북비교"],
    ),
    (
        "스마트폰",
        &["스마트폰", "휴대폰", "갤럭시", "아이폰", "스마트폰추천", "5G스마트폰", "플래그십"],
    ),
];

/// Product-type marker found in listing text → product-name terms.
pub const SHOPPING_PRODUCT_PATTERNS: &[(&str, &[&str])] = &[
    (
        "청소",
        &["청소로봇", "청소기", "다이슨청소기", "아이로봇청소기", "청소로봇브랜드"],
    ),
    (
        "원피스",
        &["여름원피스", "여름원피스추천", "여름원피스코디", "여름원피스가격"],
    ),
    ("수건", &["수건추천", "수건브랜드", "수건세트", "마이크로화이버"]),
    ("노트북", &["맥북", "게이밍노트북", "노트북스펙", "노트북가격", "노트북브랜드"]),
    ("스마트폰", &["스마트폰스펙", "스마트폰가격", "스마트폰브랜드", "플래그십"]),
];

/// True when `a` contains `b` or `b` contains `a`.
#[must_use]
pub fn either_contains(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// First table entry whose key matches `seed` exactly, then the first whose
/// key and `seed` contain one another.
pub fn lookup<'t, T>(table: &'t [(&'static str, T)], seed: &str) -> Option<&'t T> {
    table
        .iter()
        .find(|(key, _)| *key == seed)
        .or_else(|| table.iter().find(|(key, _)| either_contains(key, seed)))
        .map(|(_, value)| value)
}

/// First table entry whose key occurs anywhere in `text`.
pub fn lookup_in_text<'t, T>(table: &'t [(&'static str, T)], text: &str) -> Option<&'t T> {
    table
        .iter()
        .find(|(key, _)| text.contains(key))
        .map(|(_, value)| value)
}

#[must_use]
pub fn contains_brand(word: &str) -> bool {
    BRANDS.iter().any(|b| word.contains(b))
}

#[must_use]
pub fn contains_intent_word(word: &str) -> bool {
    INTENT_WORDS.iter().any(|w| word.contains(w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_prefers_exact_key() {
        let table: &[(&str, u8)] = &[("청소기", 1), ("로봇청소기", 2)];
        assert_eq!(lookup(table, "로봇청소기"), Some(&2));
    }

    #[test]
    fn lookup_falls_back_to_containment_either_way() {
        let table: &[(&str, u8)] = &[("노트북", 1)];
        assert_eq!(lookup(table, "게이밍노트북"), Some(&1));
        assert_eq!(lookup(table, "노트"), Some(&1));
        assert_eq!(lookup(table, "태블릿"), None);
    }

    #[test]
    fn lookup_in_text_scans_for_key() {
        assert!(lookup_in_text(SHOPPING_BRAND_PATTERNS, "삼성전자 갤럭시 S24").is_some());
        assert!(lookup_in_text(SHOPPING_BRAND_PATTERNS, "무명 브랜드 상품").is_none());
    }

    #[test]
    fn brand_list_includes_tottenham() {
        assert!(contains_brand("토트넘손흥민"));
    }

    #[test]
    fn every_meaningful_seed_is_unique() {
        let mut seeds: Vec<_> = MEANINGFUL_PATTERNS.iter().map(|(k, _)| *k).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), MEANINGFUL_PATTERNS.len());
    }
}
