//! Curated fallback data, keyed by seed keyword.

use trendlens_core::{Competition, Seasonality, TrendDirection};

/// Related keywords per seed, in curated order.
pub const RELATED: &[(&str, &[&str])] = &[
    (
        "로봇청소기",
        &[
            "스마트청소기추천", "무선청소기비교", "다이슨청소기", "아이로봇추천", "청소로봇브랜드",
            "스마트홈청소기", "IoT청소기추천", "청소기스펙",
        ],
    ),
    (
        "여름원피스",
        &[
            "여름원피스추천", "미니원피스코디", "플로럴원피스", "여름원피스브랜드",
            "여름원피스스타일링", "맥시원피스추천", "여름원피스가격", "여름원피스효과",
        ],
    ),
    (
        "수건",
        &[
            "수건추천", "고급수건브랜드", "면수건비교", "욕실타월추천", "수건세트추천",
            "마이크로화이버수건", "수건정리방법", "수건효과",
        ],
    ),
    (
        "노트북",
        &[
            "노트북추천", "게이밍노트북비교", "삼성노트북스펙", "맥북추천", "노트북브랜드",
            "노트북가격비교", "노트북스펙", "노트북효과",
        ],
    ),
    (
        "스마트폰",
        &[
            "스마트폰추천", "갤럭시비교", "아이폰추천", "5G스마트폰", "플래그십스마트폰",
            "스마트폰브랜드", "스마트폰가격", "스마트폰스펙",
        ],
    ),
    (
        "핸드크림",
        &[
            "핸드크림추천", "아베노핸드크림", "니베아핸드크림", "핸드케어추천", "겨울핸드크림",
            "고급핸드크림", "핸드크림브랜드", "핸드크림효과",
        ],
    ),
    (
        "손흥민",
        &[
            "손흥민뉴스", "토트넘손흥민", "손흥민골", "손흥민어시스트", "손흥민경기",
            "손흥민인터뷰", "손흥민유니폼", "손흥민기록",
        ],
    ),
];

pub const RELATED_SUFFIXES: &[&str] = &["추천", "비교", "브랜드", "스펙", "가격", "효과"];

/// `(keyword, price range, category)`.
pub type ShoppingEntry = (&'static str, &'static str, &'static str);

pub const SHOPPING_KEYWORDS: &[(&str, &[ShoppingEntry])] = &[
    (
        "로봇청소기",
        &[
            ("다이슨청소기", "50만원 이상", "가전"),
            ("아이로봇룸바", "20만원대", "가전"),
            ("로봇청소기추천", "10만원대", "가전"),
            ("무선청소기비교", "5만원대", "가전"),
            ("청소기가격비교", "다양", "가전"),
            ("스마트청소기할인", "할인가", "가전"),
            ("청소로봇브랜드", "다양", "가전"),
            ("IoT청소기", "30만원대", "가전"),
        ],
    ),
    (
        "여름원피스",
        &[
            ("미니원피스", "3만원대", "패션"),
            ("맥시원피스", "5만원대", "패션"),
            ("플로럴원피스", "4만원대", "패션"),
            ("여름원피스세일", "할인가", "패션"),
            ("원피스브랜드", "다양", "패션"),
            ("여름코디", "2만원대", "패션"),
            ("여름패션", "다양", "패션"),
            ("데일리원피스", "3만원대", "패션"),
        ],
    ),
    (
        "스마트폰",
        &[
            ("갤럭시S24", "100만원대", "전자기기"),
            ("아이폰15", "130만원대", "전자기기"),
            ("5G스마트폰", "80만원대", "전자기기"),
            ("스마트폰가격비교", "다양", "전자기기"),
            ("플래그십폰", "100만원 이상", "전자기기"),
            ("중고폰", "30만원대", "전자기기"),
            ("휴대폰할인", "할인가", "전자기기"),
            ("스마트폰추천", "다양", "전자기기"),
        ],
    ),
    (
        "노트북",
        &[
            ("게이밍노트북", "150만원대", "컴퓨터"),
            ("맥북프로", "200만원 이상", "컴퓨터"),
            ("삼성노트북", "80만원대", "컴퓨터"),
            ("LG그램", "120만원대", "컴퓨터"),
            ("노트북할인", "할인가", "컴퓨터"),
            ("학생용노트북", "50만원대", "컴퓨터"),
            ("사무용노트북", "60만원대", "컴퓨터"),
            ("노트북가격비교", "다양", "컴퓨터"),
        ],
    ),
];

/// `(suffix, price range)` used to synthesize shopping keywords.
pub const SHOPPING_SUFFIXES: &[(&str, &str)] = &[
    ("추천", "다양"),
    ("가격비교", "다양"),
    ("브랜드", "다양"),
    ("할인", "할인가"),
    ("세일", "할인가"),
    ("후기", "다양"),
];

pub const SYNTHESIZED_CATEGORY: &str = "기타";

/// Keyword-tool analysis seed data.
pub struct AnalysisEntry {
    pub competition_index: u8,
    pub related: &'static [&'static str],
    pub monthly_searches: u64,
    pub direction: TrendDirection,
}

pub const ANALYSIS: &[(&str, AnalysisEntry)] = &[
    (
        "로봇청소기",
        AnalysisEntry {
            competition_index: 85,
            related: &[
                "다이슨청소기", "아이로봇", "코봇청소기", "스마트청소기", "무선청소기",
                "로봇청소기추천", "청소로봇", "자동청소기",
            ],
            monthly_searches: 45_000,
            direction: TrendDirection::Rising,
        },
    ),
    (
        "여름원피스",
        AnalysisEntry {
            competition_index: 70,
            related: &[
                "미니원피스", "맥시원피스", "플로럴원피스", "여름패션", "여름코디", "원피스추천",
                "여름옷", "여름스타일",
            ],
            monthly_searches: 32_000,
            direction: TrendDirection::Rising,
        },
    ),
    (
        "스마트폰",
        AnalysisEntry {
            competition_index: 95,
            related: &[
                "갤럭시", "아이폰", "5G폰", "플래그십폰", "스마트폰추천", "휴대폰", "모바일",
                "안드로이드폰",
            ],
            monthly_searches: 125_000,
            direction: TrendDirection::Flat,
        },
    ),
    (
        "노트북",
        AnalysisEntry {
            competition_index: 88,
            related: &[
                "게이밍노트북", "맥북", "삼성노트북", "LG그램", "노트북추천", "랩탑", "휴대용컴퓨터",
                "노트북브랜드",
            ],
            monthly_searches: 78_000,
            direction: TrendDirection::Rising,
        },
    ),
];

pub const ANALYSIS_SUFFIXES: &[&str] = &["추천", "비교", "브랜드", "가격", "후기", "구매"];

pub const IDEA_SUFFIXES: &[&str] = &[
    "추천", "비교", "후기", "가격", "브랜드", "구매", "할인", "이벤트", "신제품", "베스트",
];

pub const IDEA_PREFIXES: &[&str] = &["최신", "인기", "신상", "프리미엄", "고급", "저렴한", "할인", "특가"];

pub struct VolumeEntry {
    pub daily: u64,
    pub weekly: u64,
    pub monthly: u64,
    pub direction: TrendDirection,
    pub competition: Competition,
    pub seasonality: Seasonality,
}

pub const SEARCH_VOLUME: &[(&str, VolumeEntry)] = &[
    (
        "로봇청소기",
        VolumeEntry {
            daily: 8_500,
            weekly: 59_500,
            monthly: 255_000,
            direction: TrendDirection::Rising,
            competition: Competition::High,
            seasonality: Seasonality::YearRound,
        },
    ),
    (
        "여름원피스",
        VolumeEntry {
            daily: 12_000,
            weekly: 84_000,
            monthly: 360_000,
            direction: TrendDirection::Rising,
            competition: Competition::High,
            seasonality: Seasonality::Seasonal,
        },
    ),
    (
        "수건",
        VolumeEntry {
            daily: 3_200,
            weekly: 22_400,
            monthly: 96_000,
            direction: TrendDirection::Flat,
            competition: Competition::Medium,
            seasonality: Seasonality::YearRound,
        },
    ),
];

/// `(average ratio, max ratio, direction)`.
pub const TREND_SUMMARY: &[(&str, (f64, f64, TrendDirection))] = &[
    ("여름원피스", (85.5, 95.2, TrendDirection::Rising)),
    ("수건", (45.3, 52.1, TrendDirection::Flat)),
    ("강아지", (72.8, 88.9, TrendDirection::Rising)),
    ("테스트", (25.1, 30.5, TrendDirection::Falling)),
];

pub const DEFAULT_TREND_SUMMARY: (f64, f64, TrendDirection) = (50.0, 60.0, TrendDirection::Flat);

/// Points in the default trend window.
pub const TREND_WINDOW_POINTS: usize = 7;

/// `(title, lowest price, brand, category)`.
pub type ProductEntry = (&'static str, u64, &'static str, &'static str);

pub const PRODUCTS: &[(&str, &[ProductEntry])] = &[
    (
        "로봇청소기",
        &[
            ("다이슨 V15 무선청소기", 890_000, "다이슨", "청소기"),
            ("아이로봇 룸바 i7+", 1_200_000, "아이로봇", "로봇청소기"),
            ("샤오미 로봇청소기", 180_000, "샤오미", "로봇청소기"),
            ("LG 코드제로 A9", 350_000, "LG", "무선청소기"),
        ],
    ),
    (
        "여름원피스",
        &[
            ("플로럴 미니원피스", 35_000, "자라", "원피스"),
            ("린넨 맥시원피스", 48_000, "유니클로", "원피스"),
            ("체크 셔츠원피스", 42_000, "에잇세컨즈", "원피스"),
            ("데님 원피스", 39_000, "스파오", "원피스"),
        ],
    ),
    (
        "스마트폰",
        &[
            ("갤럭시 S24 Ultra", 1_398_000, "삼성", "스마트폰"),
            ("아이폰 15 Pro", 1_550_000, "애플", "스마트폰"),
            ("갤럭시 A54", 449_000, "삼성", "스마트폰"),
            ("아이폰 14", 1_250_000, "애플", "스마트폰"),
        ],
    ),
];

/// `(lowest price, brand)` for the generic products `"{seed} 상품 {n}"`.
pub const SYNTHESIZED_PRODUCTS: &[(u64, &str)] =
    &[(50_000, "브랜드A"), (75_000, "브랜드B"), (100_000, "브랜드C")];

pub const MOCK_MALL_NAME: &str = "네이버쇼핑";
pub const MOCK_IMAGE_URL: &str = "https://via.placeholder.com/200x200";
pub const MOCK_SEARCH_URL: &str = "https://shopping.naver.com/search?query=";
