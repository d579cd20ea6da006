//! Plain-language summary sentences for the dashboard.

use trendlens_core::{
    Competition, KeywordInsight, SearchVolumeStats, Seasonality, TrendDirection, TrendSummary,
};

use crate::scorer::format_count;

/// Sentences describing a trend analysis.
#[must_use]
pub fn trend_insights(
    keyword: &str,
    summary: &TrendSummary,
    related: &[KeywordInsight],
    volume: &SearchVolumeStats,
) -> Vec<String> {
    let mut out = Vec::with_capacity(5);

    out.push(if summary.avg_ratio >= 70.0 {
        format!("'{keyword}'는 현재 매우 인기 있는 키워드입니다.")
    } else if summary.avg_ratio >= 50.0 {
        format!("'{keyword}'는 보통 수준의 인기를 보이고 있습니다.")
    } else {
        format!("'{keyword}'는 상대적으로 낮은 인기를 보이고 있습니다.")
    });

    match summary.direction {
        TrendDirection::Rising => out.push("트렌드가 상승하고 있어 관심이 증가하고 있습니다.".into()),
        TrendDirection::Falling => out.push("트렌드가 하락하고 있어 관심이 감소하고 있습니다.".into()),
        TrendDirection::Flat => {}
    }

    out.push(
        match volume.daily_searches {
            d if d >= 10_000 => "일일 검색량이 매우 높아 경쟁이 치열할 수 있습니다.",
            d if d >= 5_000 => "일일 검색량이 높아 마케팅 기회가 있습니다.",
            _ => "일일 검색량이 보통 수준으로 안정적입니다.",
        }
        .into(),
    );

    if let Some(top) = related.first() {
        out.push(format!("가장 연관성이 높은 키워드는 '{}'입니다.", top.keyword));
    }

    out.push(
        match volume.seasonality {
            Seasonality::Seasonal => "이 키워드는 계절적 특성을 보이므로 시기별 마케팅 전략이 필요합니다.",
            Seasonality::YearRound => "이 키워드는 연중 안정적인 관심을 보입니다.",
        }
        .into(),
    );

    out
}

/// Sentences describing a keyword-tool analysis.
#[must_use]
pub fn analysis_insights(
    keyword: &str,
    direction: TrendDirection,
    monthly_searches: u64,
    competition: Competition,
) -> Vec<String> {
    let volume_word = match monthly_searches {
        m if m > 50_000 => "높은",
        m if m > 20_000 => "보통",
        _ => "낮은",
    };
    let competition_word = match competition {
        Competition::High => "치열한",
        Competition::Medium => "보통",
        Competition::Low => "낮은",
    };

    vec![
        format!("'{keyword}' 키워드는 {} 트렌드를 보이고 있습니다.", direction.label()),
        format!(
            "월간 검색량이 {}회로 {volume_word} 수준입니다.",
            format_count(monthly_searches)
        ),
        format!(
            "경쟁도가 {}으로 {competition_word} 경쟁 상황입니다.",
            competition.label()
        ),
    ]
}

#[cfg(test)]
mod tests {
    use trendlens_core::Level;

    use super::*;

    fn summary(avg: f64, direction: TrendDirection) -> TrendSummary {
        TrendSummary {
            keyword: "수건".into(),
            avg_ratio: avg,
            max_ratio: avg,
            direction,
            data_points: 7,
            popularity: Level::Normal,
        }
    }

    fn volume(daily: u64, seasonality: Seasonality) -> SearchVolumeStats {
        SearchVolumeStats {
            daily_searches: daily,
            weekly_searches: daily * 7,
            monthly_searches: daily * 30,
            volume_level: Level::Normal,
            competition: Competition::Medium,
            trend_direction: TrendDirection::Flat,
            growth_rate: "10%".into(),
            seasonality,
        }
    }

    #[test]
    fn flat_trend_skips_direction_sentence() {
        let out = trend_insights(
            "수건",
            &summary(45.3, TrendDirection::Flat),
            &[],
            &volume(3_200, Seasonality::YearRound),
        );
        assert_eq!(out.len(), 3);
        assert!(out[0].contains("낮은 인기"));
        assert!(out[2].contains("연중"));
    }

    #[test]
    fn full_insight_set() {
        let related = [KeywordInsight::basic("여름원피스추천", 95, "1,000", Competition::High)];
        let out = trend_insights(
            "여름원피스",
            &summary(85.5, TrendDirection::Rising),
            &related,
            &volume(12_000, Seasonality::Seasonal),
        );
        assert_eq!(out.len(), 5);
        assert!(out[0].contains("매우 인기"));
        assert!(out[1].contains("상승"));
        assert!(out[2].contains("치열"));
        assert!(out[3].contains("여름원피스추천"));
        assert!(out[4].contains("계절적"));
    }

    #[test]
    fn analysis_sentences_use_formatted_volume() {
        let out = analysis_insights("노트북", TrendDirection::Rising, 78_000, Competition::High);
        assert_eq!(out.len(), 3);
        assert!(out[0].contains("상승"));
        assert!(out[1].contains("78,000회로 높은"));
        assert!(out[2].contains("치열한"));
    }
}
