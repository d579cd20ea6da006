//! Wire types for Naver API responses.
//!
//! Fields default when absent; the search API omits empty values rather than
//! sending nulls.

use serde::{Deserialize, Deserializer, Serialize};

/// Response body of `GET /v1/search/shop.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub items: Vec<ShopItem>,
}

/// One shopping search hit. `title` may contain `<b>` highlight markup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub lprice: String,
    #[serde(default)]
    pub hprice: String,
    #[serde(default)]
    pub mall_name: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub maker: String,
    #[serde(default)]
    pub category1: String,
    #[serde(default)]
    pub category2: String,
    #[serde(default)]
    pub category3: String,
    #[serde(default)]
    pub category4: String,
}

impl ShopItem {
    /// Non-empty category path segments, most general first.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        [
            self.category1.as_str(),
            self.category2.as_str(),
            self.category3.as_str(),
            self.category4.as_str(),
        ]
        .into_iter()
        .filter(|c| !c.is_empty())
    }
}

/// Response body of the blog and news search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentSearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub display: u32,
    #[serde(default)]
    pub items: Vec<DocumentItem>,
}

/// A blog post or news article. Blog-only and news-only fields stay empty on
/// the other kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bloggername: String,
    #[serde(default)]
    pub bloggerlink: String,
    #[serde(default)]
    pub postdate: String,
    #[serde(default)]
    pub originallink: String,
    #[serde(default, rename = "pubDate")]
    pub pub_date: String,
}

/// Request body of `POST /v1/datalab/search`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DatalabRequest {
    pub start_date: String,
    pub end_date: String,
    pub time_unit: &'static str,
    pub keyword_groups: Vec<DatalabKeywordGroup>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DatalabKeywordGroup {
    pub group_name: String,
    pub keywords: Vec<String>,
}

/// Response body of the `DataLab` search trend endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatalabResponse {
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub time_unit: String,
    #[serde(default)]
    pub results: Vec<DatalabResult>,
}

impl DatalabResponse {
    /// Series of the first keyword group, or an empty slice.
    #[must_use]
    pub fn first_series(&self) -> &[DatalabPoint] {
        self.results.first().map_or(&[], |r| r.data.as_slice())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatalabResult {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub data: Vec<DatalabPoint>,
}

/// Relative search interest for one period, scaled 0-100.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatalabPoint {
    pub period: String,
    pub ratio: f64,
}

/// Response body of `GET /keywordstool`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordToolResponse {
    #[serde(default, rename = "keywordList")]
    pub keyword_list: Vec<KeywordToolRow>,
}

/// One keyword-tool row.
///
/// Counts arrive as numbers or as strings such as `"< 10"`; anything that is
/// not a plain number reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordToolRow {
    #[serde(default)]
    pub rel_keyword: String,
    #[serde(default, alias = "monthlyPcQcCnt", deserialize_with = "lenient_number")]
    pub monthly_pc_qty: f64,
    #[serde(default, alias = "monthlyMobileQcCnt", deserialize_with = "lenient_number")]
    pub monthly_mobile_qty: f64,
    #[serde(default, alias = "monthlyAveQcCnt", deserialize_with = "lenient_number")]
    pub monthly_avg_qty: f64,
    #[serde(default)]
    pub comp_idx: String,
    #[serde(default, alias = "monthlyAvePcCtr", deserialize_with = "lenient_number")]
    pub pc_click_rate: f64,
    #[serde(default, alias = "monthlyAveMobileCtr", deserialize_with = "lenient_number")]
    pub mobile_click_rate: f64,
    #[serde(default, alias = "monthlyAvePcClkCnt", deserialize_with = "lenient_number")]
    pub pc_click_count: f64,
    #[serde(default, alias = "monthlyAveMobileClkCnt", deserialize_with = "lenient_number")]
    pub mobile_click_count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_click_count: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub pc_click_price: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub mobile_click_price: f64,
    #[serde(default, deserialize_with = "lenient_number")]
    pub avg_click_price: f64,
}

impl KeywordToolRow {
    /// Monthly volume, preferring the reported average and otherwise summing
    /// the PC and mobile counts.
    #[must_use]
    pub fn monthly_volume(&self) -> f64 {
        if self.monthly_avg_qty > 0.0 {
            self.monthly_avg_qty
        } else {
            self.monthly_pc_qty + self.monthly_mobile_qty
        }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or_default(),
        serde_json::Value::String(s) => s.trim().replace(',', "").parse().unwrap_or_default(),
        _ => 0.0,
    })
}
