//! Typed clients for the Naver Open API (search, `DataLab`) and the search-ad
//! keyword tool.

pub mod datalab;
pub mod error;
mod http;
pub mod search;
pub mod searchad;
pub mod signature;
pub mod types;

pub use datalab::DatalabClient;
pub use error::NaverError;
pub use search::{DocumentKind, SearchClient};
pub use searchad::{AuthStrategy, SearchAdClient};
pub use types::{
    DatalabPoint, DatalabResponse, DatalabResult, DocumentItem, DocumentSearchResponse,
    KeywordToolResponse, KeywordToolRow, ShopItem, ShopSearchResponse,
};
