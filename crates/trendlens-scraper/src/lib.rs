pub mod best100;
pub mod error;
pub mod extract;
pub mod selector;

pub use best100::{extract_best_products, Best100Scraper, CARD_SELECTORS};
pub use error::ScraperError;
pub use extract::{extract_fields, ExtractedFields};
pub use selector::{SelectorChain, SelectorMatch};
