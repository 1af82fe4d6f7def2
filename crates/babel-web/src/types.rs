//! Request and response types for the JSON API

use serde::{Deserialize, Serialize};

/// POST /api/search request
#[derive(Debug, Clone, Deserialize)]
pub struct SearchRequest {
    /// Text to search for
    pub text: String,
    /// 1-based results page, defaults to 1
    #[serde(default = "default_page")]
    pub page: u32,
}

fn default_page() -> u32 {
    1
}

/// POST /api/search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The query, as searched (lowercased form is what the pages contain)
    pub query: String,
    /// Claimed total number of matching addresses
    pub total: u64,
    /// 1-based results page served
    pub page: u32,
    /// Total number of results pages
    pub total_pages: u64,
    /// Dotted addresses for this page, in variant order
    pub results: Vec<String>,
}

/// POST /api/browse request
#[derive(Debug, Clone, Deserialize)]
pub struct BrowseRequest {
    /// Dotted address: `<hexagon>.<wall>.<shelf>.<book>.<page>`
    pub address: String,
}

/// Browse/random response: one page and its neighbors
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// Dotted address of the page
    pub location: String,
    /// Raw page content
    pub content: String,
    /// Content as 40 lines of 80 symbols
    pub lines: Vec<String>,
    /// Address of the next page
    pub next: String,
    /// Address of the previous page
    pub previous: String,
}

/// GET /api/count query parameters
#[derive(Debug, Clone, Deserialize)]
pub struct CountParams {
    /// Text to count occurrences of
    pub text: String,
}

/// GET /api/count response
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    /// The queried text
    pub text: String,
    /// Claimed number of matching addresses
    pub count: u64,
}
