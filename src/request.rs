//! Request construction for the three sec-api.io operations.
//!
//! Each operation maps deterministically to one endpoint path, one JSON
//! body shape, and one fixed rejection message. Nothing here validates
//! query syntax or dates; the remote server is the arbiter of those.

use serde_json::{json, Value};

/// Root of the sec-api.io API. Operation endpoints are appended to this.
pub const API_ROOT: &str = "https://api.sec-api.io";

pub const DEFAULT_FROM_INDEX: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_PAGE: u32 = 1;

/// One search operation with everything needed to build its POST request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchRequest {
    /// Structured filing query against the API root.
    Query { query: String },
    /// Subsidiary relationship search with pagination and fixed sort order.
    Subsidiaries {
        query: String,
        from_index: u32,
        size: u32,
    },
    /// Full text search over filing contents, optionally date-bounded.
    FullTextSearch {
        query: String,
        start_date: Option<String>,
        end_date: Option<String>,
        page: u32,
    },
}

impl SearchRequest {
    /// Path appended to the API root for this operation.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SearchRequest::Query { .. } => "",
            SearchRequest::Subsidiaries { .. } => "/subsidiaries",
            SearchRequest::FullTextSearch { .. } => "/full-text-search",
        }
    }

    /// JSON body for the POST request.
    ///
    /// Absent full-text dates serialize as `null`; the server treats null
    /// and omitted the same way.
    pub fn body(&self) -> Value {
        match self {
            SearchRequest::Query { query } => json!({
                "query": query,
                "format": "json",
            }),
            SearchRequest::Subsidiaries {
                query,
                from_index,
                size,
            } => json!({
                "query": query,
                "from": from_index,
                "size": size,
                "sort": default_sort(),
            }),
            SearchRequest::FullTextSearch {
                query,
                start_date,
                end_date,
                page,
            } => json!({
                "query": query,
                "startDate": start_date,
                "endDate": end_date,
                "page": page,
            }),
        }
    }

    /// Message reported when the server answers with a non-200 status.
    pub fn rejection_message(&self) -> &'static str {
        match self {
            SearchRequest::Query { .. } => "Failed to fetch data",
            SearchRequest::Subsidiaries { .. } => "Failed to fetch subsidiary information",
            SearchRequest::FullTextSearch { .. } => "Failed to perform full text search",
        }
    }
}

/// Newest filings first. Subsidiary searches always use this sort.
pub fn default_sort() -> Value {
    json!([{"filedAt": {"order": "desc"}}])
}
