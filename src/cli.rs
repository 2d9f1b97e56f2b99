//! CLI argument definitions using clap

use clap::{Parser, Subcommand};

use crate::request::{SearchRequest, DEFAULT_FROM_INDEX, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};

/// Query SEC filings through the sec-api.io service
#[derive(Parser, Debug)]
#[command(name = "sec-cli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API key for sec-api.io, sent as the Authorization header
    pub api_key: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query general SEC filing data
    Query {
        /// Query in the sec-api.io query syntax, e.g. "ticker:AAPL"
        query: String,
    },

    /// Search corporate subsidiary records
    Subsidiaries {
        /// Query for subsidiary details
        query: String,

        /// Start position within the result set
        #[arg(long = "from_index", default_value_t = DEFAULT_FROM_INDEX)]
        from_index: u32,

        /// Number of results to return
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
    },

    /// Full text search over filing contents
    #[command(name = "full-text-search")]
    FullTextSearch {
        /// Words or phrases to search for
        query: String,

        /// Earliest filing date to include (yyyy-mm-dd)
        #[arg(long = "start_date")]
        start_date: Option<String>,

        /// Latest filing date to include (yyyy-mm-dd)
        #[arg(long = "end_date")]
        end_date: Option<String>,

        /// Page number of the result set
        #[arg(long, default_value_t = DEFAULT_PAGE)]
        page: u32,
    },
}

impl From<Commands> for SearchRequest {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Query { query } => SearchRequest::Query { query },
            Commands::Subsidiaries {
                query,
                from_index,
                size,
            } => SearchRequest::Subsidiaries {
                query,
                from_index,
                size,
            },
            Commands::FullTextSearch {
                query,
                start_date,
                end_date,
                page,
            } => SearchRequest::FullTextSearch {
                query,
                start_date,
                end_date,
                page,
            },
        }
    }
}
