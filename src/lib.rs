//! Typed builders for search-engine request documents
//!
//! Queries, filters, aggregations, score functions and suggesters are small
//! nodes that compose into the nested JSON the engine expects. Every slot
//! that accepts a child checks the child's [`node::Category`] first, so a
//! filter can never land where a query belongs.
//!
//! ```
//! use squidex_dsl::filter::TermFilter;
//! use squidex_dsl::query::{FilteredQuery, MatchQuery};
//! use squidex_dsl::request::SearchRequest;
//!
//! # fn main() -> squidex_dsl::Result<()> {
//! let mut filtered = FilteredQuery::new();
//! filtered
//!     .set_query(&MatchQuery::new("title", "rust"))?
//!     .set_filter(&TermFilter::new("lang", "en"))?;
//!
//! let mut request = SearchRequest::new();
//! request.set_query(&filtered)?.set_size(5);
//! let body = request.to_json_string()?;
//! assert!(body.starts_with(r#"{"query":{"filtered":"#));
//!
//! // A query is not a filter
//! assert!(filtered.set_filter(&MatchQuery::new("title", "go")).is_err());
//! # Ok(())
//! # }
//! ```

pub mod aggregation;
pub mod config;
pub mod error;
pub mod filter;
pub mod mixin;
pub mod node;
pub mod query;
pub mod request;
pub mod score_function;
pub mod suggester;

pub use config::{RequestProfile, RequestSettings};
pub use error::{DslError, Result};
pub use node::{Category, Node, OneOrMany};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
