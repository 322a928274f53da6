//! Query node builders
//!
//! Each query renders as `{ <kind>: { ... } }` and only nests where a query
//! is accepted.
//!
//! # Example
//!
//! ```
//! use squidex_dsl::query::{BoolQuery, MatchQuery, RangeQuery};
//! use squidex_dsl::node::Node;
//! use serde_json::json;
//!
//! # fn main() -> squidex_dsl::Result<()> {
//! let mut recent = RangeQuery::new("created_at");
//! recent.set_gte("2024-01-01");
//!
//! let mut query = BoolQuery::new();
//! query
//!     .set_must(&MatchQuery::new("content", "rust programming"))?
//!     .set_must(&recent)?;
//!
//! assert_eq!(
//!     query.to_fragment(),
//!     json!({ "bool": { "must": [
//!         { "match": { "content": { "query": "rust programming" } } },
//!         { "range": { "created_at": { "gte": "2024-01-01" } } }
//!     ] } })
//! );
//! # Ok(())
//! # }
//! ```

pub mod nodes;
pub mod types;

pub use nodes::{
    BoolQuery, ConstantScoreQuery, FieldQuery, FilteredQuery, FunctionScoreQuery, FuzzyQuery,
    MatchAllQuery, MatchQuery, PhraseQuery, PrefixQuery, RangeQuery, TermQuery, TermsQuery,
    WildcardQuery,
};
pub use types::*;
