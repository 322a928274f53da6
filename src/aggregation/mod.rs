//! Aggregation node builders
//!
//! Bucket and single-bucket aggregations implement
//! [`crate::mixin::AggregationContainer`] and can nest children; metric
//! aggregations are leaves.
//!
//! # Example
//!
//! ```
//! use squidex_dsl::aggregation::{AvgAggregation, TermsAggregation};
//! use squidex_dsl::mixin::{AggregationContainer, ValuesSource};
//! use squidex_dsl::node::Node;
//! use serde_json::json;
//!
//! # fn main() -> squidex_dsl::Result<()> {
//! let mut avg_price = AvgAggregation::new("avg_price");
//! avg_price.set_field("price");
//!
//! let mut by_brand = TermsAggregation::new("by_brand");
//! by_brand.set_field("brand").set_size(5);
//! by_brand.add_aggregation(&avg_price)?;
//!
//! assert_eq!(
//!     by_brand.to_fragment(),
//!     json!({ "by_brand": {
//!         "terms": { "field": "brand", "size": 5 },
//!         "aggs": { "avg_price": { "avg": { "field": "price" } } }
//!     } })
//! );
//! # Ok(())
//! # }
//! ```

mod bucket;
mod metric;
mod single_bucket;

pub use bucket::{HistogramAggregation, TermsAggregation};
pub use metric::{
    AvgAggregation, CardinalityAggregation, MaxAggregation, MinAggregation, StatsAggregation,
    SumAggregation, ValueCountAggregation,
};
pub use single_bucket::{FilterAggregation, GlobalAggregation};
