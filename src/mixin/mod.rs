//! Category mixins
//!
//! Each mixin is a core struct holding the category's fragment state plus a
//! trait whose default methods implement the category's shared operations.
//! A concrete node embeds the core, implements [`crate::node::Mixin`] to
//! expose it, and opts into the matching traits.

mod aggregation;
mod filter;
mod query;
mod score_function;
mod suggester;

pub use aggregation::{
    AggregationContainer, AggregationCore, AggregationNode, BucketAggregationNode,
    MetricAggregationNode, ValuesSource,
};
pub use filter::{FilterCore, FilterNode};
pub use query::{QueryCore, QueryNode};
pub use score_function::{ScoreFunctionCore, ScoreFunctionNode};
pub use suggester::{
    DirectSettings, StringDistance, SuggestContext, SuggestMode, SuggestSort, SuggesterCore,
    SuggesterNode,
};
