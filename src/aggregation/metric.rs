//! Metric aggregations
//!
//! Leaves of the aggregation tree: they expose the values-source options
//! and never render an `aggs` key.

use crate::mixin::{AggregationCore, AggregationNode, MetricAggregationNode, ValuesSource};
use crate::node::accessor;
use crate::node::Mixin;

macro_rules! metric_aggregation {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            core: AggregationCore,
        }

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self {
                    core: AggregationCore::new(name, $kind),
                }
            }
        }

        impl Mixin for $name {
            type Core = AggregationCore;

            fn core(&self) -> &AggregationCore {
                &self.core
            }

            fn core_mut(&mut self) -> &mut AggregationCore {
                &mut self.core
            }
        }

        impl AggregationNode for $name {}
        impl ValuesSource for $name {}
        impl MetricAggregationNode for $name {}
    };
}

metric_aggregation!(
    /// Average of a numeric field
    AvgAggregation,
    "avg"
);
metric_aggregation!(
    /// Maximum of a numeric field
    MaxAggregation,
    "max"
);
metric_aggregation!(
    /// Minimum of a numeric field
    MinAggregation,
    "min"
);
metric_aggregation!(
    /// Sum of a numeric field
    SumAggregation,
    "sum"
);
metric_aggregation!(
    /// Count, min, max, avg and sum in one pass
    StatsAggregation,
    "stats"
);
metric_aggregation!(
    /// Number of values extracted from the documents
    ValueCountAggregation,
    "value_count"
);
metric_aggregation!(
    /// Approximate count of distinct values
    CardinalityAggregation,
    "cardinality"
);

impl CardinalityAggregation {
    /// Counts below this threshold are expected to be close to exact
    pub fn precision_threshold(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "precision_threshold")
    }

    pub fn set_precision_threshold(&mut self, threshold: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "precision_threshold", threshold);
        self
    }
}
