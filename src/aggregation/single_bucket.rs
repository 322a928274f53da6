//! Single-bucket aggregations that scope their children

use serde_json::Value;

use crate::mixin::{AggregationContainer, AggregationCore, AggregationNode};
use crate::node::accessor;
use crate::node::{guard, Category, Mixin, Node};
use crate::Result;

/// One bucket holding the documents that pass a filter
///
/// Renders as `{ <name>: { filter: <filter fragment>, aggs: {...} } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterAggregation {
    core: AggregationCore,
}

impl FilterAggregation {
    pub fn new(name: impl Into<String>, filter: &dyn Node) -> Result<Self> {
        let mut agg = Self {
            core: AggregationCore::new(name, "filter"),
        };
        agg.set_filter(filter)?;
        Ok(agg)
    }

    pub fn filter(&self) -> Value {
        Value::Object(self.core.body().clone())
    }

    pub fn set_filter(&mut self, filter: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(filter, Category::Filter, "filter")?;
        let body = guard::expect_object(&fragment)?.clone();
        self.core.replace_body(body);
        Ok(self)
    }
}

impl Mixin for FilterAggregation {
    type Core = AggregationCore;

    fn core(&self) -> &AggregationCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AggregationCore {
        &mut self.core
    }
}

impl AggregationNode for FilterAggregation {}
impl AggregationContainer for FilterAggregation {}

/// One bucket holding every document, ignoring the request query
#[derive(Clone, Debug, PartialEq)]
pub struct GlobalAggregation {
    core: AggregationCore,
}

impl GlobalAggregation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: AggregationCore::new(name, "global"),
        }
    }
}

impl Mixin for GlobalAggregation {
    type Core = AggregationCore;

    fn core(&self) -> &AggregationCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AggregationCore {
        &mut self.core
    }
}

impl AggregationNode for GlobalAggregation {}
impl AggregationContainer for GlobalAggregation {}
