//! Filtered query - scores with a query, restricts with a filter

use serde_json::Value;

use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node};
use crate::Result;

/// Query restricted by a non-scoring filter
///
/// `query` only accepts query nodes and `filter` only accepts filter nodes.
/// A missing query means "match all" on the engine side.
#[derive(Clone, Debug, PartialEq)]
pub struct FilteredQuery {
    core: QueryCore,
}

impl Default for FilteredQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl FilteredQuery {
    pub fn new() -> Self {
        Self {
            core: QueryCore::new("filtered"),
        }
    }

    pub fn query(&self) -> Option<&Value> {
        accessor::get(self.core.body(), "query")
    }

    pub fn set_query(&mut self, query: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(query, Category::Query, "query")?;
        accessor::set(self.core.body_mut(), "query", fragment);
        Ok(self)
    }

    pub fn filter(&self) -> Option<&Value> {
        accessor::get(self.core.body(), "filter")
    }

    pub fn set_filter(&mut self, filter: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(filter, Category::Filter, "filter")?;
        accessor::set(self.core.body_mut(), "filter", fragment);
        Ok(self)
    }
}

impl Mixin for FilteredQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl QueryNode for FilteredQuery {}
