//! Constant score query - wraps a query or filter with a fixed score

use serde_json::Value;

use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node};
use crate::Result;

/// Every matching document receives the query's `boost` as its score
///
/// Wraps either a filter (stored under `filter`) or a query (stored under
/// `query`). Setting one does not clear the other.
#[derive(Clone, Debug, PartialEq)]
pub struct ConstantScoreQuery {
    core: QueryCore,
}

impl ConstantScoreQuery {
    /// Wrap a filter or query node
    pub fn new(inner: &dyn Node) -> Result<Self> {
        let mut query = Self {
            core: QueryCore::new("constant_score"),
        };
        query.set_inner(inner)?;
        Ok(query)
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

    /// Store a node under `query` or `filter` depending on its category
    pub fn set_inner(&mut self, inner: &dyn Node) -> Result<&mut Self> {
        match crate::node::guard::expect_any(inner, &[Category::Filter, Category::Query])? {
            Category::Filter => self.set_filter(inner),
            _ => self.set_query(inner),
        }
    }
}

impl Mixin for ConstantScoreQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl QueryNode for ConstantScoreQuery {}
