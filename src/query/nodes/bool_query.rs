//! Boolean query - combines multiple clauses with AND, OR, NOT semantics

use serde_json::Value;

use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node, OneOrMany};
use crate::query::types::MinimumShouldMatch;
use crate::Result;

const CLAUSES: [&str; 3] = ["must", "should", "must_not"];

/// Boolean query combining multiple clauses
///
/// The boolean query supports three types of clauses:
/// - `must`: All clauses must match (AND). Contributes to score.
/// - `should`: At least one clause should match (OR). Contributes to score.
/// - `must_not`: No clause must match (NOT). Does not contribute to score.
///
/// Every clause slot only accepts query nodes.
///
/// # Example
///
/// ```
/// use squidex_dsl::query::{BoolQuery, MatchQuery, TermQuery};
/// use squidex_dsl::node::Node;
///
/// # fn main() -> squidex_dsl::Result<()> {
/// let mut query = BoolQuery::new();
/// query
///     .set_must(&MatchQuery::new("content", "rust programming"))?
///     .set_should(&TermQuery::new("tags", "tutorial"))?
///     .set_must_not(&TermQuery::new("status", "draft"))?;
/// assert_eq!(query.clause_count(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct BoolQuery {
    core: QueryCore,
}

impl Default for BoolQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl BoolQuery {
    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self {
            core: QueryCore::new("bool"),
        }
    }

    pub fn must(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "must")
    }

    /// Add a must clause, or replace them all with a list
    pub fn set_must<'a>(&mut self, queries: impl Into<OneOrMany<&'a dyn Node>>) -> Result<&mut Self> {
        self.add_clauses("must", queries.into())
    }

    pub fn should(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "should")
    }

    /// Add a should clause, or replace them all with a list
    pub fn set_should<'a>(&mut self, queries: impl Into<OneOrMany<&'a dyn Node>>) -> Result<&mut Self> {
        self.add_clauses("should", queries.into())
    }

    pub fn must_not(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "must_not")
    }

    /// Add a must_not clause, or replace them all with a list
    pub fn set_must_not<'a>(
        &mut self,
        queries: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        self.add_clauses("must_not", queries.into())
    }

    /// Minimum number of should clauses that must match
    pub fn minimum_number_should_match(&self) -> Option<MinimumShouldMatch> {
        accessor::get_enum(self.core.body(), "minimum_number_should_match")
    }

    pub fn set_minimum_number_should_match(
        &mut self,
        msm: impl Into<MinimumShouldMatch>,
    ) -> &mut Self {
        let msm: MinimumShouldMatch = msm.into();
        accessor::set(self.core.body_mut(), "minimum_number_should_match", msm);
        self
    }

    pub fn disable_coord(&self) -> Option<bool> {
        accessor::get_bool(self.core.body(), "disable_coord")
    }

    pub fn set_disable_coord(&mut self, disable: bool) -> &mut Self {
        accessor::set(self.core.body_mut(), "disable_coord", disable);
        self
    }

    /// Check if this is an empty query
    pub fn is_empty(&self) -> bool {
        self.clause_count() == 0
    }

    /// Get total number of clauses
    pub fn clause_count(&self) -> usize {
        CLAUSES
            .iter()
            .filter_map(|slot| accessor::get_array(self.core.body(), slot))
            .map(<[Value]>::len)
            .sum()
    }

    fn add_clauses(&mut self, slot: &'static str, queries: OneOrMany<&dyn Node>) -> Result<&mut Self> {
        let clauses = accessor::splice_all(queries, Category::Query, slot)?;
        accessor::accumulate(self.core.body_mut(), slot, clauses);
        Ok(self)
    }
}

impl Mixin for BoolQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl QueryNode for BoolQuery {}
