//! Function score query - rescores matches with score functions
//!
//! # Example
//!
//! ```
//! use squidex_dsl::query::{BoostMode, FunctionScoreQuery, MatchQuery};
//! use squidex_dsl::score_function::{FieldValueFactorFunction, RandomScoreFunction};
//!
//! # fn main() -> squidex_dsl::Result<()> {
//! let mut query = FunctionScoreQuery::new();
//! query
//!     .set_query(&MatchQuery::new("title", "rust"))?
//!     .set_functions(&FieldValueFactorFunction::new("popularity"))?
//!     .set_functions(&RandomScoreFunction::new())?
//!     .set_boost_mode(BoostMode::Sum);
//! assert_eq!(query.functions().map(<[_]>::len), Some(2));
//! # Ok(())
//! # }
//! ```

use serde_json::Value;

use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node, OneOrMany};
use crate::query::types::{BoostMode, ScoreMode};
use crate::Result;

/// Query whose scores are adjusted by a list of score functions
///
/// The base set of documents comes from `query` or `filter`; with neither,
/// every document matches.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionScoreQuery {
    core: QueryCore,
}

impl Default for FunctionScoreQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionScoreQuery {
    pub fn new() -> Self {
        Self {
            core: QueryCore::new("function_score"),
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

    pub fn functions(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "functions")
    }

    /// Append a score function, or replace them all with a list
    pub fn set_functions<'a>(
        &mut self,
        functions: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        let fragments =
            accessor::splice_all(functions.into(), Category::ScoreFunction, "functions")?;
        accessor::accumulate(self.core.body_mut(), "functions", fragments);
        Ok(self)
    }

    pub fn boost_mode(&self) -> Option<BoostMode> {
        accessor::get_enum(self.core.body(), "boost_mode")
    }

    pub fn set_boost_mode(&mut self, mode: BoostMode) -> &mut Self {
        accessor::set(self.core.body_mut(), "boost_mode", mode.as_str());
        self
    }

    pub fn score_mode(&self) -> Option<ScoreMode> {
        accessor::get_enum(self.core.body(), "score_mode")
    }

    pub fn set_score_mode(&mut self, mode: ScoreMode) -> &mut Self {
        accessor::set(self.core.body_mut(), "score_mode", mode.as_str());
        self
    }

    /// Upper bound on the computed function score
    pub fn max_boost(&self) -> Option<f64> {
        accessor::get_f64(self.core.body(), "max_boost")
    }

    pub fn set_max_boost(&mut self, max: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "max_boost", max)?;
        Ok(self)
    }
}

impl Mixin for FunctionScoreQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl QueryNode for FunctionScoreQuery {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use crate::mixin::ScoreFunctionNode;
    use crate::query::MatchAllQuery;
    use crate::score_function::{BoostFactorScoreFunction, RandomScoreFunction};
    use serde_json::json;

    #[test]
    fn test_function_score_fragment() {
        let mut boost = BoostFactorScoreFunction::new(2.0).unwrap();
        boost
            .set_filter(&TermFilter::new("featured", true))
            .unwrap();

        let mut query = FunctionScoreQuery::new();
        query
            .set_query(&MatchAllQuery::new())
            .unwrap()
            .set_functions(&boost)
            .unwrap()
            .set_score_mode(ScoreMode::Sum)
            .set_boost_mode(BoostMode::Replace)
            .set_max_boost(10.0)
            .unwrap();

        assert_eq!(query.score_mode(), Some(ScoreMode::Sum));
        assert_eq!(query.boost_mode(), Some(BoostMode::Replace));
        assert_eq!(
            query.to_fragment(),
            json!({ "function_score": {
                "query": { "match_all": {} },
                "functions": [
                    { "boost_factor": 2.0, "filter": { "term": { "featured": true } } }
                ],
                "score_mode": "sum",
                "boost_mode": "replace",
                "max_boost": 10.0
            } })
        );
    }

    #[test]
    fn test_function_score_rejects_query_as_function() {
        let mut query = FunctionScoreQuery::new();
        let err = query.set_functions(&MatchAllQuery::new()).unwrap_err();
        assert!(err.is_category_mismatch());
        assert_eq!(query.functions(), None);
    }

    #[test]
    fn test_function_score_replace_functions() {
        let random = RandomScoreFunction::new();
        let boost = BoostFactorScoreFunction::new(3.0).unwrap();
        let mut query = FunctionScoreQuery::new();
        query.set_functions(&random).unwrap();
        query.set_functions(vec![&boost as &dyn Node]).unwrap();
        assert_eq!(query.functions(), Some(&[json!({ "boost_factor": 3.0 })][..]));
    }
}
