//! Match query - full-text search with analysis

use serde_json::Value;

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;
use crate::query::types::{MatchOperator, MinimumShouldMatch};

/// Query that performs full-text search on a field
///
/// The engine analyzes the text and combines the resulting terms with the
/// configured operator.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchQuery {
    core: QueryCore,
}

impl MatchQuery {
    /// Create a new match query
    pub fn new(field: impl Into<String>, text: impl Into<String>) -> Self {
        let mut query = Self {
            core: field_core("match", field.into()),
        };
        query.set_text(text);
        query
    }

    /// Text to search for
    pub fn text(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "query"))
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "query", text.into());
        self
    }

    pub fn operator(&self) -> Option<MatchOperator> {
        spec(self).and_then(|s| accessor::get_enum(s, "operator"))
    }

    pub fn set_operator(&mut self, operator: MatchOperator) -> &mut Self {
        accessor::set(spec_mut(self), "operator", operator.as_str());
        self
    }

    pub fn analyzer(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "analyzer"))
    }

    pub fn set_analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "analyzer", analyzer.into());
        self
    }

    pub fn minimum_should_match(&self) -> Option<MinimumShouldMatch> {
        spec(self).and_then(|s| accessor::get_enum(s, "minimum_should_match"))
    }

    pub fn set_minimum_should_match(&mut self, msm: impl Into<MinimumShouldMatch>) -> &mut Self {
        let msm: MinimumShouldMatch = msm.into();
        accessor::set(spec_mut(self), "minimum_should_match", msm);
        self
    }

    /// Edit distance, either a number or `"AUTO"`
    pub fn fuzziness(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("fuzziness"))
    }

    pub fn set_fuzziness(&mut self, fuzziness: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "fuzziness", fuzziness);
        self
    }
}

impl Mixin for MatchQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for MatchQuery {}

impl QueryNode for MatchQuery {
    fn boost(&self) -> Option<f64> {
        spec(self).and_then(|s| accessor::get_f64(s, "boost"))
    }

    fn set_boost(&mut self, boost: f64) -> Result<&mut Self> {
        accessor::set_f64(spec_mut(self), "boost", boost)?;
        Ok(self)
    }

    fn name(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "_name"))
    }

    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "_name", name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    #[test]
    fn test_match_query_creation() {
        let query = MatchQuery::new("content", "rust programming");
        assert_eq!(query.field(), Some("content"));
        assert_eq!(query.text(), Some("rust programming"));
        assert_eq!(query.operator(), None);
        assert_eq!(
            query.to_fragment(),
            json!({ "match": { "content": { "query": "rust programming" } } })
        );
    }

    #[test]
    fn test_match_query_options() {
        let mut query = MatchQuery::new("content", "rust programming");
        query
            .set_operator(MatchOperator::And)
            .set_analyzer("english")
            .set_minimum_should_match("75%")
            .set_fuzziness("AUTO")
            .set_boost(2.0)
            .unwrap();

        assert_eq!(query.operator(), Some(MatchOperator::And));
        assert_eq!(
            query.minimum_should_match(),
            Some(MinimumShouldMatch::Expression("75%".into()))
        );
        assert_eq!(
            query.to_fragment(),
            json!({ "match": { "content": {
                "query": "rust programming",
                "operator": "and",
                "analyzer": "english",
                "minimum_should_match": "75%",
                "fuzziness": "AUTO",
                "boost": 2.0
            } } })
        );
    }
}
