//! Term query - exact match on a field

use serde_json::Value;

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Query that matches documents containing an exact term in a field
///
/// Renders as `{ "term": { <field>: { "term": <value> } } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    core: QueryCore,
}

impl TermQuery {
    /// Create a new term query
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut query = Self {
            core: field_core("term", field.into()),
        };
        accessor::set(spec_mut(&mut query), "term", value);
        query
    }

    /// Exact term to match
    pub fn value(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("term"))
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "term", value);
        self
    }
}

impl Mixin for TermQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for TermQuery {}

impl QueryNode for TermQuery {
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
    use crate::node::{Category, Node};
    use serde_json::json;

    #[test]
    fn test_term_query_creation() {
        let query = TermQuery::new("status", "active");
        assert_eq!(query.field(), Some("status"));
        assert_eq!(query.value(), Some(&json!("active")));
        assert_eq!(query.boost(), None);
        assert_eq!(query.category(), Category::Query);
        assert_eq!(
            query.to_fragment(),
            json!({ "term": { "status": { "term": "active" } } })
        );
    }

    #[test]
    fn test_term_query_field_rename() {
        let mut query = TermQuery::new("status", "active");
        query.set_field("state");
        assert_eq!(query.field(), Some("state"));
        assert_eq!(
            query.to_fragment(),
            json!({ "term": { "state": { "term": "active" } } })
        );
    }

    #[test]
    fn test_term_query_boost_lives_in_field_spec() {
        let mut query = TermQuery::new("title", "rust");
        query.set_boost(2.5).unwrap().set_name("title_match");
        assert_eq!(query.boost(), Some(2.5));
        assert_eq!(query.name(), Some("title_match"));
        assert_eq!(
            query.to_fragment(),
            json!({ "term": { "title": { "term": "rust", "boost": 2.5, "_name": "title_match" } } })
        );
    }

    #[test]
    fn test_term_query_numeric_value() {
        let mut query = TermQuery::new("year", 2024);
        assert_eq!(query.value(), Some(&json!(2024)));
        query.set_value(2025);
        assert_eq!(query.value(), Some(&json!(2025)));
    }

    #[test]
    fn test_term_query_serialization_is_idempotent() {
        let query = TermQuery::new("title", "rust");
        assert_eq!(query.to_fragment(), query.to_fragment());
        assert_eq!(
            query.to_json_string().unwrap(),
            r#"{"term":{"title":{"term":"rust"}}}"#
        );
    }
}
