//! Wildcard query - matches terms using wildcards
//!
//! `*` matches any character sequence, `?` matches exactly one character.

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct WildcardQuery {
    core: QueryCore,
}

impl WildcardQuery {
    /// Create a new wildcard query
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        let mut query = Self {
            core: field_core("wildcard", field.into()),
        };
        accessor::set(spec_mut(&mut query), "value", pattern.into());
        query
    }

    pub fn pattern(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "value"))
    }

    pub fn set_pattern(&mut self, pattern: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "value", pattern.into());
        self
    }
}

impl Mixin for WildcardQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for WildcardQuery {}

impl QueryNode for WildcardQuery {
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
    fn test_wildcard_query_fragment() {
        let mut query = WildcardQuery::new("title", "prog*");
        query.set_pattern("pro?ram*").set_boost(2.0).unwrap();
        assert_eq!(query.pattern(), Some("pro?ram*"));
        assert_eq!(
            query.to_fragment(),
            json!({ "wildcard": { "title": { "value": "pro?ram*", "boost": 2.0 } } })
        );
    }
}
