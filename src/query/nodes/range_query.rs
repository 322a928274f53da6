//! Range query - matches documents with field values in a range

use serde_json::Value;

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Query that matches documents with field values within a range
///
/// Bounds accept numbers or strings (dates, keywords).
#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    core: QueryCore,
}

impl RangeQuery {
    /// Create an unbounded range query
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            core: field_core("range", field.into()),
        }
    }

    /// Greater than or equal to
    pub fn gte(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("gte"))
    }

    pub fn set_gte(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "gte", value);
        self
    }

    /// Greater than
    pub fn gt(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("gt"))
    }

    pub fn set_gt(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "gt", value);
        self
    }

    /// Less than or equal to
    pub fn lte(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("lte"))
    }

    pub fn set_lte(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "lte", value);
        self
    }

    /// Less than
    pub fn lt(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("lt"))
    }

    pub fn set_lt(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "lt", value);
        self
    }

    /// Date format used to parse string bounds
    pub fn format(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "format"))
    }

    pub fn set_format(&mut self, format: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "format", format.into());
        self
    }

    /// Check if this range is unbounded on the lower end
    pub fn is_unbounded_lower(&self) -> bool {
        self.gte().is_none() && self.gt().is_none()
    }

    /// Check if this range is unbounded on the upper end
    pub fn is_unbounded_upper(&self) -> bool {
        self.lte().is_none() && self.lt().is_none()
    }
}

impl Mixin for RangeQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for RangeQuery {}

impl QueryNode for RangeQuery {
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
    fn test_range_query_unbounded() {
        let query = RangeQuery::new("year");
        assert!(query.is_unbounded_lower());
        assert!(query.is_unbounded_upper());
        assert_eq!(query.to_fragment(), json!({ "range": { "year": {} } }));
    }

    #[test]
    fn test_range_query_bounds() {
        let mut query = RangeQuery::new("year");
        query.set_gte(2020).set_lt(2025).set_boost(1.5).unwrap();

        assert_eq!(query.gte(), Some(&json!(2020)));
        assert_eq!(query.lt(), Some(&json!(2025)));
        assert!(!query.is_unbounded_lower());
        assert!(!query.is_unbounded_upper());
        assert_eq!(
            query.to_fragment(),
            json!({ "range": { "year": { "gte": 2020, "lt": 2025, "boost": 1.5 } } })
        );
    }

    #[test]
    fn test_range_query_dates() {
        let mut query = RangeQuery::new("created_at");
        query.set_gt("2024-01-01").set_format("yyyy-MM-dd");
        assert_eq!(query.format(), Some("yyyy-MM-dd"));
        assert!(query.is_unbounded_upper());
    }
}
