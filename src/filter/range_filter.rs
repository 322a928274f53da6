//! Range filter - bounds a field without scoring

use serde_json::Value;

use super::{field_spec, field_spec_mut, FieldFilter};
use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::{Fragment, Mixin};

#[derive(Clone, Debug, PartialEq)]
pub struct RangeFilter {
    core: FilterCore,
}

impl RangeFilter {
    /// Create an unbounded range filter
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            core: FilterCore::keyed("range", field, Fragment::new().into()),
        }
    }

    pub fn gte(&self) -> Option<&Value> {
        field_spec(self).and_then(|s| s.get("gte"))
    }

    pub fn set_gte(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(field_spec_mut(self), "gte", value);
        self
    }

    pub fn gt(&self) -> Option<&Value> {
        field_spec(self).and_then(|s| s.get("gt"))
    }

    pub fn set_gt(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(field_spec_mut(self), "gt", value);
        self
    }

    pub fn lte(&self) -> Option<&Value> {
        field_spec(self).and_then(|s| s.get("lte"))
    }

    pub fn set_lte(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(field_spec_mut(self), "lte", value);
        self
    }

    pub fn lt(&self) -> Option<&Value> {
        field_spec(self).and_then(|s| s.get("lt"))
    }

    pub fn set_lt(&mut self, value: impl Into<Value>) -> &mut Self {
        accessor::set(field_spec_mut(self), "lt", value);
        self
    }

    /// `index` or `fielddata`
    pub fn execution(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "execution")
    }

    pub fn set_execution(&mut self, execution: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "execution", execution.into());
        self
    }
}

impl Mixin for RangeFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FieldFilter for RangeFilter {}

impl FilterNode for RangeFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    #[test]
    fn test_range_filter_fragment() {
        let mut filter = RangeFilter::new("price");
        filter.set_gte(10).set_lt(100.5).set_cache(false);

        assert_eq!(filter.gte(), Some(&json!(10)));
        assert_eq!(filter.gt(), None);
        assert_eq!(
            filter.to_fragment(),
            json!({ "range": { "price": { "gte": 10, "lt": 100.5 }, "_cache": false } })
        );
    }

    #[test]
    fn test_range_filter_execution_is_not_the_field() {
        let mut filter = RangeFilter::new("price");
        filter.set_execution("fielddata").set_lte(5);
        assert_eq!(filter.field(), Some("price"));
        assert_eq!(filter.lte(), Some(&json!(5)));
        assert_eq!(filter.execution(), Some("fielddata"));
    }

    #[test]
    fn test_range_filter_on_option_named_field() {
        let mut filter = RangeFilter::new("execution");
        filter.set_gte(1).set_cache(true);
        assert_eq!(filter.field(), Some("execution"));
        assert_eq!(filter.gte(), Some(&json!(1)));
        assert_eq!(
            filter.to_fragment(),
            json!({ "range": { "execution": { "gte": 1 }, "_cache": true } })
        );

        filter.set_field("runs");
        assert_eq!(filter.field(), Some("runs"));
        assert_eq!(filter.gte(), Some(&json!(1)));
    }
}
