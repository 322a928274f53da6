//! Term filter - exact value match without scoring

use serde_json::Value;

use super::FieldFilter;
use crate::mixin::{FilterCore, FilterNode};
use crate::node::Mixin;

/// Filter matching documents whose field holds exactly `value`
///
/// Renders as `{ term: { <field>: <value> } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct TermFilter {
    core: FilterCore,
}

impl TermFilter {
    pub fn new(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            core: FilterCore::keyed("term", field, value.into()),
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.core.field_value()
    }

    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        self.core.set_field_value(value.into());
        self
    }
}

impl Mixin for TermFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FieldFilter for TermFilter {}

impl FilterNode for TermFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Category, Node};
    use serde_json::json;

    #[test]
    fn test_term_filter_fragment() {
        let filter = TermFilter::new("status", "published");
        assert_eq!(filter.category(), Category::Filter);
        assert_eq!(filter.field(), Some("status"));
        assert_eq!(filter.value(), Some(&json!("published")));
        assert_eq!(filter.to_fragment(), json!({ "term": { "status": "published" } }));
    }

    #[test]
    fn test_term_filter_cache_options_do_not_hide_field() {
        let mut filter = TermFilter::new("status", "published");
        filter.set_cache(true).set_cache_key("pub").set_name("published");
        filter.set_field("state").set_value("draft");

        assert_eq!(filter.field(), Some("state"));
        assert_eq!(filter.cache(), Some(true));
        assert_eq!(
            filter.to_fragment(),
            json!({ "term": {
                "state": "draft", "_cache": true, "_cache_key": "pub", "_name": "published"
            } })
        );
    }

    #[test]
    fn test_term_filter_on_meta_field() {
        let mut filter = TermFilter::new("_type", "post");
        assert_eq!(filter.field(), Some("_type"));
        assert_eq!(filter.value(), Some(&json!("post")));

        filter.set_value("page").set_cache(true);
        assert_eq!(
            filter.to_fragment(),
            json!({ "term": { "_type": "page", "_cache": true } })
        );
    }
}
