//! Query filter - uses a query as a filter

use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::{Category, Fragment, Mixin, Node};
use crate::Result;

/// Wraps a query so it can sit where a filter is required
///
/// Renders as `{ query: <query fragment> }`. Replacing the query keeps any
/// `_name` / `_cache` options already set.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryFilter {
    core: FilterCore,
}

impl QueryFilter {
    pub fn new(query: &dyn Node) -> Result<Self> {
        let mut filter = Self {
            core: FilterCore::new("query"),
        };
        filter.set_query(query)?;
        Ok(filter)
    }

    /// The wrapped query fragment, without filter options
    pub fn query(&self) -> Fragment {
        self.core
            .body()
            .iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn set_query(&mut self, query: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(query, Category::Query, "query")?;
        let inner = crate::node::guard::expect_object(&fragment)?.clone();
        let body = self.core.body_mut();
        body.retain(|key, _| key.starts_with('_'));
        body.extend(inner);
        Ok(self)
    }
}

impl Mixin for QueryFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for QueryFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;
    use crate::query::{MatchAllQuery, MatchQuery};
    use serde_json::{json, Value};

    #[test]
    fn test_query_filter_wraps_query() {
        let mut filter = QueryFilter::new(&MatchQuery::new("title", "rust")).unwrap();
        filter.set_cache(true);
        assert_eq!(
            filter.to_fragment(),
            json!({ "query": {
                "match": { "title": { "query": "rust" } },
                "_cache": true
            } })
        );

        filter.set_query(&MatchAllQuery::new()).unwrap();
        assert_eq!(Value::Object(filter.query()), json!({ "match_all": {} }));
        assert_eq!(filter.cache(), Some(true));
    }

    #[test]
    fn test_query_filter_rejects_filter() {
        let err = QueryFilter::new(&TermFilter::new("a", 1)).unwrap_err();
        assert!(err.is_category_mismatch());
    }
}
