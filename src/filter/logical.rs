//! Logical filter combinators: `and`, `or`, `not`

use serde_json::Value;

use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node, OneOrMany};
use crate::Result;

fn add_filters(core: &mut FilterCore, filters: OneOrMany<&dyn Node>) -> Result<()> {
    let fragments = accessor::splice_all(filters, Category::Filter, "filters")?;
    accessor::accumulate(core.body_mut(), "filters", fragments);
    Ok(())
}

/// Filter matching documents that pass every child filter
#[derive(Clone, Debug, PartialEq)]
pub struct AndFilter {
    core: FilterCore,
}

impl Default for AndFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl AndFilter {
    pub fn new() -> Self {
        Self {
            core: FilterCore::new("and"),
        }
    }

    pub fn filters(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "filters")
    }

    /// Append a child filter, or replace them all with a list
    pub fn set_filters<'a>(
        &mut self,
        filters: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        add_filters(&mut self.core, filters.into())?;
        Ok(self)
    }
}

impl Mixin for AndFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for AndFilter {}

/// Filter matching documents that pass at least one child filter
#[derive(Clone, Debug, PartialEq)]
pub struct OrFilter {
    core: FilterCore,
}

impl Default for OrFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl OrFilter {
    pub fn new() -> Self {
        Self {
            core: FilterCore::new("or"),
        }
    }

    pub fn filters(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "filters")
    }

    /// Append a child filter, or replace them all with a list
    pub fn set_filters<'a>(
        &mut self,
        filters: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        add_filters(&mut self.core, filters.into())?;
        Ok(self)
    }
}

impl Mixin for OrFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for OrFilter {}

/// Filter matching documents rejected by its child filter
#[derive(Clone, Debug, PartialEq)]
pub struct NotFilter {
    core: FilterCore,
}

impl NotFilter {
    pub fn new(filter: &dyn Node) -> Result<Self> {
        let mut not = Self {
            core: FilterCore::new("not"),
        };
        not.set_filter(filter)?;
        Ok(not)
    }

    pub fn filter(&self) -> Option<&Value> {
        accessor::get(self.core.body(), "filter")
    }

    pub fn set_filter(&mut self, filter: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(filter, Category::Filter, "filter")?;
        accessor::set(self.core.body_mut(), "filter", fragment);
        Ok(self)
    }
}

impl Mixin for NotFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for NotFilter {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ExistsFilter, TermFilter};
    use crate::query::TermQuery;
    use serde_json::json;

    #[test]
    fn test_and_filter_snapshot_on_splice() {
        let mut a = TermFilter::new("status", "published");
        let b = TermFilter::new("lang", "en");

        let mut and = AndFilter::new();
        and.set_filters(&a).unwrap().set_filters(&b).unwrap();
        a.set_value("draft");

        assert_eq!(
            and.filters(),
            Some(
                &[
                    json!({ "term": { "status": "published" } }),
                    json!({ "term": { "lang": "en" } })
                ][..]
            )
        );
    }

    #[test]
    fn test_or_filter_replace() {
        let a = TermFilter::new("a", 1);
        let b = TermFilter::new("b", 2);
        let c = ExistsFilter::new("c");

        let mut or = OrFilter::new();
        or.set_filters(&a).unwrap().set_filters(&b).unwrap();
        or.set_filters(vec![&c as &dyn Node]).unwrap();
        assert_eq!(
            or.to_fragment(),
            json!({ "or": { "filters": [{ "exists": { "field": "c" } }] } })
        );
    }

    #[test]
    fn test_and_filter_rejects_query() {
        let mut and = AndFilter::new();
        let err = and.set_filters(&TermQuery::new("a", 1)).unwrap_err();
        assert!(err.is_category_mismatch());
        assert_eq!(and.to_fragment(), json!({ "and": {} }));
    }

    #[test]
    fn test_not_filter() {
        let not = NotFilter::new(&ExistsFilter::new("deleted_at")).unwrap();
        assert_eq!(
            not.to_fragment(),
            json!({ "not": { "filter": { "exists": { "field": "deleted_at" } } } })
        );
        assert!(NotFilter::new(&TermQuery::new("a", 1)).is_err());
    }
}
