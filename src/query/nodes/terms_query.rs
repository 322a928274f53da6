//! Terms query - matches documents containing any of the specified terms

use serde_json::Value;

use super::FieldQuery;
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::{Mixin, OneOrMany};

/// Query that matches documents containing any of the specified terms in a field
///
/// Shaped `{ terms: { <field>: [...], minimum_match, boost } }`. Passing a
/// single value to [`TermsQuery::set_terms`] appends it; passing a list
/// replaces the stored terms.
#[derive(Clone, Debug, PartialEq)]
pub struct TermsQuery {
    core: QueryCore,
}

impl TermsQuery {
    /// Create a new terms query
    pub fn new(field: impl Into<String>, terms: impl Into<OneOrMany<Value>>) -> Self {
        let mut query = Self {
            core: QueryCore::keyed("terms", field, Value::Array(Vec::new())),
        };
        query.set_terms(terms);
        query
    }

    pub fn terms(&self) -> Option<&[Value]> {
        self.core
            .field_value()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }

    pub fn set_terms(&mut self, terms: impl Into<OneOrMany<Value>>) -> &mut Self {
        if let Some(field) = self.core.field().map(str::to_owned) {
            accessor::accumulate(self.core.body_mut(), &field, terms.into());
        }
        self
    }

    /// Minimum number of terms a document must contain
    pub fn minimum_match(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "minimum_match")
    }

    pub fn set_minimum_match(&mut self, count: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "minimum_match", count);
        self
    }
}

impl Mixin for TermsQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for TermsQuery {}

impl QueryNode for TermsQuery {}
