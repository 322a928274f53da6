//! Fuzzy query - matches terms within an edit distance
//!
//! # Example
//!
//! ```
//! use squidex_dsl::query::FuzzyQuery;
//!
//! // Find terms within edit distance 2 of "roust" (matches "rust")
//! let mut query = FuzzyQuery::new("content", "roust");
//! query.set_fuzziness(2);
//! ```

use serde_json::Value;

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Query that matches terms within an edit distance of the query term
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyQuery {
    core: QueryCore,
}

impl FuzzyQuery {
    /// Create a new fuzzy query; the engine's default fuzziness applies
    pub fn new(field: impl Into<String>, term: impl Into<String>) -> Self {
        let mut query = Self {
            core: field_core("fuzzy", field.into()),
        };
        accessor::set(spec_mut(&mut query), "value", term.into());
        query
    }

    pub fn term(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "value"))
    }

    pub fn set_term(&mut self, term: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "value", term.into());
        self
    }

    /// Maximum edit distance, a number or `"AUTO"`
    pub fn fuzziness(&self) -> Option<&Value> {
        spec(self).and_then(|s| s.get("fuzziness"))
    }

    pub fn set_fuzziness(&mut self, fuzziness: impl Into<Value>) -> &mut Self {
        accessor::set(spec_mut(self), "fuzziness", fuzziness);
        self
    }

    /// Number of initial characters that must match exactly
    pub fn prefix_length(&self) -> Option<u64> {
        spec(self).and_then(|s| accessor::get_u64(s, "prefix_length"))
    }

    pub fn set_prefix_length(&mut self, len: u64) -> &mut Self {
        accessor::set(spec_mut(self), "prefix_length", len);
        self
    }

    /// Maximum number of terms the query expands to
    pub fn max_expansions(&self) -> Option<u64> {
        spec(self).and_then(|s| accessor::get_u64(s, "max_expansions"))
    }

    pub fn set_max_expansions(&mut self, max: u64) -> &mut Self {
        accessor::set(spec_mut(self), "max_expansions", max);
        self
    }
}

impl Mixin for FuzzyQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for FuzzyQuery {}

impl QueryNode for FuzzyQuery {
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
    fn test_fuzzy_query_defaults() {
        let query = FuzzyQuery::new("content", "roust");
        assert_eq!(query.term(), Some("roust"));
        assert_eq!(query.fuzziness(), None);
        assert_eq!(query.prefix_length(), None);
        assert_eq!(query.max_expansions(), None);
    }

    #[test]
    fn test_fuzzy_query_options() {
        let mut query = FuzzyQuery::new("content", "roust");
        query
            .set_fuzziness("AUTO")
            .set_prefix_length(1)
            .set_max_expansions(50);
        assert_eq!(query.fuzziness(), Some(&json!("AUTO")));
        assert_eq!(
            query.to_fragment(),
            json!({ "fuzzy": { "content": {
                "value": "roust", "fuzziness": "AUTO", "prefix_length": 1, "max_expansions": 50
            } } })
        );
    }
}
