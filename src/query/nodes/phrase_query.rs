//! Phrase query - matches exact phrases with optional proximity/slop
//!
//! # Example
//!
//! ```
//! use squidex_dsl::query::PhraseQuery;
//!
//! // Phrase with slop (allows 2 terms between)
//! let mut query = PhraseQuery::new("content", "rust programming");
//! query.set_slop(2);
//! assert_eq!(query.slop(), Some(2));
//! ```

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Query that matches an exact phrase of terms (`match_phrase`)
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseQuery {
    core: QueryCore,
}

impl PhraseQuery {
    /// Create a new phrase query
    pub fn new(field: impl Into<String>, phrase: impl Into<String>) -> Self {
        let mut query = Self {
            core: field_core("match_phrase", field.into()),
        };
        accessor::set(spec_mut(&mut query), "query", phrase.into());
        query
    }

    pub fn phrase(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "query"))
    }

    pub fn set_phrase(&mut self, phrase: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "query", phrase.into());
        self
    }

    /// Maximum number of positions allowed between phrase terms
    pub fn slop(&self) -> Option<u64> {
        spec(self).and_then(|s| accessor::get_u64(s, "slop"))
    }

    pub fn set_slop(&mut self, slop: u64) -> &mut Self {
        accessor::set(spec_mut(self), "slop", slop);
        self
    }

    pub fn analyzer(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "analyzer"))
    }

    pub fn set_analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "analyzer", analyzer.into());
        self
    }
}

impl Mixin for PhraseQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for PhraseQuery {}

impl QueryNode for PhraseQuery {
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
    fn test_phrase_query_fragment() {
        let mut query = PhraseQuery::new("content", "rust programming");
        assert_eq!(query.slop(), None);
        query.set_slop(1).set_boost(2.5).unwrap();

        assert_eq!(query.phrase(), Some("rust programming"));
        assert_eq!(
            query.to_fragment(),
            json!({ "match_phrase": { "content": {
                "query": "rust programming", "slop": 1, "boost": 2.5
            } } })
        );
    }
}
