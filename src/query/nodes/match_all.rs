//! Match-all query - matches every document

use crate::mixin::{QueryCore, QueryNode};
use crate::node::Mixin;

/// Query that matches all documents with a constant score
///
/// Useful for filtering-only queries or as the base of a
/// `function_score` query.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchAllQuery {
    core: QueryCore,
}

impl Default for MatchAllQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchAllQuery {
    pub fn new() -> Self {
        Self {
            core: QueryCore::new("match_all"),
        }
    }
}

impl Mixin for MatchAllQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl QueryNode for MatchAllQuery {}
