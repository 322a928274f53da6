//! Boolean filter - must / should / must_not over filters

use serde_json::Value;

use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::{Category, Mixin, Node, OneOrMany};
use crate::Result;

/// Boolean combination of filters
///
/// Same clause layout as [`crate::query::BoolQuery`], but every slot
/// accepts filter nodes only.
#[derive(Clone, Debug, PartialEq)]
pub struct BoolFilter {
    core: FilterCore,
}

impl Default for BoolFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoolFilter {
    pub fn new() -> Self {
        Self {
            core: FilterCore::new("bool"),
        }
    }

    pub fn must(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "must")
    }

    pub fn set_must<'a>(&mut self, filters: impl Into<OneOrMany<&'a dyn Node>>) -> Result<&mut Self> {
        self.add_clauses("must", filters.into())
    }

    pub fn should(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "should")
    }

    pub fn set_should<'a>(
        &mut self,
        filters: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        self.add_clauses("should", filters.into())
    }

    pub fn must_not(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "must_not")
    }

    pub fn set_must_not<'a>(
        &mut self,
        filters: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        self.add_clauses("must_not", filters.into())
    }

    fn add_clauses(&mut self, slot: &'static str, filters: OneOrMany<&dyn Node>) -> Result<&mut Self> {
        let clauses = accessor::splice_all(filters, Category::Filter, slot)?;
        accessor::accumulate(self.core.body_mut(), slot, clauses);
        Ok(self)
    }
}

impl Mixin for BoolFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for BoolFilter {}
