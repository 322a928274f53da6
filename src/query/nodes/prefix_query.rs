//! Prefix query - matches terms starting with a prefix

use super::{field_core, spec, spec_mut, FieldQuery};
use crate::mixin::{QueryCore, QueryNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Query that matches terms starting with a prefix
#[derive(Clone, Debug, PartialEq)]
pub struct PrefixQuery {
    core: QueryCore,
}

impl PrefixQuery {
    /// Create a new prefix query
    pub fn new(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        let mut query = Self {
            core: field_core("prefix", field.into()),
        };
        accessor::set(spec_mut(&mut query), "value", prefix.into());
        query
    }

    pub fn prefix(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "value"))
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "value", prefix.into());
        self
    }

    /// Multi-term rewrite method, e.g. `constant_score_auto`
    pub fn rewrite(&self) -> Option<&str> {
        spec(self).and_then(|s| accessor::get_str(s, "rewrite"))
    }

    pub fn set_rewrite(&mut self, rewrite: impl Into<String>) -> &mut Self {
        accessor::set(spec_mut(self), "rewrite", rewrite.into());
        self
    }
}

impl Mixin for PrefixQuery {
    type Core = QueryCore;

    fn core(&self) -> &QueryCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut QueryCore {
        &mut self.core
    }
}

impl FieldQuery for PrefixQuery {}

impl QueryNode for PrefixQuery {
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
