//! Match-all filter

use crate::mixin::{FilterCore, FilterNode};
use crate::node::Mixin;

/// Filter that keeps every document
#[derive(Clone, Debug, PartialEq)]
pub struct MatchAllFilter {
    core: FilterCore,
}

impl Default for MatchAllFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchAllFilter {
    pub fn new() -> Self {
        Self {
            core: FilterCore::new("match_all"),
        }
    }
}

impl Mixin for MatchAllFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for MatchAllFilter {}
