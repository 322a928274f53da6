//! Exists filter - documents where a field has a value

use crate::mixin::{FilterCore, FilterNode};
use crate::node::accessor;
use crate::node::Mixin;

#[derive(Clone, Debug, PartialEq)]
pub struct ExistsFilter {
    core: FilterCore,
}

impl ExistsFilter {
    pub fn new(field: impl Into<String>) -> Self {
        let mut core = FilterCore::new("exists");
        accessor::set(core.body_mut(), "field", field.into());
        Self { core }
    }

    pub fn field(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "field")
    }

    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "field", field.into());
        self
    }
}

impl Mixin for ExistsFilter {
    type Core = FilterCore;

    fn core(&self) -> &FilterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut FilterCore {
        &mut self.core
    }
}

impl FilterNode for ExistsFilter {}
