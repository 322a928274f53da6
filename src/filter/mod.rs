//! Filter node builders
//!
//! Filters restrict the matched set without scoring. Every filter carries
//! the `_name`, `_cache` and `_cache_key` options of
//! [`crate::mixin::FilterNode`].

mod bool_filter;
mod exists_filter;
mod geo_distance_filter;
mod logical;
mod match_all_filter;
mod query_filter;
mod range_filter;
mod term_filter;

pub use bool_filter::BoolFilter;
pub use exists_filter::ExistsFilter;
pub use geo_distance_filter::GeoDistanceFilter;
pub use logical::{AndFilter, NotFilter, OrFilter};
pub use match_all_filter::MatchAllFilter;
pub use query_filter::QueryFilter;
pub use range_filter::RangeFilter;
pub use term_filter::TermFilter;

use crate::mixin::FilterCore;
use crate::node::{Fragment, Mixin};

/// Filters shaped `{ <kind>: { <field>: ..., _cache: ... } }`
///
/// The core remembers which key is the field, so option keys beside it
/// never shadow it, and `_`-prefixed fields such as `_type` still work.
pub trait FieldFilter: Mixin<Core = FilterCore> + Sized {
    fn field(&self) -> Option<&str> {
        self.core().field()
    }

    /// Rename the field, keeping its value
    fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.core_mut().rename_field(field);
        self
    }
}

pub(crate) fn field_spec<N: FieldFilter>(node: &N) -> Option<&Fragment> {
    node.core().field_value().and_then(|value| value.as_object())
}

pub(crate) fn field_spec_mut<N: FieldFilter>(node: &mut N) -> &mut Fragment {
    node.core_mut().field_object_mut()
}
