//! Multi-bucket aggregations

use serde_json::Value;

use crate::mixin::{
    AggregationContainer, AggregationCore, AggregationNode, BucketAggregationNode, ValuesSource,
};
use crate::node::accessor;
use crate::node::{Fragment, Mixin};
use crate::request::SortOrder;
use crate::{DslError, Result};

/// One bucket per distinct term of a field
#[derive(Clone, Debug, PartialEq)]
pub struct TermsAggregation {
    core: AggregationCore,
}

impl TermsAggregation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: AggregationCore::new(name, "terms"),
        }
    }

    /// Number of buckets returned
    pub fn size(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "size")
    }

    pub fn set_size(&mut self, size: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "size", size);
        self
    }

    /// Number of buckets each shard returns to the coordinator
    pub fn shard_size(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "shard_size")
    }

    pub fn set_shard_size(&mut self, size: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "shard_size", size);
        self
    }

    pub fn min_doc_count(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "min_doc_count")
    }

    pub fn set_min_doc_count(&mut self, count: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "min_doc_count", count);
        self
    }

    /// Bucket ordering, e.g. `{ "_count": "desc" }`
    pub fn order(&self) -> Option<&Fragment> {
        accessor::get_object(self.core.body(), "order")
    }

    /// Order buckets by `key` (`_count`, `_term` or a sub-aggregation path)
    pub fn set_order(&mut self, key: impl Into<String>, order: SortOrder) -> &mut Self {
        let mut spec = Fragment::new();
        spec.insert(key.into(), Value::from(order.as_str()));
        accessor::set(self.core.body_mut(), "order", Value::Object(spec));
        self
    }

    /// Regex pattern of terms to keep
    pub fn include(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "include")
    }

    pub fn set_include(&mut self, pattern: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "include", pattern.into());
        self
    }

    /// Regex pattern of terms to drop
    pub fn exclude(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "exclude")
    }

    pub fn set_exclude(&mut self, pattern: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "exclude", pattern.into());
        self
    }
}

impl Mixin for TermsAggregation {
    type Core = AggregationCore;

    fn core(&self) -> &AggregationCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AggregationCore {
        &mut self.core
    }
}

impl AggregationNode for TermsAggregation {}
impl AggregationContainer for TermsAggregation {}
impl ValuesSource for TermsAggregation {}
impl BucketAggregationNode for TermsAggregation {}

/// Fixed-width numeric buckets
#[derive(Clone, Debug, PartialEq)]
pub struct HistogramAggregation {
    core: AggregationCore,
}

impl HistogramAggregation {
    /// Histogram over `field` with buckets `interval` wide
    ///
    /// Fails when the interval is not a positive number.
    pub fn new(name: impl Into<String>, field: impl Into<String>, interval: f64) -> Result<Self> {
        let mut agg = Self {
            core: AggregationCore::new(name, "histogram"),
        };
        agg.set_field(field);
        agg.set_interval(interval)?;
        Ok(agg)
    }

    pub fn interval(&self) -> Option<f64> {
        accessor::get_f64(self.core.body(), "interval")
    }

    pub fn set_interval(&mut self, interval: f64) -> Result<&mut Self> {
        if !(interval.is_finite() && interval > 0.0) {
            return Err(DslError::InvalidArgument(format!(
                "histogram interval must be positive, got {interval}"
            )));
        }
        accessor::set(self.core.body_mut(), "interval", interval);
        Ok(self)
    }

    pub fn min_doc_count(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "min_doc_count")
    }

    pub fn set_min_doc_count(&mut self, count: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "min_doc_count", count);
        self
    }

    /// Force buckets to cover `[min, max]` even when empty
    pub fn extended_bounds(&self) -> Option<&Fragment> {
        accessor::get_object(self.core.body(), "extended_bounds")
    }

    pub fn set_extended_bounds(&mut self, min: f64, max: f64) -> Result<&mut Self> {
        let mut bounds = Fragment::new();
        bounds.insert("min".to_string(), accessor::finite("min", min)?);
        bounds.insert("max".to_string(), accessor::finite("max", max)?);
        accessor::set(self.core.body_mut(), "extended_bounds", Value::Object(bounds));
        Ok(self)
    }
}

impl Mixin for HistogramAggregation {
    type Core = AggregationCore;

    fn core(&self) -> &AggregationCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut AggregationCore {
        &mut self.core
    }
}

impl AggregationNode for HistogramAggregation {}
impl AggregationContainer for HistogramAggregation {}
impl ValuesSource for HistogramAggregation {}
impl BucketAggregationNode for HistogramAggregation {}
