//! Aggregation mixins
//!
//! Every aggregation renders as `{ <name>: { <type>: { ... }, aggs: { ... } } }`.
//! Only [`AggregationContainer`] implementors can attach children; metric
//! aggregations are leaves and do not implement it, so attaching a child to
//! one is rejected by the compiler:
//!
//! ```compile_fail
//! use squidex_dsl::aggregation::{MaxAggregation, TermsAggregation};
//! use squidex_dsl::mixin::AggregationContainer;
//!
//! let mut max = MaxAggregation::new("max_price");
//! let by_tag = TermsAggregation::new("by_tag");
//! max.add_aggregation(&by_tag).unwrap();
//! ```

use serde_json::Value;

use crate::node::accessor;
use crate::node::{guard, Category, Composite, Fragment, Mixin, Node};
use crate::Result;

/// Shared state of aggregation nodes
#[derive(Clone, Debug, PartialEq)]
pub struct AggregationCore {
    name: String,
    kind: &'static str,
    body: Fragment,
    children: Fragment,
}

impl AggregationCore {
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            kind,
            body: Fragment::new(),
            children: Fragment::new(),
        }
    }

    /// Caller-supplied name the fragment is nested under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire type key, e.g. `"terms"`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn body(&self) -> &Fragment {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Fragment {
        &mut self.body
    }

    /// Replace the whole type body (filter aggregations embed a filter)
    pub fn replace_body(&mut self, body: Fragment) {
        self.body = body;
    }

    pub fn children(&self) -> &Fragment {
        &self.children
    }

    fn merge_children(&mut self, children: Fragment) {
        for (name, child) in children {
            self.children.insert(name, child);
        }
    }
}

impl Composite for AggregationCore {
    const CATEGORY: Category = Category::Aggregation;

    fn fragment(&self) -> Value {
        let mut inner = Fragment::new();
        inner.insert(self.kind.to_string(), Value::Object(self.body.clone()));
        if !self.children.is_empty() {
            inner.insert("aggs".to_string(), Value::Object(self.children.clone()));
        }
        accessor::wrap(&self.name, Value::Object(inner))
    }
}

/// Operations common to every aggregation
pub trait AggregationNode: Mixin<Core = AggregationCore> + Sized {
    fn name(&self) -> &str {
        self.core().name()
    }

    fn agg_type(&self) -> &'static str {
        self.core().kind()
    }
}

/// Aggregations that may nest child aggregations
pub trait AggregationContainer: AggregationNode {
    /// Attach a child aggregation under `aggs`
    ///
    /// Children are merged by name: attaching a second child with the same
    /// name replaces only that entry.
    fn add_aggregation(&mut self, child: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(child, Category::Aggregation, "aggs")?;
        let children = guard::expect_object(&fragment)?.clone();
        self.core_mut().merge_children(children);
        Ok(self)
    }

    /// Attached children keyed by name, absent when there are none
    fn aggregations(&self) -> Option<&Fragment> {
        let children = self.core().children();
        (!children.is_empty()).then_some(children)
    }
}

/// Field or script an aggregation draws its values from
pub trait ValuesSource: AggregationNode {
    fn field(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "field")
    }

    fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "field", field.into());
        self
    }

    fn script(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "script")
    }

    fn set_script(&mut self, script: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "script", script.into());
        self
    }

    /// Script language
    fn lang(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "lang")
    }

    fn set_lang(&mut self, lang: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "lang", lang.into());
        self
    }

    /// Script parameters
    fn params(&self) -> Option<&Fragment> {
        accessor::get_object(self.core().body(), "params")
    }

    fn set_params(&mut self, params: Fragment) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "params", Value::Object(params));
        self
    }
}

/// Aggregations that partition documents into buckets
pub trait BucketAggregationNode: AggregationContainer + ValuesSource {}

/// Aggregations that compute a value over their documents
pub trait MetricAggregationNode: ValuesSource {
    fn script_values_sorted(&self) -> Option<bool> {
        accessor::get_bool(self.core().body(), "script_values_sorted")
    }

    fn set_script_values_sorted(&mut self, sorted: bool) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "script_values_sorted", sorted);
        self
    }
}
