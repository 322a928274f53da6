//! Raw nodes for fragments built outside this crate
//!
//! A raw fragment may carry several top-level keys, as score functions
//! (`filter`, `weight`) and rescores (`window_size`) do. Only non-objects
//! and empty objects are refused.

use serde_json::Value;

use super::{guard, Category, Fragment, Node};
use crate::Result;

/// Hand-built fragment tagged with a category
///
/// Lets documents produced elsewhere take part in guarded composition.
#[derive(Clone, Debug, PartialEq)]
pub struct RawNode {
    category: Category,
    fragment: Fragment,
}

impl RawNode {
    /// Wrap `fragment`, which must be a non-empty JSON object
    pub fn new(category: Category, fragment: Value) -> Result<Self> {
        let fragment = guard::expect_object(&fragment)?.clone();
        Ok(Self { category, fragment })
    }

    pub fn query(fragment: Value) -> Result<Self> {
        Self::new(Category::Query, fragment)
    }

    pub fn filter(fragment: Value) -> Result<Self> {
        Self::new(Category::Filter, fragment)
    }

    pub fn aggregation(fragment: Value) -> Result<Self> {
        Self::new(Category::Aggregation, fragment)
    }

    /// Top-level key of the fragment
    pub fn discriminator(&self) -> Option<&str> {
        self.fragment.keys().next().map(String::as_str)
    }
}

impl Node for RawNode {
    fn category(&self) -> Category {
        self.category
    }

    fn to_fragment(&self) -> Value {
        Value::Object(self.fragment.clone())
    }
}
