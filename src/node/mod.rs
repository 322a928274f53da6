//! Node model shared by every builder in the crate
//!
//! A node owns a JSON fragment and carries a fixed [`Category`] tag. Parents
//! never hold a child node: composition copies the child's fragment at the
//! moment it is attached (snapshot-on-splice), so a child may be reused in
//! any number of parents and later edits to it never leak into them.
//!
//! # Example
//!
//! ```
//! use squidex_dsl::filter::{AndFilter, TermFilter};
//! use squidex_dsl::node::Node;
//! use serde_json::json;
//!
//! # fn main() -> squidex_dsl::Result<()> {
//! let mut published = TermFilter::new("status", "published");
//! let lang = TermFilter::new("lang", "en");
//!
//! let mut both = AndFilter::new();
//! both.set_filters(&published)?.set_filters(&lang)?;
//!
//! // Later edits to the child do not reach the parent
//! published.set_value("draft");
//!
//! assert_eq!(
//!     both.to_fragment(),
//!     json!({ "and": { "filters": [
//!         { "term": { "status": "published" } },
//!         { "term": { "lang": "en" } }
//!     ] } })
//! );
//! # Ok(())
//! # }
//! ```

pub(crate) mod accessor;
pub mod guard;
mod raw;

pub use raw::RawNode;

use serde_json::{Map, Value};
use std::fmt;

use crate::Result;

/// Key/value body of a node
pub type Fragment = Map<String, Value>;

/// Closed set of node kinds recognised by the guards
///
/// The first five tag composable nodes. The rest tag auxiliary request
/// components that are spliced the same way but never nest in node slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Query,
    Filter,
    Aggregation,
    ScoreFunction,
    Suggester,
    Generator,
    GeoPoint,
    Sort,
    Highlight,
    Rescore,
}

impl Category {
    /// Human readable name used in error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Query => "Query",
            Category::Filter => "Filter",
            Category::Aggregation => "Aggregation",
            Category::ScoreFunction => "ScoreFunction",
            Category::Suggester => "Suggester",
            Category::Generator => "Generator",
            Category::GeoPoint => "GeoPoint",
            Category::Sort => "Sort",
            Category::Highlight => "Highlight",
            Category::Rescore => "Rescore",
        }
    }

    /// Whether this tags a composable node rather than a request component
    pub fn is_node_category(&self) -> bool {
        matches!(
            self,
            Category::Query
                | Category::Filter
                | Category::Aggregation
                | Category::ScoreFunction
                | Category::Suggester
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for everything that can be spliced into a document
///
/// `to_fragment` returns an owned copy of the node's current fragment.
/// Calling it twice without an intervening mutation yields equal values.
pub trait Node: fmt::Debug {
    /// Category tag, fixed at construction
    fn category(&self) -> Category;

    /// Snapshot of the node's fragment
    fn to_fragment(&self) -> Value;

    /// Render the fragment as compact JSON
    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_fragment())?)
    }
}

/// Shared state embedded by concrete nodes of one category
pub trait Composite: fmt::Debug {
    /// Category every node built on this core carries
    const CATEGORY: Category;

    /// Render the full fragment, discriminator included
    fn fragment(&self) -> Value;
}

/// Delegation seam between a concrete node and the core it embeds
///
/// Mixin traits such as [`crate::mixin::QueryNode`] provide their operations
/// as default methods that reach the core through this trait.
pub trait Mixin: fmt::Debug {
    type Core: Composite;

    fn core(&self) -> &Self::Core;

    fn core_mut(&mut self) -> &mut Self::Core;
}

impl<T: Mixin> Node for T {
    fn category(&self) -> Category {
        <T::Core as Composite>::CATEGORY
    }

    fn to_fragment(&self) -> Value {
        self.core().fragment()
    }
}

/// Argument of an accumulating accessor
///
/// `One` appends to the stored list, `Many` replaces it wholesale.
#[derive(Clone, Debug, PartialEq)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Whether this argument replaces the stored list
    pub fn is_replacement(&self) -> bool {
        matches!(self, OneOrMany::Many(_))
    }

    /// Borrow the items in order
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::One(item) => std::slice::from_ref(item),
            OneOrMany::Many(items) => items,
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> OneOrMany<U> {
        match self {
            OneOrMany::One(item) => OneOrMany::One(f(item)),
            OneOrMany::Many(items) => OneOrMany::Many(items.into_iter().map(f).collect()),
        }
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

impl<'a, N: Node + 'a> From<&'a N> for OneOrMany<&'a dyn Node> {
    fn from(node: &'a N) -> Self {
        OneOrMany::One(node)
    }
}

impl From<Value> for OneOrMany<Value> {
    fn from(value: Value) -> Self {
        OneOrMany::One(value)
    }
}

impl From<&str> for OneOrMany<Value> {
    fn from(value: &str) -> Self {
        OneOrMany::One(Value::from(value))
    }
}

impl From<String> for OneOrMany<Value> {
    fn from(value: String) -> Self {
        OneOrMany::One(Value::from(value))
    }
}

impl From<i64> for OneOrMany<Value> {
    fn from(value: i64) -> Self {
        OneOrMany::One(Value::from(value))
    }
}

impl From<f64> for OneOrMany<Value> {
    fn from(value: f64) -> Self {
        OneOrMany::One(Value::from(value))
    }
}

impl From<bool> for OneOrMany<Value> {
    fn from(value: bool) -> Self {
        OneOrMany::One(Value::from(value))
    }
}

impl From<Vec<&str>> for OneOrMany<Value> {
    fn from(values: Vec<&str>) -> Self {
        OneOrMany::Many(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<String>> for OneOrMany<Value> {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values.into_iter().map(Value::from).collect())
    }
}

impl From<Vec<i64>> for OneOrMany<Value> {
    fn from(values: Vec<i64>) -> Self {
        OneOrMany::Many(values.into_iter().map(Value::from).collect())
    }
}
