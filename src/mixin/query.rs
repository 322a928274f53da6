//! Query mixin: boost, name and the field key of field-keyed queries

use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Composite, Fragment, Mixin};
use crate::Result;

/// Shared state of query nodes: `{ <kind>: { ... } }`
#[derive(Clone, Debug, PartialEq)]
pub struct QueryCore {
    kind: &'static str,
    field: Option<String>,
    body: Fragment,
}

impl QueryCore {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            field: None,
            body: Fragment::new(),
        }
    }

    /// Core of a field-keyed node whose body starts as `{ <field>: <value> }`
    pub fn keyed(kind: &'static str, field: impl Into<String>, value: Value) -> Self {
        let field = field.into();
        let mut body = Fragment::new();
        body.insert(field.clone(), value);
        Self {
            kind,
            field: Some(field),
            body,
        }
    }

    /// Wire type key, e.g. `"term"`
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn body(&self) -> &Fragment {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Fragment {
        &mut self.body
    }

    /// Document field this node is keyed by
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Rename the field key, moving whatever is stored under it
    pub fn rename_field(&mut self, field: impl Into<String>) {
        let field = field.into();
        if let Some(old) = &self.field {
            accessor::rekey(&mut self.body, old, &field);
        }
        self.field = Some(field);
    }

    pub fn field_value(&self) -> Option<&Value> {
        self.field.as_deref().and_then(|field| self.body.get(field))
    }

    /// Replace the value stored under the field key
    pub fn set_field_value(&mut self, value: Value) {
        if let Some(field) = &self.field {
            self.body.insert(field.clone(), value);
        }
    }

    /// Per-field settings object, created when missing
    ///
    /// A node without a field keeps its settings in the body itself.
    pub fn field_object_mut(&mut self) -> &mut Fragment {
        match &self.field {
            Some(field) => accessor::object_mut(&mut self.body, field),
            None => &mut self.body,
        }
    }
}

impl Composite for QueryCore {
    const CATEGORY: Category = Category::Query;

    fn fragment(&self) -> Value {
        accessor::wrap(self.kind, Value::Object(self.body.clone()))
    }
}

/// Operations common to every query node
///
/// Nodes whose boost lives below a field key (`term`, `range`, ...)
/// override `boost`/`set_boost`.
pub trait QueryNode: Mixin<Core = QueryCore> + Sized {
    fn boost(&self) -> Option<f64> {
        accessor::get_f64(self.core().body(), "boost")
    }

    /// Fails for NaN or infinite boosts
    fn set_boost(&mut self, boost: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core_mut().body_mut(), "boost", boost)?;
        Ok(self)
    }

    /// Name reported back in `matched_queries`
    fn name(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "_name")
    }

    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "_name", name.into());
        self
    }
}
