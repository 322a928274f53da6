//! Filter mixin

use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Composite, Fragment, Mixin};

/// Shared state of filter nodes: `{ <kind>: { ... } }`
#[derive(Clone, Debug, PartialEq)]
pub struct FilterCore {
    kind: &'static str,
    field: Option<String>,
    body: Fragment,
}

impl FilterCore {
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

impl Composite for FilterCore {
    const CATEGORY: Category = Category::Filter;

    fn fragment(&self) -> Value {
        accessor::wrap(self.kind, Value::Object(self.body.clone()))
    }
}

/// Operations common to every filter node
///
/// Filters (unlike queries) can be cached engine-side, optionally under a
/// caller-chosen key.
pub trait FilterNode: Mixin<Core = FilterCore> + Sized {
    fn name(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "_name")
    }

    fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "_name", name.into());
        self
    }

    fn cache(&self) -> Option<bool> {
        accessor::get_bool(self.core().body(), "_cache")
    }

    fn set_cache(&mut self, cache: bool) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "_cache", cache);
        self
    }

    fn cache_key(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "_cache_key")
    }

    fn set_cache_key(&mut self, key: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "_cache_key", key.into());
        self
    }
}
