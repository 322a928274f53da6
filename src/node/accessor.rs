//! Read/write helpers behind every node accessor
//!
//! Reads never mutate and return `None` for absent keys. Writes store under
//! the wire key. Splices run the category guard first and only then copy
//! the child's fragment, so a rejected argument leaves the parent untouched.

use serde::de::DeserializeOwned;
use serde_json::{Number, Value};
use tracing::trace;

use super::{guard, Category, Fragment, Node, OneOrMany};
use crate::{DslError, Result};

pub(crate) fn get<'a>(body: &'a Fragment, key: &str) -> Option<&'a Value> {
    body.get(key)
}

pub(crate) fn get_f64(body: &Fragment, key: &str) -> Option<f64> {
    body.get(key).and_then(Value::as_f64)
}

pub(crate) fn get_u64(body: &Fragment, key: &str) -> Option<u64> {
    body.get(key).and_then(Value::as_u64)
}

pub(crate) fn get_bool(body: &Fragment, key: &str) -> Option<bool> {
    body.get(key).and_then(Value::as_bool)
}

pub(crate) fn get_str<'a>(body: &'a Fragment, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

pub(crate) fn get_array<'a>(body: &'a Fragment, key: &str) -> Option<&'a [Value]> {
    body.get(key).and_then(Value::as_array).map(Vec::as_slice)
}

pub(crate) fn get_object<'a>(body: &'a Fragment, key: &str) -> Option<&'a Fragment> {
    body.get(key).and_then(Value::as_object)
}

pub(crate) fn get_enum<T: DeserializeOwned>(body: &Fragment, key: &str) -> Option<T> {
    body.get(key)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

pub(crate) fn set(body: &mut Fragment, key: &str, value: impl Into<Value>) {
    body.insert(key.to_string(), value.into());
}

/// JSON number for `value`; NaN and the infinities have none
pub(crate) fn finite(key: &str, value: f64) -> Result<Value> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| {
        DslError::InvalidArgument(format!("{key} must be a finite number, got {value}"))
    })
}

/// Store a float under `key`, rejecting values JSON cannot carry
pub(crate) fn set_f64(body: &mut Fragment, key: &str, value: f64) -> Result<()> {
    let number = finite(key, value)?;
    body.insert(key.to_string(), number);
    Ok(())
}

/// Single-key object `{ key: value }`
pub(crate) fn wrap(key: &str, value: Value) -> Value {
    let mut outer = Fragment::new();
    outer.insert(key.to_string(), value);
    Value::Object(outer)
}

/// Nested object stored under `key`, created (or reset) when missing
pub(crate) fn object_mut<'a>(body: &'a mut Fragment, key: &str) -> &'a mut Fragment {
    let slot = body
        .entry(key.to_string())
        .or_insert_with(|| Value::Object(Fragment::new()));
    if !slot.is_object() {
        *slot = Value::Object(Fragment::new());
    }
    match slot {
        Value::Object(map) => map,
        _ => unreachable!("slot was just set to an object"),
    }
}

/// Move the value stored under `old` to `new`
///
/// Field-keyed nodes (`{ term: { <field>: ... } }`) use this when their
/// field is renamed. No-op when `old` is absent or equal to `new`.
pub(crate) fn rekey(body: &mut Fragment, old: &str, new: &str) {
    if old == new {
        return;
    }
    if let Some(value) = body.remove(old) {
        body.insert(new.to_string(), value);
    }
}

/// Guard-check a child node and copy its fragment
pub(crate) fn splice(node: &dyn Node, expected: Category, slot: &'static str) -> Result<Value> {
    guard::expect(node, expected)?;
    trace!(slot, category = %expected, "splicing child fragment");
    Ok(node.to_fragment())
}

/// Like [`splice`] for an accumulating slot; every node is checked first
pub(crate) fn splice_all(
    nodes: OneOrMany<&dyn Node>,
    expected: Category,
    slot: &'static str,
) -> Result<OneOrMany<Value>> {
    guard::expect_all(nodes.as_slice(), expected)?;
    trace!(
        slot,
        category = %expected,
        count = nodes.as_slice().len(),
        replace = nodes.is_replacement(),
        "splicing child fragments"
    );
    Ok(nodes.map(|node| node.to_fragment()))
}

/// Append (`One`) or replace (`Many`) the array stored under `key`
pub(crate) fn accumulate(body: &mut Fragment, key: &str, items: OneOrMany<Value>) {
    match items {
        OneOrMany::One(item) => {
            let slot = body
                .entry(key.to_string())
                .or_insert_with(|| Value::Array(Vec::new()));
            match slot {
                Value::Array(list) => list.push(item),
                other => *other = Value::Array(vec![item]),
            }
        }
        OneOrMany::Many(items) => {
            body.insert(key.to_string(), Value::Array(items));
        }
    }
}

/// Shallow-merge `source` into the object stored under `key`
///
/// Keys already present are overwritten one by one; other keys survive.
pub(crate) fn merge_into(body: &mut Fragment, key: &str, source: Fragment) {
    let target = object_mut(body, key);
    for (name, value) in source {
        target.insert(name, value);
    }
}
