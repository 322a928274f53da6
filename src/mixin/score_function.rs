//! Score function mixin: the kind key plus the shared `filter` and `weight`

use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Composite, Fragment, Mixin, Node};
use crate::Result;

/// Shared state of score functions
///
/// Renders as `{ <kind>: <params>, filter: {...}, weight: n }`, where the
/// params are an object for most kinds and a bare number for
/// `boost_factor`.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreFunctionCore {
    kind: &'static str,
    function: Fragment,
}

impl ScoreFunctionCore {
    pub fn new(kind: &'static str) -> Self {
        let mut function = Fragment::new();
        function.insert(kind.to_string(), Value::Object(Fragment::new()));
        Self { kind, function }
    }

    /// Core whose kind key holds a scalar instead of an object
    pub fn with_scalar(kind: &'static str, value: impl Into<Value>) -> Self {
        let mut function = Fragment::new();
        function.insert(kind.to_string(), value.into());
        Self { kind, function }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Value stored under the kind key
    pub fn params(&self) -> Option<&Value> {
        self.function.get(self.kind)
    }

    pub fn set_params(&mut self, value: impl Into<Value>) {
        self.function.insert(self.kind.to_string(), value.into());
    }

    /// Object stored under the kind key
    pub fn body(&self) -> Option<&Fragment> {
        accessor::get_object(&self.function, self.kind)
    }

    pub fn body_mut(&mut self) -> &mut Fragment {
        accessor::object_mut(&mut self.function, self.kind)
    }

    fn outer(&self) -> &Fragment {
        &self.function
    }

    fn outer_mut(&mut self) -> &mut Fragment {
        &mut self.function
    }
}

impl Composite for ScoreFunctionCore {
    const CATEGORY: Category = Category::ScoreFunction;

    fn fragment(&self) -> Value {
        Value::Object(self.function.clone())
    }
}

/// Operations common to every score function
pub trait ScoreFunctionNode: Mixin<Core = ScoreFunctionCore> + Sized {
    /// Filter gating which documents the function applies to
    fn filter(&self) -> Option<&Value> {
        accessor::get(self.core().outer(), "filter")
    }

    fn set_filter(&mut self, filter: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(filter, Category::Filter, "filter")?;
        accessor::set(self.core_mut().outer_mut(), "filter", fragment);
        Ok(self)
    }

    fn weight(&self) -> Option<f64> {
        accessor::get_f64(self.core().outer(), "weight")
    }

    fn set_weight(&mut self, weight: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core_mut().outer_mut(), "weight", weight)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RawNode;
    use serde_json::json;

    #[derive(Debug)]
    struct Stub(ScoreFunctionCore);

    impl Mixin for Stub {
        type Core = ScoreFunctionCore;

        fn core(&self) -> &ScoreFunctionCore {
            &self.0
        }

        fn core_mut(&mut self) -> &mut ScoreFunctionCore {
            &mut self.0
        }
    }

    impl ScoreFunctionNode for Stub {}

    #[test]
    fn test_filter_gate_and_weight() {
        let mut func = Stub(ScoreFunctionCore::new("stub"));
        assert!(func.filter().is_none());
        assert!(func.weight().is_none());

        let gate = RawNode::filter(json!({ "term": { "tag": "rust" } })).unwrap();
        func.set_filter(&gate).unwrap().set_weight(3.0).unwrap();

        assert_eq!(func.weight(), Some(3.0));
        assert_eq!(
            func.to_fragment(),
            json!({
                "stub": {},
                "filter": { "term": { "tag": "rust" } },
                "weight": 3.0
            })
        );
    }

    #[test]
    fn test_query_is_not_a_valid_gate() {
        let mut func = Stub(ScoreFunctionCore::new("stub"));
        let query = RawNode::query(json!({ "match_all": {} })).unwrap();
        assert!(func.set_filter(&query).is_err());
        assert_eq!(func.to_fragment(), json!({ "stub": {} }));
    }

    #[test]
    fn test_scalar_params() {
        let core = ScoreFunctionCore::with_scalar("boost_factor", 2.0);
        assert_eq!(core.params(), Some(&json!(2.0)));
        assert!(core.body().is_none());
        assert_eq!(core.fragment(), json!({ "boost_factor": 2.0 }));
    }
}
