//! Field value factor - scores by a numeric document field

use serde::{Deserialize, Serialize};

use crate::mixin::{ScoreFunctionCore, ScoreFunctionNode};
use crate::node::accessor;
use crate::node::Mixin;
use crate::Result;

/// Transformation applied to the field value before multiplying
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValueModifier {
    None,
    Log,
    Log1p,
    Log2p,
    Ln,
    Ln1p,
    Ln2p,
    Square,
    Sqrt,
    Reciprocal,
}

impl FieldValueModifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldValueModifier::None => "none",
            FieldValueModifier::Log => "log",
            FieldValueModifier::Log1p => "log1p",
            FieldValueModifier::Log2p => "log2p",
            FieldValueModifier::Ln => "ln",
            FieldValueModifier::Ln1p => "ln1p",
            FieldValueModifier::Ln2p => "ln2p",
            FieldValueModifier::Square => "square",
            FieldValueModifier::Sqrt => "sqrt",
            FieldValueModifier::Reciprocal => "reciprocal",
        }
    }
}

/// Score = modifier(factor * doc[field])
#[derive(Clone, Debug, PartialEq)]
pub struct FieldValueFactorFunction {
    core: ScoreFunctionCore,
}

impl FieldValueFactorFunction {
    pub fn new(field: impl Into<String>) -> Self {
        let mut func = Self {
            core: ScoreFunctionCore::new("field_value_factor"),
        };
        func.set_field(field);
        func
    }

    pub fn field(&self) -> Option<&str> {
        self.core
            .body()
            .and_then(|body| accessor::get_str(body, "field"))
    }

    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "field", field.into());
        self
    }

    pub fn factor(&self) -> Option<f64> {
        self.core
            .body()
            .and_then(|body| accessor::get_f64(body, "factor"))
    }

    pub fn set_factor(&mut self, factor: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "factor", factor)?;
        Ok(self)
    }

    pub fn modifier(&self) -> Option<FieldValueModifier> {
        self.core
            .body()
            .and_then(|body| accessor::get_enum(body, "modifier"))
    }

    pub fn set_modifier(&mut self, modifier: FieldValueModifier) -> &mut Self {
        accessor::set(self.core.body_mut(), "modifier", modifier.as_str());
        self
    }

    /// Value used for documents without the field
    pub fn missing(&self) -> Option<f64> {
        self.core
            .body()
            .and_then(|body| accessor::get_f64(body, "missing"))
    }

    pub fn set_missing(&mut self, missing: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "missing", missing)?;
        Ok(self)
    }
}

impl Mixin for FieldValueFactorFunction {
    type Core = ScoreFunctionCore;

    fn core(&self) -> &ScoreFunctionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ScoreFunctionCore {
        &mut self.core
    }
}

impl ScoreFunctionNode for FieldValueFactorFunction {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use serde_json::json;

    #[test]
    fn test_field_value_factor_fragment() {
        let mut func = FieldValueFactorFunction::new("popularity");
        assert_eq!(func.modifier(), None);

        func.set_factor(1.2)
            .unwrap()
            .set_modifier(FieldValueModifier::Log1p)
            .set_missing(1.0)
            .unwrap();

        assert_eq!(func.field(), Some("popularity"));
        assert_eq!(func.modifier(), Some(FieldValueModifier::Log1p));
        assert_eq!(
            func.to_fragment(),
            json!({ "field_value_factor": {
                "field": "popularity", "factor": 1.2, "modifier": "log1p", "missing": 1.0
            } })
        );
    }
}
