//! Decay functions - score falls off with distance from an origin

use serde_json::Value;

use crate::mixin::{ScoreFunctionCore, ScoreFunctionNode};
use crate::node::accessor;
use crate::node::{Fragment, Mixin};
use crate::{DslError, Result};

/// Shape of the decay curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayKind {
    Gauss,
    Exp,
    Linear,
}

impl DecayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecayKind::Gauss => "gauss",
            DecayKind::Exp => "exp",
            DecayKind::Linear => "linear",
        }
    }
}

/// Decay function over a numeric, date or geo field
///
/// Renders as `{ <gauss|exp|linear>: { <field>: { origin, scale, offset, decay } } }`.
/// `origin` may be a number, a date string or a geo point fragment.
#[derive(Clone, Debug, PartialEq)]
pub struct DecayScoreFunction {
    core: ScoreFunctionCore,
    field: String,
}

impl DecayScoreFunction {
    pub fn new(
        kind: DecayKind,
        field: impl Into<String>,
        origin: impl Into<Value>,
        scale: impl Into<Value>,
    ) -> Self {
        let mut func = Self {
            core: ScoreFunctionCore::new(kind.as_str()),
            field: field.into(),
        };
        accessor::set(func.spec_mut(), "origin", origin);
        accessor::set(func.spec_mut(), "scale", scale);
        func
    }

    pub fn kind(&self) -> &'static str {
        self.core.kind()
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn origin(&self) -> Option<&Value> {
        self.spec().and_then(|spec| spec.get("origin"))
    }

    pub fn set_origin(&mut self, origin: impl Into<Value>) -> &mut Self {
        accessor::set(self.spec_mut(), "origin", origin);
        self
    }

    /// Distance from origin (plus offset) at which the score equals `decay`
    pub fn scale(&self) -> Option<&Value> {
        self.spec().and_then(|spec| spec.get("scale"))
    }

    pub fn set_scale(&mut self, scale: impl Into<Value>) -> &mut Self {
        accessor::set(self.spec_mut(), "scale", scale);
        self
    }

    pub fn offset(&self) -> Option<&Value> {
        self.spec().and_then(|spec| spec.get("offset"))
    }

    pub fn set_offset(&mut self, offset: impl Into<Value>) -> &mut Self {
        accessor::set(self.spec_mut(), "offset", offset);
        self
    }

    pub fn decay(&self) -> Option<f64> {
        self.spec().and_then(|spec| accessor::get_f64(spec, "decay"))
    }

    /// Score at `scale` distance; must lie strictly between 0 and 1
    pub fn set_decay(&mut self, decay: f64) -> Result<&mut Self> {
        if !(decay > 0.0 && decay < 1.0) {
            return Err(DslError::InvalidArgument(format!(
                "decay must be in (0, 1), got {decay}"
            )));
        }
        accessor::set(self.spec_mut(), "decay", decay);
        Ok(self)
    }

    fn spec(&self) -> Option<&Fragment> {
        self.core
            .body()
            .and_then(|body| accessor::get_object(body, &self.field))
    }

    fn spec_mut(&mut self) -> &mut Fragment {
        accessor::object_mut(self.core.body_mut(), &self.field)
    }
}

impl Mixin for DecayScoreFunction {
    type Core = ScoreFunctionCore;

    fn core(&self) -> &ScoreFunctionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ScoreFunctionCore {
        &mut self.core
    }
}

impl ScoreFunctionNode for DecayScoreFunction {}
