use serde_json::Value;

use crate::mixin::{ScoreFunctionCore, ScoreFunctionNode};
use crate::node::accessor;
use crate::node::{Fragment, Mixin};
use crate::Result;

/// Multiplies the score by a constant
#[derive(Clone, Debug, PartialEq)]
pub struct BoostFactorScoreFunction {
    core: ScoreFunctionCore,
}

impl BoostFactorScoreFunction {
    /// Fails when `factor` is NaN or infinite
    pub fn new(factor: f64) -> Result<Self> {
        let factor = accessor::finite("boost_factor", factor)?;
        Ok(Self {
            core: ScoreFunctionCore::with_scalar("boost_factor", factor),
        })
    }

    pub fn factor(&self) -> Option<f64> {
        self.core.params().and_then(Value::as_f64)
    }

    pub fn set_factor(&mut self, factor: f64) -> Result<&mut Self> {
        self.core.set_params(accessor::finite("boost_factor", factor)?);
        Ok(self)
    }
}

impl Mixin for BoostFactorScoreFunction {
    type Core = ScoreFunctionCore;

    fn core(&self) -> &ScoreFunctionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ScoreFunctionCore {
        &mut self.core
    }
}

impl ScoreFunctionNode for BoostFactorScoreFunction {}

/// Uniformly distributed random score, reproducible with a seed
#[derive(Clone, Debug, PartialEq)]
pub struct RandomScoreFunction {
    core: ScoreFunctionCore,
}

impl Default for RandomScoreFunction {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomScoreFunction {
    pub fn new() -> Self {
        Self {
            core: ScoreFunctionCore::new("random_score"),
        }
    }

    pub fn seed(&self) -> Option<i64> {
        self.core
            .body()
            .and_then(|body| body.get("seed"))
            .and_then(Value::as_i64)
    }

    pub fn set_seed(&mut self, seed: i64) -> &mut Self {
        accessor::set(self.core.body_mut(), "seed", seed);
        self
    }
}

impl Mixin for RandomScoreFunction {
    type Core = ScoreFunctionCore;

    fn core(&self) -> &ScoreFunctionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ScoreFunctionCore {
        &mut self.core
    }
}

impl ScoreFunctionNode for RandomScoreFunction {}

/// Computes the score with a script
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptScoreFunction {
    core: ScoreFunctionCore,
}

impl ScriptScoreFunction {
    pub fn new(script: impl Into<String>) -> Self {
        let mut func = Self {
            core: ScoreFunctionCore::new("script_score"),
        };
        func.set_script(script);
        func
    }

    pub fn script(&self) -> Option<&str> {
        self.core
            .body()
            .and_then(|body| accessor::get_str(body, "script"))
    }

    pub fn set_script(&mut self, script: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "script", script.into());
        self
    }

    pub fn lang(&self) -> Option<&str> {
        self.core
            .body()
            .and_then(|body| accessor::get_str(body, "lang"))
    }

    pub fn set_lang(&mut self, lang: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "lang", lang.into());
        self
    }

    pub fn params(&self) -> Option<&Fragment> {
        self.core
            .body()
            .and_then(|body| accessor::get_object(body, "params"))
    }

    pub fn set_params(&mut self, params: Fragment) -> &mut Self {
        accessor::set(self.core.body_mut(), "params", Value::Object(params));
        self
    }
}

impl Mixin for ScriptScoreFunction {
    type Core = ScoreFunctionCore;

    fn core(&self) -> &ScoreFunctionCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ScoreFunctionCore {
        &mut self.core
    }
}

impl ScoreFunctionNode for ScriptScoreFunction {}
