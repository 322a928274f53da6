//! Score function builders for [`crate::query::FunctionScoreQuery`]
//!
//! Every function may be gated by a filter and weighted, see
//! [`crate::mixin::ScoreFunctionNode`].

mod decay;
mod field_value_factor;
mod simple;

pub use decay::{DecayKind, DecayScoreFunction};
pub use field_value_factor::{FieldValueFactorFunction, FieldValueModifier};
pub use simple::{BoostFactorScoreFunction, RandomScoreFunction, ScriptScoreFunction};
