//! Option types shared by query nodes

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operator for combining terms in a match query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOperator {
    /// All terms must match (AND)
    And,
    /// At least one term must match (OR)
    #[default]
    Or,
}

impl MatchOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOperator::And => "and",
            MatchOperator::Or => "or",
        }
    }
}

/// Minimum should match configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MinimumShouldMatch {
    /// Exact count
    Count(i64),
    /// Percentage (e.g., "75%") or combination (e.g., "3<90%")
    Expression(String),
}

impl Default for MinimumShouldMatch {
    fn default() -> Self {
        MinimumShouldMatch::Count(1)
    }
}

impl From<i64> for MinimumShouldMatch {
    fn from(count: i64) -> Self {
        MinimumShouldMatch::Count(count)
    }
}

impl From<&str> for MinimumShouldMatch {
    fn from(expr: &str) -> Self {
        MinimumShouldMatch::Expression(expr.to_string())
    }
}

impl From<MinimumShouldMatch> for Value {
    fn from(msm: MinimumShouldMatch) -> Self {
        match msm {
            MinimumShouldMatch::Count(n) => Value::from(n),
            MinimumShouldMatch::Expression(s) => Value::from(s),
        }
    }
}

/// How function scores combine with each other
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreMode {
    Multiply,
    Sum,
    Avg,
    First,
    Max,
    Min,
}

impl ScoreMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMode::Multiply => "multiply",
            ScoreMode::Sum => "sum",
            ScoreMode::Avg => "avg",
            ScoreMode::First => "first",
            ScoreMode::Max => "max",
            ScoreMode::Min => "min",
        }
    }
}

/// How the combined function score merges into the query score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoostMode {
    Multiply,
    Replace,
    Sum,
    Avg,
    Max,
    Min,
}

impl BoostMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoostMode::Multiply => "multiply",
            BoostMode::Replace => "replace",
            BoostMode::Sum => "sum",
            BoostMode::Avg => "avg",
            BoostMode::Max => "max",
            BoostMode::Min => "min",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimum_should_match_values() {
        assert_eq!(Value::from(MinimumShouldMatch::Count(2)), json!(2));
        assert_eq!(Value::from(MinimumShouldMatch::from("75%")), json!("75%"));
        assert_eq!(MinimumShouldMatch::default(), MinimumShouldMatch::Count(1));
    }

    #[test]
    fn test_minimum_should_match_deserialize() {
        let count: MinimumShouldMatch = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(count, MinimumShouldMatch::Count(3));
        let pct: MinimumShouldMatch = serde_json::from_value(json!("3<90%")).unwrap();
        assert_eq!(pct, MinimumShouldMatch::Expression("3<90%".into()));
    }

    #[test]
    fn test_enum_names_match_serde() {
        assert_eq!(serde_json::to_value(MatchOperator::And).unwrap(), json!("and"));
        assert_eq!(MatchOperator::default(), MatchOperator::Or);
        for mode in [ScoreMode::Multiply, ScoreMode::First, ScoreMode::Avg] {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.as_str()));
        }
        for mode in [BoostMode::Replace, BoostMode::Sum, BoostMode::Min] {
            assert_eq!(serde_json::to_value(mode).unwrap(), json!(mode.as_str()));
        }
    }
}
