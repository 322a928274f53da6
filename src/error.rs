use thiserror::Error;

use crate::node::Category;

/// Main error type for document construction
#[derive(Error, Debug)]
pub enum DslError {
    #[error("Argument must be a {expected}, got {found}")]
    CategoryMismatch { expected: Category, found: Category },

    #[error("Argument must be {expected}, got {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for builder operations
pub type Result<T> = std::result::Result<T, DslError>;

impl DslError {
    /// Build a shape error from the offending JSON value
    pub fn shape(expected: &'static str, found: &serde_json::Value) -> Self {
        let found = match found {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(map) if map.is_empty() => "an empty object",
            serde_json::Value::Object(_) => "an object",
        };
        DslError::ShapeMismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Check if this error was raised by a category guard
    pub fn is_category_mismatch(&self) -> bool {
        matches!(self, DslError::CategoryMismatch { .. })
    }

    /// The category the rejected slot required, if any
    pub fn expected_category(&self) -> Option<Category> {
        match self {
            DslError::CategoryMismatch { expected, .. } => Some(*expected),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_display() {
        let err = DslError::CategoryMismatch {
            expected: Category::Filter,
            found: Category::Query,
        };
        assert_eq!(err.to_string(), "Argument must be a Filter, got Query");
    }

    #[test]
    fn test_shape_error_describes_value() {
        let err = DslError::shape("a JSON object", &json!([1, 2]));
        assert_eq!(err.to_string(), "Argument must be a JSON object, got an array");
        assert!(!err.is_category_mismatch());
    }

    #[test]
    fn test_expected_category() {
        let err = DslError::CategoryMismatch {
            expected: Category::Aggregation,
            found: Category::Suggester,
        };
        assert!(err.is_category_mismatch());
        assert_eq!(err.expected_category(), Some(Category::Aggregation));
        assert_eq!(DslError::InvalidArgument("x".into()).expected_category(), None);
    }
}
