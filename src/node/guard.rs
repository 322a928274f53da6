//! Category guards
//!
//! Guards compare a node's [`Category`] tag by equality. They are pure and
//! treat an absent node as non-matching, so optional slots can be probed
//! before assignment. The `expect*` variants turn a failed check into a
//! [`DslError`].

use serde_json::Value;

use super::{Category, Fragment, Node};
use crate::error::DslError;
use crate::Result;

/// Check whether `node` is present and tagged with `expected`
pub fn has_category(node: Option<&dyn Node>, expected: Category) -> bool {
    node.is_some_and(|n| n.category() == expected)
}

pub fn is_query(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Query)
}

pub fn is_filter(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Filter)
}

pub fn is_aggregation(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Aggregation)
}

pub fn is_score_function(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::ScoreFunction)
}

pub fn is_suggester(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Suggester)
}

pub fn is_generator(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Generator)
}

pub fn is_geo_point(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::GeoPoint)
}

pub fn is_sort(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Sort)
}

pub fn is_highlight(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Highlight)
}

pub fn is_rescore(node: Option<&dyn Node>) -> bool {
    has_category(node, Category::Rescore)
}

/// Require `node` to carry the `expected` tag
pub fn expect(node: &dyn Node, expected: Category) -> Result<()> {
    let found = node.category();
    if found == expected {
        Ok(())
    } else {
        Err(DslError::CategoryMismatch { expected, found })
    }
}

/// Require every node to carry the `expected` tag
///
/// All nodes are checked before the caller touches any state.
pub fn expect_all(nodes: &[&dyn Node], expected: Category) -> Result<()> {
    nodes.iter().try_for_each(|node| expect(*node, expected))
}

/// Require `node` to carry one of the `allowed` tags
pub fn expect_any(node: &dyn Node, allowed: &[Category]) -> Result<Category> {
    let found = node.category();
    if allowed.contains(&found) {
        Ok(found)
    } else {
        Err(DslError::CategoryMismatch {
            expected: allowed.first().copied().unwrap_or(found),
            found,
        })
    }
}

/// Require a fragment to be a JSON object with at least one key
pub fn expect_object(value: &Value) -> Result<&Fragment> {
    match value {
        Value::Object(map) if !map.is_empty() => Ok(map),
        other => Err(DslError::shape("a non-empty JSON object", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::{MaxAggregation, TermsAggregation};
    use crate::filter::TermFilter;
    use crate::query::TermQuery;
    use crate::request::{GeoPoint, Sort};
    use crate::score_function::RandomScoreFunction;
    use crate::suggester::{DirectGenerator, TermSuggester};
    use serde_json::json;

    #[test]
    fn test_each_guard_accepts_its_category() {
        let query = TermQuery::new("status", "active");
        let filter = TermFilter::new("status", "active");
        let bucket = TermsAggregation::new("by_status");
        let metric = MaxAggregation::new("max_price");
        let func = RandomScoreFunction::new();
        let suggester = TermSuggester::new("fix_typos");
        let generator = DirectGenerator::new("title");
        let point = GeoPoint::new(52.37, 4.89).unwrap();
        let sort = Sort::field("price");

        assert!(is_query(Some(&query)));
        assert!(is_filter(Some(&filter)));
        assert!(is_aggregation(Some(&bucket)));
        assert!(is_aggregation(Some(&metric)));
        assert!(is_score_function(Some(&func)));
        assert!(is_suggester(Some(&suggester)));
        assert!(is_generator(Some(&generator)));
        assert!(is_geo_point(Some(&point)));
        assert!(is_sort(Some(&sort)));
    }

    #[test]
    fn test_guards_reject_other_categories() {
        let query = TermQuery::new("status", "active");
        let filter = TermFilter::new("status", "active");

        assert!(!is_filter(Some(&query)));
        assert!(!is_query(Some(&filter)));
        assert!(!is_aggregation(Some(&query)));
        assert!(!is_score_function(Some(&filter)));
        assert!(!is_suggester(Some(&query)));
        assert!(!is_highlight(Some(&filter)));
        assert!(!is_rescore(Some(&query)));
    }

    #[test]
    fn test_guards_treat_absent_as_non_matching() {
        assert!(!is_query(None));
        assert!(!is_filter(None));
        assert!(!has_category(None, Category::Aggregation));
    }

    #[test]
    fn test_expect_reports_both_categories() {
        let query = TermQuery::new("status", "active");
        let err = expect(&query, Category::Filter).unwrap_err();
        match err {
            DslError::CategoryMismatch { expected, found } => {
                assert_eq!(expected, Category::Filter);
                assert_eq!(found, Category::Query);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_expect_all_stops_at_first_mismatch() {
        let a = TermFilter::new("a", 1);
        let q = TermQuery::new("b", 2);
        let nodes: Vec<&dyn Node> = vec![&a, &q];
        assert!(expect_all(&nodes, Category::Filter).is_err());
        assert!(expect_all(&nodes[..1], Category::Filter).is_ok());
    }

    #[test]
    fn test_expect_any() {
        let q = TermQuery::new("b", 2);
        let allowed = [Category::Query, Category::Filter];
        assert_eq!(expect_any(&q, &allowed).unwrap(), Category::Query);

        let point = GeoPoint::new(0.0, 0.0).unwrap();
        assert!(expect_any(&point, &allowed).is_err());
    }

    #[test]
    fn test_expect_object() {
        assert!(expect_object(&json!({ "term": {} })).is_ok());
        assert!(expect_object(&json!({})).is_err());
        assert!(expect_object(&json!("term")).is_err());
        assert!(expect_object(&json!(null)).is_err());
    }
}
