//! Golden fragments for the composition rules every node obeys

use serde_json::json;

use squidex_dsl::aggregation::{MaxAggregation, TermsAggregation};
use squidex_dsl::filter::{AndFilter, FieldFilter, OrFilter, RangeFilter, TermFilter};
use squidex_dsl::mixin::{
    AggregationContainer, FilterNode, QueryNode, ScoreFunctionNode, ValuesSource,
};
use squidex_dsl::node::{guard, Category, Node};
use squidex_dsl::query::{BoolQuery, FieldQuery, TermQuery, TermsQuery};
use squidex_dsl::request::SearchRequest;
use squidex_dsl::score_function::RandomScoreFunction;
use squidex_dsl::DslError;

#[test]
fn test_term_query_golden_and_rename() {
    let mut query = TermQuery::new("status", "active");
    assert_eq!(
        query.to_fragment(),
        json!({ "term": { "status": { "term": "active" } } })
    );

    query.set_field("state");
    let fragment = query.to_fragment();
    assert_eq!(fragment, json!({ "term": { "state": { "term": "active" } } }));
    assert!(fragment["term"].get("status").is_none());
}

#[test]
fn test_and_filter_snapshot_on_splice() {
    let mut a = TermFilter::new("status", "published");
    let b = TermFilter::new("lang", "en");

    let mut and = AndFilter::new();
    and.set_filters(&a).unwrap().set_filters(&b).unwrap();
    let before = and.to_fragment();

    a.set_value("draft").set_cache(true);

    assert_eq!(and.to_fragment(), before);
    assert_eq!(
        before,
        json!({ "and": { "filters": [
            { "term": { "status": "published" } },
            { "term": { "lang": "en" } }
        ] } })
    );
}

#[test]
fn test_one_child_reused_in_many_parents() {
    let shared = TermFilter::new("lang", "en");
    let mut and = AndFilter::new();
    let mut or = OrFilter::new();
    and.set_filters(&shared).unwrap();
    or.set_filters(&shared).unwrap();

    assert_eq!(and.filters(), or.filters());
}

#[test]
fn test_metric_aggregation_is_a_leaf() {
    let mut max = MaxAggregation::new("max_price");
    max.set_field("price");
    assert_eq!(
        max.to_fragment(),
        json!({ "max_price": { "max": { "field": "price" } } })
    );

    let mut by_tag = TermsAggregation::new("by_tag");
    by_tag.add_aggregation(&max).unwrap();
    assert!(by_tag.to_fragment()["by_tag"].get("aggs").is_some());
    assert!(max.to_fragment()["max_price"].get("aggs").is_none());
}

#[test]
fn test_rejection_leaves_parent_unchanged() {
    let filter = TermFilter::new("status", "active");
    let query = TermQuery::new("status", "active");

    let mut bool_query = BoolQuery::new();
    bool_query.set_must(&query).unwrap();
    let before = bool_query.to_fragment();
    let err = bool_query.set_must(&filter).unwrap_err();
    assert_eq!(err.expected_category(), Some(Category::Query));
    assert_eq!(err.to_string(), "Argument must be a Query, got Filter");
    assert_eq!(bool_query.to_fragment(), before);

    let mut and = AndFilter::new();
    assert!(and.set_filters(&query).is_err());
    assert_eq!(and.to_fragment(), json!({ "and": {} }));

    let mut request = SearchRequest::new();
    assert!(request.set_query(&filter).is_err());
    assert!(request.set_post_filter(&query).is_err());
    assert_eq!(request.to_document(), json!({}));
}

#[test]
fn test_guards_match_construction_category() {
    let query = TermQuery::new("a", 1);
    let filter = TermFilter::new("a", 1);
    let agg = TermsAggregation::new("a");

    assert!(guard::is_query(Some(&query)));
    assert!(guard::is_filter(Some(&filter)));
    assert!(guard::is_aggregation(Some(&agg)));
    assert!(!guard::is_query(Some(&filter)));
    assert!(!guard::is_filter(None));
}

#[test]
fn test_accumulating_writes() {
    let mut terms = TermsQuery::new("tags", "a");
    terms.set_terms("b");
    assert_eq!(terms.to_fragment(), json!({ "terms": { "tags": ["a", "b"] } }));

    terms.set_terms(vec!["z"]);
    assert_eq!(terms.to_fragment(), json!({ "terms": { "tags": ["z"] } }));
}

#[test]
fn test_read_after_construction_and_read_your_write() {
    let mut query = TermQuery::new("status", "active");
    assert_eq!(query.boost(), None);
    assert_eq!(query.name(), None);

    query.set_boost(2.0).unwrap().set_name("status_clause");
    assert_eq!(query.boost(), Some(2.0));
    assert_eq!(query.name(), Some("status_clause"));

    let mut filter = TermFilter::new("status", "active");
    assert_eq!(filter.cache_key(), None);
    filter.set_cache_key("status-active");
    assert_eq!(filter.cache_key(), Some("status-active"));
}

#[test]
fn test_serialization_is_stable() {
    let mut query = BoolQuery::new();
    query.set_must(&TermQuery::new("a", 1)).unwrap();
    assert_eq!(query.to_fragment(), query.to_fragment());
    assert_eq!(query.to_json_string().unwrap(), query.to_json_string().unwrap());
}

#[test]
fn test_meta_fields_are_keyed_like_any_field() {
    let mut query = TermQuery::new("_id", "abc");
    assert_eq!(query.field(), Some("_id"));
    query.set_boost(2.0).unwrap();
    assert_eq!(
        query.to_fragment(),
        json!({ "term": { "_id": { "term": "abc", "boost": 2.0 } } })
    );

    query.set_field("_uid");
    assert_eq!(query.field(), Some("_uid"));
    assert_eq!(query.boost(), Some(2.0));
    assert!(query.to_fragment()["term"].get("").is_none());

    let mut filter = TermFilter::new("_type", "post");
    assert_eq!(filter.field(), Some("_type"));
    assert_eq!(filter.value(), Some(&json!("post")));
    filter.set_value("page");
    assert_eq!(filter.to_fragment(), json!({ "term": { "_type": "page" } }));
}

#[test]
fn test_field_named_like_an_option() {
    let mut filter = RangeFilter::new("execution");
    filter.set_lt(10);
    assert_eq!(filter.field(), Some("execution"));
    assert_eq!(filter.lt(), Some(&json!(10)));

    filter.set_field("elapsed");
    assert_eq!(
        filter.to_fragment(),
        json!({ "range": { "elapsed": { "lt": 10 } } })
    );
}

#[test]
fn test_non_finite_numbers_rejected_unchanged() {
    let mut query = TermQuery::new("a", 1);
    let before = query.to_fragment();
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = query.set_boost(bad).unwrap_err();
        assert!(matches!(err, DslError::InvalidArgument(_)));
    }
    assert_eq!(query.boost(), None);
    assert_eq!(query.to_fragment(), before);

    let mut random = RandomScoreFunction::new();
    assert!(random.set_weight(f64::INFINITY).is_err());
    assert_eq!(random.weight(), None);
    assert_eq!(random.to_fragment(), json!({ "random_score": {} }));

    let mut request = SearchRequest::new();
    assert!(request.set_min_score(f64::NAN).is_err());
    assert_eq!(request.to_document(), json!({}));
}
