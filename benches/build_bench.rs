use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use squidex_dsl::aggregation::{AvgAggregation, TermsAggregation};
use squidex_dsl::filter::{AndFilter, TermFilter};
use squidex_dsl::mixin::{AggregationContainer, ValuesSource};
use squidex_dsl::node::Node;
use squidex_dsl::query::{BoolQuery, MatchQuery, TermQuery};
use squidex_dsl::request::SearchRequest;

fn build_bool(clauses: usize) -> BoolQuery {
    let mut query = BoolQuery::new();
    for i in 0..clauses {
        let term = TermQuery::new(format!("field_{i}"), i as i64);
        query.set_should(&term).unwrap();
    }
    query
}

fn build_request(clauses: usize) -> SearchRequest {
    let mut filter = AndFilter::new();
    for i in 0..clauses {
        filter
            .set_filters(&TermFilter::new(format!("tag_{i}"), "on"))
            .unwrap();
    }

    let mut avg = AvgAggregation::new("avg_price");
    avg.set_field("price");
    let mut by_brand = TermsAggregation::new("by_brand");
    by_brand.set_field("brand");
    by_brand.add_aggregation(&avg).unwrap();

    let mut query = build_bool(clauses);
    query.set_must(&MatchQuery::new("title", "rust")).unwrap();

    let mut request = SearchRequest::new();
    request
        .set_query(&query)
        .unwrap()
        .set_post_filter(&filter)
        .unwrap()
        .set_aggregation(&by_brand)
        .unwrap()
        .set_size(20);
    request
}

fn bench_bool_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("bool_composition");
    for clauses in [4usize, 32, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(clauses), &clauses, |b, &n| {
            b.iter(|| black_box(build_bool(n)))
        });
    }
    group.finish();
}

fn bench_request_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_render");
    for clauses in [4usize, 32, 256] {
        let request = build_request(clauses);
        group.bench_with_input(BenchmarkId::from_parameter(clauses), &request, |b, req| {
            b.iter(|| black_box(req.to_json_string().unwrap()))
        });
    }
    group.finish();
}

fn bench_nested_splice(c: &mut Criterion) {
    let inner = build_bool(64);
    c.bench_function("nested_splice_depth_8", |b| {
        b.iter(|| {
            let mut current = inner.clone();
            for _ in 0..8 {
                let mut outer = BoolQuery::new();
                outer.set_must(&current).unwrap();
                current = outer;
            }
            black_box(current.to_fragment())
        })
    });
}

criterion_group!(
    benches,
    bench_bool_composition,
    bench_request_render,
    bench_nested_splice
);
criterion_main!(benches);
