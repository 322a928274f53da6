use serde_json::Value;
use tracing::debug;

use crate::config::RequestSettings;
use crate::node::accessor;
use crate::node::{guard, Category, Fragment, Node, OneOrMany};
use crate::Result;

/// Top-level search document
///
/// Every node slot is guarded: `query` takes a query, `post_filter` a
/// filter, and so on. Aggregations and suggesters are merged by name into
/// `aggs` / `suggest`, so adding a second entry with the same name
/// replaces only that entry.
///
/// # Example
///
/// ```
/// use squidex_dsl::aggregation::TermsAggregation;
/// use squidex_dsl::filter::TermFilter;
/// use squidex_dsl::mixin::ValuesSource;
/// use squidex_dsl::query::MatchQuery;
/// use squidex_dsl::request::{SearchRequest, Sort, SortOrder};
/// use serde_json::json;
///
/// # fn main() -> squidex_dsl::Result<()> {
/// let mut by_tag = TermsAggregation::new("by_tag");
/// by_tag.set_field("tags");
///
/// let mut newest = Sort::field("created_at");
/// newest.set_order(SortOrder::Desc);
///
/// let mut request = SearchRequest::new();
/// request
///     .set_query(&MatchQuery::new("title", "rust"))?
///     .set_post_filter(&TermFilter::new("status", "published"))?
///     .set_aggregation(&by_tag)?
///     .set_sort(&newest)?
///     .set_size(20);
///
/// assert_eq!(
///     request.to_document(),
///     json!({
///         "query": { "match": { "title": { "query": "rust" } } },
///         "post_filter": { "term": { "status": "published" } },
///         "aggs": { "by_tag": { "terms": { "field": "tags" } } },
///         "sort": [{ "created_at": { "order": "desc" } }],
///         "size": 20
///     })
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchRequest {
    body: Fragment,
    pretty: bool,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply request defaults; settings left unset keep current values
    pub fn with_settings(mut self, settings: &RequestSettings) -> Self {
        if let Some(size) = settings.size {
            self.set_size(size);
        }
        if let Some(from) = settings.from {
            self.set_from(from);
        }
        if let Some(timeout) = &settings.timeout {
            self.set_timeout(timeout.clone());
        }
        if settings.explain {
            self.set_explain(true);
        }
        if settings.version {
            self.set_version(true);
        }
        if settings.track_scores {
            self.set_track_scores(true);
        }
        self.pretty = settings.pretty;
        self
    }

    pub fn query(&self) -> Option<&Value> {
        accessor::get(&self.body, "query")
    }

    pub fn set_query(&mut self, query: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(query, Category::Query, "query")?;
        accessor::set(&mut self.body, "query", fragment);
        Ok(self)
    }

    /// Filter applied to hits after aggregations are computed
    pub fn post_filter(&self) -> Option<&Value> {
        accessor::get(&self.body, "post_filter")
    }

    pub fn set_post_filter(&mut self, filter: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(filter, Category::Filter, "post_filter")?;
        accessor::set(&mut self.body, "post_filter", fragment);
        Ok(self)
    }

    pub fn aggregations(&self) -> Option<&Fragment> {
        accessor::get_object(&self.body, "aggs")
    }

    /// Merge a named aggregation into `aggs`
    pub fn set_aggregation(&mut self, aggregation: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(aggregation, Category::Aggregation, "aggs")?;
        let entry = guard::expect_object(&fragment)?.clone();
        accessor::merge_into(&mut self.body, "aggs", entry);
        Ok(self)
    }

    pub fn suggest(&self) -> Option<&Fragment> {
        accessor::get_object(&self.body, "suggest")
    }

    /// Merge a named suggester into `suggest`
    pub fn set_suggest(&mut self, suggester: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(suggester, Category::Suggester, "suggest")?;
        let entry = guard::expect_object(&fragment)?.clone();
        accessor::merge_into(&mut self.body, "suggest", entry);
        Ok(self)
    }

    /// Text shared by every suggester without its own
    pub fn suggest_text(&self) -> Option<&str> {
        self.suggest()
            .and_then(|suggest| accessor::get_str(suggest, "text"))
    }

    pub fn set_suggest_text(&mut self, text: impl Into<String>) -> &mut Self {
        accessor::set(accessor::object_mut(&mut self.body, "suggest"), "text", text.into());
        self
    }

    pub fn sort(&self) -> Option<&[Value]> {
        accessor::get_array(&self.body, "sort")
    }

    /// Append a sort criterion, or replace them all with a list
    pub fn set_sort<'a>(&mut self, sorts: impl Into<OneOrMany<&'a dyn Node>>) -> Result<&mut Self> {
        let fragments = accessor::splice_all(sorts.into(), Category::Sort, "sort")?;
        accessor::accumulate(&mut self.body, "sort", fragments);
        Ok(self)
    }

    pub fn highlight(&self) -> Option<&Value> {
        accessor::get(&self.body, "highlight")
    }

    pub fn set_highlight(&mut self, highlight: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(highlight, Category::Highlight, "highlight")?;
        accessor::set(&mut self.body, "highlight", fragment);
        Ok(self)
    }

    pub fn rescore(&self) -> Option<&Value> {
        accessor::get(&self.body, "rescore")
    }

    pub fn set_rescore(&mut self, rescore: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(rescore, Category::Rescore, "rescore")?;
        accessor::set(&mut self.body, "rescore", fragment);
        Ok(self)
    }

    pub fn size(&self) -> Option<u64> {
        accessor::get_u64(&self.body, "size")
    }

    pub fn set_size(&mut self, size: u64) -> &mut Self {
        accessor::set(&mut self.body, "size", size);
        self
    }

    pub fn from(&self) -> Option<u64> {
        accessor::get_u64(&self.body, "from")
    }

    pub fn set_from(&mut self, from: u64) -> &mut Self {
        accessor::set(&mut self.body, "from", from);
        self
    }

    pub fn timeout(&self) -> Option<&str> {
        accessor::get_str(&self.body, "timeout")
    }

    pub fn set_timeout(&mut self, timeout: impl Into<String>) -> &mut Self {
        accessor::set(&mut self.body, "timeout", timeout.into());
        self
    }

    pub fn explain(&self) -> Option<bool> {
        accessor::get_bool(&self.body, "explain")
    }

    pub fn set_explain(&mut self, explain: bool) -> &mut Self {
        accessor::set(&mut self.body, "explain", explain);
        self
    }

    pub fn version(&self) -> Option<bool> {
        accessor::get_bool(&self.body, "version")
    }

    pub fn set_version(&mut self, version: bool) -> &mut Self {
        accessor::set(&mut self.body, "version", version);
        self
    }

    pub fn min_score(&self) -> Option<f64> {
        accessor::get_f64(&self.body, "min_score")
    }

    pub fn set_min_score(&mut self, score: f64) -> Result<&mut Self> {
        accessor::set_f64(&mut self.body, "min_score", score)?;
        Ok(self)
    }

    /// Stored fields returned per hit
    pub fn fields(&self) -> Option<&[Value]> {
        accessor::get_array(&self.body, "fields")
    }

    pub fn set_fields(&mut self, fields: impl Into<OneOrMany<Value>>) -> &mut Self {
        accessor::accumulate(&mut self.body, "fields", fields.into());
        self
    }

    /// Compute scores even when sorting on a field
    pub fn track_scores(&self) -> Option<bool> {
        accessor::get_bool(&self.body, "track_scores")
    }

    pub fn set_track_scores(&mut self, track: bool) -> &mut Self {
        accessor::set(&mut self.body, "track_scores", track);
        self
    }

    /// Snapshot of the whole document
    pub fn to_document(&self) -> Value {
        Value::Object(self.body.clone())
    }

    /// Render the document, indented when the settings asked for it
    pub fn to_json_string(&self) -> Result<String> {
        debug!(
            sections = self.body.len(),
            pretty = self.pretty,
            "rendering search request"
        );
        let json = if self.pretty {
            serde_json::to_string_pretty(&self.body)?
        } else {
            serde_json::to_string(&self.body)?
        };
        Ok(json)
    }
}
