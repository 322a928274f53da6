use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Fragment, Node, OneOrMany};

/// Highlighting of matched fragments in the response
///
/// # Example
///
/// ```
/// use squidex_dsl::request::Highlight;
/// use squidex_dsl::node::Node;
/// use serde_json::json;
///
/// let mut highlight = Highlight::new();
/// highlight
///     .set_field("content")
///     .set_pre_tags("<em>")
///     .set_post_tags("</em>")
///     .set_fragment_size(150);
///
/// assert_eq!(
///     highlight.to_fragment(),
///     json!({
///         "fields": { "content": {} },
///         "pre_tags": ["<em>"],
///         "post_tags": ["</em>"],
///         "fragment_size": 150
///     })
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Highlight {
    body: Fragment,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlighted fields keyed by name
    pub fn fields(&self) -> Option<&Fragment> {
        accessor::get_object(&self.body, "fields")
    }

    /// Highlight a field with the global options
    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.set_field_options(field, Fragment::new())
    }

    /// Highlight a field with its own options, replacing earlier ones
    pub fn set_field_options(&mut self, field: impl Into<String>, options: Fragment) -> &mut Self {
        let mut entry = Fragment::new();
        entry.insert(field.into(), Value::Object(options));
        accessor::merge_into(&mut self.body, "fields", entry);
        self
    }

    pub fn pre_tags(&self) -> Option<&[Value]> {
        accessor::get_array(&self.body, "pre_tags")
    }

    /// Append a tag, or replace them all with a list
    pub fn set_pre_tags(&mut self, tags: impl Into<OneOrMany<Value>>) -> &mut Self {
        accessor::accumulate(&mut self.body, "pre_tags", tags.into());
        self
    }

    pub fn post_tags(&self) -> Option<&[Value]> {
        accessor::get_array(&self.body, "post_tags")
    }

    pub fn set_post_tags(&mut self, tags: impl Into<OneOrMany<Value>>) -> &mut Self {
        accessor::accumulate(&mut self.body, "post_tags", tags.into());
        self
    }

    /// Characters per highlighted fragment
    pub fn fragment_size(&self) -> Option<u64> {
        accessor::get_u64(&self.body, "fragment_size")
    }

    pub fn set_fragment_size(&mut self, size: u64) -> &mut Self {
        accessor::set(&mut self.body, "fragment_size", size);
        self
    }

    pub fn number_of_fragments(&self) -> Option<u64> {
        accessor::get_u64(&self.body, "number_of_fragments")
    }

    pub fn set_number_of_fragments(&mut self, count: u64) -> &mut Self {
        accessor::set(&mut self.body, "number_of_fragments", count);
        self
    }

    /// Only highlight fields the query matched on
    pub fn require_field_match(&self) -> Option<bool> {
        accessor::get_bool(&self.body, "require_field_match")
    }

    pub fn set_require_field_match(&mut self, require: bool) -> &mut Self {
        accessor::set(&mut self.body, "require_field_match", require);
        self
    }
}

impl Node for Highlight {
    fn category(&self) -> Category {
        Category::Highlight
    }

    fn to_fragment(&self) -> Value {
        Value::Object(self.body.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_highlight_fields_merge() {
        let mut options = Fragment::new();
        options.insert("number_of_fragments".into(), json!(0));

        let mut highlight = Highlight::new();
        assert_eq!(highlight.fields(), None);
        highlight
            .set_field("title")
            .set_field("body")
            .set_field_options("title", options);

        assert_eq!(
            highlight.fields().map(|f| Value::Object(f.clone())),
            Some(json!({ "title": { "number_of_fragments": 0 }, "body": {} }))
        );
    }

    #[test]
    fn test_highlight_tags_accumulate() {
        let mut highlight = Highlight::new();
        highlight.set_pre_tags("<b>").set_pre_tags("<i>");
        assert_eq!(highlight.pre_tags(), Some(&[json!("<b>"), json!("<i>")][..]));

        highlight.set_pre_tags(vec!["<mark>"]);
        assert_eq!(highlight.pre_tags(), Some(&[json!("<mark>")][..]));
        assert_eq!(highlight.post_tags(), None);
    }
}
