//! Concrete query node builders
//!
//! Every type here embeds a [`QueryCore`] and implements
//! [`crate::mixin::QueryNode`].

mod bool_query;
mod constant_score_query;
mod filtered_query;
mod function_score_query;
mod fuzzy_query;
mod match_all;
mod match_query;
mod phrase_query;
mod prefix_query;
mod range_query;
mod term_query;
mod terms_query;
mod wildcard_query;

pub use bool_query::BoolQuery;
pub use constant_score_query::ConstantScoreQuery;
pub use filtered_query::FilteredQuery;
pub use function_score_query::FunctionScoreQuery;
pub use fuzzy_query::FuzzyQuery;
pub use match_all::MatchAllQuery;
pub use match_query::MatchQuery;
pub use phrase_query::PhraseQuery;
pub use prefix_query::PrefixQuery;
pub use range_query::RangeQuery;
pub use term_query::TermQuery;
pub use terms_query::TermsQuery;
pub use wildcard_query::WildcardQuery;

use serde_json::Value;

use crate::mixin::QueryCore;
use crate::node::{Fragment, Mixin};

/// Queries shaped `{ <kind>: { <field>: { ... } } }`
///
/// The field name is kept by the core, so fields such as `_id` or
/// `boost` are keyed like any other. Renaming the field moves the
/// per-field settings to the new key.
pub trait FieldQuery: Mixin<Core = QueryCore> + Sized {
    fn field(&self) -> Option<&str> {
        self.core().field()
    }

    fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        self.core_mut().rename_field(field);
        self
    }
}

pub(crate) fn field_core(kind: &'static str, field: String) -> QueryCore {
    QueryCore::keyed(kind, field, Fragment::new().into())
}

pub(crate) fn spec<N: FieldQuery>(node: &N) -> Option<&Fragment> {
    node.core().field_value().and_then(Value::as_object)
}

pub(crate) fn spec_mut<N: FieldQuery>(node: &mut N) -> &mut Fragment {
    node.core_mut().field_object_mut()
}
