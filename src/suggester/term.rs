//! Term suggester - per-token spelling corrections

use crate::mixin::{DirectSettings, SuggestContext, SuggesterCore, SuggesterNode};
use crate::node::{Fragment, Mixin};

/// Suggests corrections for each token of the input text
///
/// # Example
///
/// ```
/// use squidex_dsl::mixin::{DirectSettings, SuggestContext, SuggesterNode};
/// use squidex_dsl::suggester::{SuggestMode, TermSuggester};
/// use squidex_dsl::node::Node;
/// use serde_json::json;
///
/// let mut suggester = TermSuggester::new("fix_typos");
/// suggester.set_text("rsut progamming").set_field("body");
/// suggester.set_suggest_mode(SuggestMode::Popular).set_max_edits(2);
///
/// assert_eq!(
///     suggester.to_fragment(),
///     json!({ "fix_typos": {
///         "text": "rsut progamming",
///         "term": { "field": "body", "suggest_mode": "popular", "max_edits": 2 }
///     } })
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TermSuggester {
    core: SuggesterCore,
}

impl TermSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: SuggesterCore::new(name, "term"),
        }
    }
}

impl Mixin for TermSuggester {
    type Core = SuggesterCore;

    fn core(&self) -> &SuggesterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SuggesterCore {
        &mut self.core
    }
}

impl SuggesterNode for TermSuggester {}

impl SuggestContext for TermSuggester {}

impl DirectSettings for TermSuggester {
    fn settings(&self) -> &Fragment {
        self.core.body()
    }

    fn settings_mut(&mut self) -> &mut Fragment {
        self.core.body_mut()
    }
}
