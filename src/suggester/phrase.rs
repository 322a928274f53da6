//! Phrase suggester - whole-phrase corrections scored by an n-gram model

use serde_json::Value;

use crate::mixin::{SuggestContext, SuggesterCore, SuggesterNode};
use crate::node::accessor;
use crate::node::{Category, Fragment, Mixin, Node, OneOrMany};
use crate::Result;

/// Suggests corrected phrases built from per-token candidates
///
/// Candidates come from one or more [`crate::suggester::DirectGenerator`]s;
/// `set_direct_generator` rejects anything else.
#[derive(Clone, Debug, PartialEq)]
pub struct PhraseSuggester {
    core: SuggesterCore,
}

impl PhraseSuggester {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            core: SuggesterCore::new(name, "phrase"),
        }
    }

    pub fn direct_generator(&self) -> Option<&[Value]> {
        accessor::get_array(self.core.body(), "direct_generator")
    }

    /// Append a candidate generator, or replace them all with a list
    pub fn set_direct_generator<'a>(
        &mut self,
        generators: impl Into<OneOrMany<&'a dyn Node>>,
    ) -> Result<&mut Self> {
        let fragments =
            accessor::splice_all(generators.into(), Category::Generator, "direct_generator")?;
        accessor::accumulate(self.core.body_mut(), "direct_generator", fragments);
        Ok(self)
    }

    /// Largest shingle size of the field
    pub fn gram_size(&self) -> Option<u64> {
        accessor::get_u64(self.core.body(), "gram_size")
    }

    pub fn set_gram_size(&mut self, size: u64) -> &mut Self {
        accessor::set(self.core.body_mut(), "gram_size", size);
        self
    }

    /// Likelihood that a term is misspelled even if it is in the dictionary
    pub fn real_word_error_likelihood(&self) -> Option<f64> {
        accessor::get_f64(self.core.body(), "real_word_error_likelihood")
    }

    pub fn set_real_word_error_likelihood(&mut self, likelihood: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "real_word_error_likelihood", likelihood)?;
        Ok(self)
    }

    /// Score factor a suggestion must beat relative to the input
    pub fn confidence(&self) -> Option<f64> {
        accessor::get_f64(self.core.body(), "confidence")
    }

    pub fn set_confidence(&mut self, confidence: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "confidence", confidence)?;
        Ok(self)
    }

    /// Maximum misspelled terms, absolute or as a fraction of the tokens
    pub fn max_errors(&self) -> Option<f64> {
        accessor::get_f64(self.core.body(), "max_errors")
    }

    pub fn set_max_errors(&mut self, max: f64) -> Result<&mut Self> {
        accessor::set_f64(self.core.body_mut(), "max_errors", max)?;
        Ok(self)
    }

    pub fn separator(&self) -> Option<&str> {
        accessor::get_str(self.core.body(), "separator")
    }

    pub fn set_separator(&mut self, separator: impl Into<String>) -> &mut Self {
        accessor::set(self.core.body_mut(), "separator", separator.into());
        self
    }

    /// Tags wrapped around changed tokens
    pub fn highlight(&self) -> Option<&Fragment> {
        accessor::get_object(self.core.body(), "highlight")
    }

    pub fn set_highlight(
        &mut self,
        pre_tag: impl Into<String>,
        post_tag: impl Into<String>,
    ) -> &mut Self {
        let mut tags = Fragment::new();
        tags.insert("pre_tag".to_string(), Value::from(pre_tag.into()));
        tags.insert("post_tag".to_string(), Value::from(post_tag.into()));
        accessor::set(self.core.body_mut(), "highlight", Value::Object(tags));
        self
    }
}

impl Mixin for PhraseSuggester {
    type Core = SuggesterCore;

    fn core(&self) -> &SuggesterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut SuggesterCore {
        &mut self.core
    }
}

impl SuggesterNode for PhraseSuggester {}

impl SuggestContext for PhraseSuggester {}
