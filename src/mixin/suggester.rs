//! Suggester mixins and the direct-generator settings shared by term
//! suggesters and direct generators

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Composite, Fragment, Mixin};
use crate::Result;

/// Shared state of suggesters: `{ <name>: { text, <kind>: { ... } } }`
#[derive(Clone, Debug, PartialEq)]
pub struct SuggesterCore {
    name: String,
    kind: &'static str,
    entry: Fragment,
    body: Fragment,
}

impl SuggesterCore {
    pub fn new(name: impl Into<String>, kind: &'static str) -> Self {
        Self {
            name: name.into(),
            kind,
            entry: Fragment::new(),
            body: Fragment::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Per-suggester settings below the kind key
    pub fn body(&self) -> &Fragment {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut Fragment {
        &mut self.body
    }

    fn entry(&self) -> &Fragment {
        &self.entry
    }

    fn entry_mut(&mut self) -> &mut Fragment {
        &mut self.entry
    }
}

impl Composite for SuggesterCore {
    const CATEGORY: Category = Category::Suggester;

    fn fragment(&self) -> Value {
        let mut entry = self.entry.clone();
        entry.insert(self.kind.to_string(), Value::Object(self.body.clone()));
        accessor::wrap(&self.name, Value::Object(entry))
    }
}

/// Operations common to every suggester
pub trait SuggesterNode: Mixin<Core = SuggesterCore> + Sized {
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Text to produce suggestions for
    fn text(&self) -> Option<&str> {
        accessor::get_str(self.core().entry(), "text")
    }

    fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().entry_mut(), "text", text.into());
        self
    }
}

/// Settings shared by the term and phrase suggesters
pub trait SuggestContext: SuggesterNode {
    fn analyzer(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "analyzer")
    }

    fn set_analyzer(&mut self, analyzer: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "analyzer", analyzer.into());
        self
    }

    fn field(&self) -> Option<&str> {
        accessor::get_str(self.core().body(), "field")
    }

    fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "field", field.into());
        self
    }

    /// Maximum suggestions returned per token
    fn size(&self) -> Option<u64> {
        accessor::get_u64(self.core().body(), "size")
    }

    fn set_size(&mut self, size: u64) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "size", size);
        self
    }

    /// Candidates gathered per shard
    fn shard_size(&self) -> Option<u64> {
        accessor::get_u64(self.core().body(), "shard_size")
    }

    fn set_shard_size(&mut self, size: u64) -> &mut Self {
        accessor::set(self.core_mut().body_mut(), "shard_size", size);
        self
    }
}

/// Which terms a direct spellchecker suggests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestMode {
    /// Only for terms missing from the index
    Missing,
    /// Only terms more frequent than the input
    Popular,
    Always,
}

impl SuggestMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestMode::Missing => "missing",
            SuggestMode::Popular => "popular",
            SuggestMode::Always => "always",
        }
    }
}

/// Ordering of suggestions per token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestSort {
    Score,
    Frequency,
}

impl SuggestSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestSort::Score => "score",
            SuggestSort::Frequency => "frequency",
        }
    }
}

/// Similarity measure between input and suggested terms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringDistance {
    Internal,
    DamerauLevenshtein,
    /// Spelled as the engine spells it
    #[serde(rename = "levenstein")]
    Levenshtein,
    Jarowinkler,
    Ngram,
}

impl StringDistance {
    pub fn as_str(&self) -> &'static str {
        match self {
            StringDistance::Internal => "internal",
            StringDistance::DamerauLevenshtein => "damerau_levenshtein",
            StringDistance::Levenshtein => "levenstein",
            StringDistance::Jarowinkler => "jarowinkler",
            StringDistance::Ngram => "ngram",
        }
    }
}

/// Direct spellchecker settings, shared by term suggesters and phrase
/// suggester candidate generators
pub trait DirectSettings: Sized {
    fn settings(&self) -> &Fragment;

    fn settings_mut(&mut self) -> &mut Fragment;

    fn accuracy(&self) -> Option<f64> {
        accessor::get_f64(self.settings(), "accuracy")
    }

    fn set_accuracy(&mut self, accuracy: f64) -> Result<&mut Self> {
        accessor::set_f64(self.settings_mut(), "accuracy", accuracy)?;
        Ok(self)
    }

    fn suggest_mode(&self) -> Option<SuggestMode> {
        accessor::get_enum(self.settings(), "suggest_mode")
    }

    fn set_suggest_mode(&mut self, mode: SuggestMode) -> &mut Self {
        accessor::set(self.settings_mut(), "suggest_mode", mode.as_str());
        self
    }

    fn sort(&self) -> Option<SuggestSort> {
        accessor::get_enum(self.settings(), "sort")
    }

    fn set_sort(&mut self, sort: SuggestSort) -> &mut Self {
        accessor::set(self.settings_mut(), "sort", sort.as_str());
        self
    }

    fn string_distance(&self) -> Option<StringDistance> {
        accessor::get_enum(self.settings(), "string_distance")
    }

    fn set_string_distance(&mut self, distance: StringDistance) -> &mut Self {
        accessor::set(self.settings_mut(), "string_distance", distance.as_str());
        self
    }

    fn max_edits(&self) -> Option<u64> {
        accessor::get_u64(self.settings(), "max_edits")
    }

    fn set_max_edits(&mut self, edits: u64) -> &mut Self {
        accessor::set(self.settings_mut(), "max_edits", edits);
        self
    }

    fn max_inspections(&self) -> Option<u64> {
        accessor::get_u64(self.settings(), "max_inspections")
    }

    fn set_max_inspections(&mut self, inspections: u64) -> &mut Self {
        accessor::set(self.settings_mut(), "max_inspections", inspections);
        self
    }

    fn max_term_freq(&self) -> Option<f64> {
        accessor::get_f64(self.settings(), "max_term_freq")
    }

    fn set_max_term_freq(&mut self, freq: f64) -> Result<&mut Self> {
        accessor::set_f64(self.settings_mut(), "max_term_freq", freq)?;
        Ok(self)
    }

    fn prefix_length(&self) -> Option<u64> {
        accessor::get_u64(self.settings(), "prefix_length")
    }

    fn set_prefix_length(&mut self, len: u64) -> &mut Self {
        accessor::set(self.settings_mut(), "prefix_length", len);
        self
    }

    fn min_word_len(&self) -> Option<u64> {
        accessor::get_u64(self.settings(), "min_word_len")
    }

    fn set_min_word_len(&mut self, len: u64) -> &mut Self {
        accessor::set(self.settings_mut(), "min_word_len", len);
        self
    }

    fn min_doc_freq(&self) -> Option<f64> {
        accessor::get_f64(self.settings(), "min_doc_freq")
    }

    fn set_min_doc_freq(&mut self, freq: f64) -> Result<&mut Self> {
        accessor::set_f64(self.settings_mut(), "min_doc_freq", freq)?;
        Ok(self)
    }
}
