//! Candidate generator for the phrase suggester

use serde_json::Value;

use crate::mixin::DirectSettings;
use crate::node::accessor;
use crate::node::{Category, Fragment, Node};

/// Direct spellchecker candidate generator
///
/// Not a suggester itself: it carries [`Category::Generator`] and is only
/// accepted by [`crate::suggester::PhraseSuggester::set_direct_generator`].
/// Renders as a flat settings object `{ field, size, ... }`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectGenerator {
    settings: Fragment,
}

impl DirectGenerator {
    pub fn new(field: impl Into<String>) -> Self {
        let mut settings = Fragment::new();
        accessor::set(&mut settings, "field", field.into());
        Self { settings }
    }

    pub fn field(&self) -> Option<&str> {
        accessor::get_str(&self.settings, "field")
    }

    pub fn set_field(&mut self, field: impl Into<String>) -> &mut Self {
        accessor::set(&mut self.settings, "field", field.into());
        self
    }

    /// Candidates generated per token
    pub fn size(&self) -> Option<u64> {
        accessor::get_u64(&self.settings, "size")
    }

    pub fn set_size(&mut self, size: u64) -> &mut Self {
        accessor::set(&mut self.settings, "size", size);
        self
    }

    /// Analyzer applied to each token before candidates are generated
    pub fn pre_filter(&self) -> Option<&str> {
        accessor::get_str(&self.settings, "pre_filter")
    }

    pub fn set_pre_filter(&mut self, analyzer: impl Into<String>) -> &mut Self {
        accessor::set(&mut self.settings, "pre_filter", analyzer.into());
        self
    }

    /// Analyzer applied to each candidate before it is returned
    pub fn post_filter(&self) -> Option<&str> {
        accessor::get_str(&self.settings, "post_filter")
    }

    pub fn set_post_filter(&mut self, analyzer: impl Into<String>) -> &mut Self {
        accessor::set(&mut self.settings, "post_filter", analyzer.into());
        self
    }
}

impl DirectSettings for DirectGenerator {
    fn settings(&self) -> &Fragment {
        &self.settings
    }

    fn settings_mut(&mut self) -> &mut Fragment {
        &mut self.settings
    }
}

impl Node for DirectGenerator {
    fn category(&self) -> Category {
        Category::Generator
    }

    fn to_fragment(&self) -> Value {
        Value::Object(self.settings.clone())
    }
}
