//! Suggester builders
//!
//! Suggesters render as `{ <name>: { text, <term|phrase>: { ... } } }` and
//! are merged into a request's `suggest` section.

mod direct_generator;
mod phrase;
mod term;

pub use direct_generator::DirectGenerator;
pub use phrase::PhraseSuggester;
pub use term::TermSuggester;

pub use crate::mixin::{StringDistance, SuggestMode, SuggestSort};
