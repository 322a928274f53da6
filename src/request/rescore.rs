use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Fragment, Node};
use crate::query::ScoreMode;
use crate::Result;

/// Second-pass rescoring of the top hits
///
/// Renders as
/// `{ window_size, query: { rescore_query, query_weight, rescore_query_weight, score_mode } }`.
#[derive(Clone, Debug, PartialEq)]
pub struct Rescore {
    window_size: Option<u64>,
    query: Fragment,
}

impl Rescore {
    pub fn new(rescore_query: &dyn Node) -> Result<Self> {
        let mut rescore = Self {
            window_size: None,
            query: Fragment::new(),
        };
        rescore.set_rescore_query(rescore_query)?;
        Ok(rescore)
    }

    pub fn rescore_query(&self) -> Option<&Value> {
        accessor::get(&self.query, "rescore_query")
    }

    pub fn set_rescore_query(&mut self, query: &dyn Node) -> Result<&mut Self> {
        let fragment = accessor::splice(query, Category::Query, "rescore_query")?;
        accessor::set(&mut self.query, "rescore_query", fragment);
        Ok(self)
    }

    /// Number of top hits per shard that are rescored
    pub fn window_size(&self) -> Option<u64> {
        self.window_size
    }

    pub fn set_window_size(&mut self, size: u64) -> &mut Self {
        self.window_size = Some(size);
        self
    }

    pub fn query_weight(&self) -> Option<f64> {
        accessor::get_f64(&self.query, "query_weight")
    }

    pub fn set_query_weight(&mut self, weight: f64) -> Result<&mut Self> {
        accessor::set_f64(&mut self.query, "query_weight", weight)?;
        Ok(self)
    }

    pub fn rescore_query_weight(&self) -> Option<f64> {
        accessor::get_f64(&self.query, "rescore_query_weight")
    }

    pub fn set_rescore_query_weight(&mut self, weight: f64) -> Result<&mut Self> {
        accessor::set_f64(&mut self.query, "rescore_query_weight", weight)?;
        Ok(self)
    }

    pub fn score_mode(&self) -> Option<ScoreMode> {
        accessor::get_enum(&self.query, "score_mode")
    }

    pub fn set_score_mode(&mut self, mode: ScoreMode) -> &mut Self {
        accessor::set(&mut self.query, "score_mode", mode.as_str());
        self
    }
}

impl Node for Rescore {
    fn category(&self) -> Category {
        Category::Rescore
    }

    fn to_fragment(&self) -> Value {
        let mut outer = Fragment::new();
        if let Some(size) = self.window_size {
            outer.insert("window_size".to_string(), Value::from(size));
        }
        outer.insert("query".to_string(), Value::Object(self.query.clone()));
        Value::Object(outer)
    }
}
