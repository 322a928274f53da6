use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::node::accessor;
use crate::node::{Category, Fragment, Node};

/// Sort direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Value picked from multi-valued fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    Min,
    Max,
    Sum,
    Avg,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Min => "min",
            SortMode::Max => "max",
            SortMode::Sum => "sum",
            SortMode::Avg => "avg",
        }
    }
}

/// One sort criterion: `{ <field>: { order, missing, mode } }`
#[derive(Clone, Debug, PartialEq)]
pub struct Sort {
    field: String,
    options: Fragment,
}

impl Sort {
    /// Sort on a document field
    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            options: Fragment::new(),
        }
    }

    /// Sort on relevance score
    pub fn score() -> Self {
        Self::field("_score")
    }

    pub fn name(&self) -> &str {
        &self.field
    }

    pub fn order(&self) -> Option<SortOrder> {
        accessor::get_enum(&self.options, "order")
    }

    pub fn set_order(&mut self, order: SortOrder) -> &mut Self {
        accessor::set(&mut self.options, "order", order.as_str());
        self
    }

    /// Placement of documents without the field: `_first`, `_last` or a value
    pub fn missing(&self) -> Option<&Value> {
        accessor::get(&self.options, "missing")
    }

    pub fn set_missing(&mut self, missing: impl Into<Value>) -> &mut Self {
        accessor::set(&mut self.options, "missing", missing);
        self
    }

    pub fn mode(&self) -> Option<SortMode> {
        accessor::get_enum(&self.options, "mode")
    }

    pub fn set_mode(&mut self, mode: SortMode) -> &mut Self {
        accessor::set(&mut self.options, "mode", mode.as_str());
        self
    }
}

impl Node for Sort {
    fn category(&self) -> Category {
        Category::Sort
    }

    fn to_fragment(&self) -> Value {
        accessor::wrap(&self.field, Value::Object(self.options.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sort_fragment() {
        let mut sort = Sort::field("price");
        assert_eq!(sort.order(), None);
        sort.set_order(SortOrder::Desc)
            .set_missing("_last")
            .set_mode(SortMode::Avg);

        assert_eq!(sort.order(), Some(SortOrder::Desc));
        assert_eq!(sort.mode(), Some(SortMode::Avg));
        assert_eq!(
            sort.to_fragment(),
            json!({ "price": { "order": "desc", "missing": "_last", "mode": "avg" } })
        );
    }

    #[test]
    fn test_score_sort() {
        let sort = Sort::score();
        assert_eq!(sort.name(), "_score");
        assert_eq!(sort.category(), Category::Sort);
        assert_eq!(sort.to_fragment(), json!({ "_score": {} }));
    }
}
