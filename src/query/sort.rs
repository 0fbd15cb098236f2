use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::ops;

/// Sort direction for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// An ordered sequence of (field, direction) sort criteria.
///
/// Criteria concatenate with `&`; the server applies them left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortExpr {
    fields: Vec<(String, Order)>,
}

impl SortExpr {
    /// Sort ascending by the given field
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Order::Asc)],
        }
    }

    /// Sort descending by the given field
    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            fields: vec![(field.into(), Order::Desc)],
        }
    }

    pub(crate) fn to_value(&self) -> Value {
        let fields: Vec<Value> = self
            .fields
            .iter()
            .map(|(field, order)| {
                let mut criterion = Map::new();
                criterion.insert(field.clone(), json!(order.as_str()));
                Value::Object(criterion)
            })
            .collect();

        json!({ "_fields": fields })
    }
}

impl Serialize for SortExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl ops::BitAnd for SortExpr {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self {
        self.fields.extend(rhs.fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_criterion() {
        assert_eq!(
            SortExpr::asc("title").to_value(),
            json!({ "_fields": [{ "title": "asc" }] })
        );
    }

    #[test]
    fn concatenation_keeps_criterion_order() {
        let sort = SortExpr::desc("severity") & SortExpr::asc("date") & SortExpr::asc("title");

        assert_eq!(
            sort.to_value(),
            json!({ "_fields": [
                { "severity": "desc" },
                { "date": "asc" },
                { "title": "asc" },
            ] })
        );
    }
}
