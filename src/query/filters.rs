use serde::{Serialize, Serializer};
use serde_json::{Value, json};
use std::ops;

/// A server-side filter predicate.
///
/// Leaves are built with the constructor methods ([`FilterExpr::eq`],
/// [`FilterExpr::between`], ...); predicates compose with `&` (and),
/// `|` (or) and `!` (not).
#[derive(Debug, Clone, PartialEq)]
pub enum FilterExpr {
    Lt { field: String, value: Value },
    Gt { field: String, value: Value },
    Lte { field: String, value: Value },
    Gte { field: String, value: Value },
    Ne { field: String, value: Value },
    Eq { field: String, value: Value },
    StartsWith { field: String, value: Value },
    EndsWith { field: String, value: Value },
    Like { field: String, value: Value },
    Match { field: String, value: Value },
    Between { field: String, from: Value, to: Value },
    In { field: String, values: Vec<Value> },
    Contains { field: String },
    Has { field: String },
    Id { id: String },
    And(Vec<FilterExpr>),
    Or(Vec<FilterExpr>),
    Not(Box<FilterExpr>),
}

impl FilterExpr {
    /// Field is strictly less than the value
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lt {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field is strictly greater than the value
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gt {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field is less than or equal to the value
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Lte {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field is greater than or equal to the value
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Gte {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field differs from the value
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Ne {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field equals the value
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field starts with the value
    pub fn starts_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::StartsWith {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field ends with the value
    pub fn ends_with(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::EndsWith {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field contains the value as a substring
    pub fn like(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Like {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field matches the value using the server's text analyzer
    pub fn matches(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Match {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Field lies within the `[from, to)` range
    pub fn between(
        field: impl Into<String>,
        from: impl Into<Value>,
        to: impl Into<Value>,
    ) -> Self {
        Self::Between {
            field: field.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Field equals one of the values
    pub fn is_in(
        field: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Self {
        Self::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Record contains the field
    pub fn contains(field: impl Into<String>) -> Self {
        Self::Contains {
            field: field.into(),
        }
    }

    /// Record has the field set
    pub fn has(field: impl Into<String>) -> Self {
        Self::Has {
            field: field.into(),
        }
    }

    /// Record id equals the value
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id { id: id.into() }
    }

    pub(crate) fn to_value(&self) -> Value {
        match self {
            Self::Lt { field, value } => json!({ "_lt": { "_field": field, "_value": value } }),
            Self::Gt { field, value } => json!({ "_gt": { "_field": field, "_value": value } }),
            Self::Lte { field, value } => json!({ "_lte": { "_field": field, "_value": value } }),
            Self::Gte { field, value } => json!({ "_gte": { "_field": field, "_value": value } }),
            Self::Ne { field, value } => json!({ "_ne": { "_field": field, "_value": value } }),
            Self::Eq { field, value } => json!({ "_eq": { "_field": field, "_value": value } }),
            Self::StartsWith { field, value } => {
                json!({ "_startsWith": { "_field": field, "_value": value } })
            }
            Self::EndsWith { field, value } => {
                json!({ "_endsWith": { "_field": field, "_value": value } })
            }
            Self::Like { field, value } => json!({ "_like": { "_field": field, "_value": value } }),
            Self::Match { field, value } => {
                json!({ "_match": { "_field": field, "_value": value } })
            }
            Self::Between { field, from, to } => {
                json!({ "_between": { "_field": field, "_from": from, "_to": to } })
            }
            Self::In { field, values } => {
                json!({ "_in": { "_field": field, "_values": values } })
            }
            Self::Contains { field } => json!({ "_contains": field }),
            Self::Has { field } => json!({ "_has": field }),
            Self::Id { id } => json!({ "_id": id }),
            Self::And(items) => {
                json!({ "_and": items.iter().map(Self::to_value).collect::<Vec<_>>() })
            }
            Self::Or(items) => {
                json!({ "_or": items.iter().map(Self::to_value).collect::<Vec<_>>() })
            }
            Self::Not(item) => json!({ "_not": item.to_value() }),
        }
    }
}

impl Serialize for FilterExpr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

impl ops::BitAnd for FilterExpr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        match self {
            Self::And(mut items) => {
                items.push(rhs);
                Self::And(items)
            }
            other => Self::And(vec![other, rhs]),
        }
    }
}

impl ops::BitOr for FilterExpr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        match self {
            Self::Or(mut items) => {
                items.push(rhs);
                Self::Or(items)
            }
            other => Self::Or(vec![other, rhs]),
        }
    }
}

impl ops::Not for FilterExpr {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(Box::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_serializes_to_field_value_pair() {
        assert_eq!(
            FilterExpr::eq("title", "phishing").to_value(),
            json!({ "_eq": { "_field": "title", "_value": "phishing" } })
        );
    }

    #[test]
    fn between_serializes_from_and_to() {
        assert_eq!(
            FilterExpr::between("date", 0, 1000).to_value(),
            json!({ "_between": { "_field": "date", "_from": 0, "_to": 1000 } })
        );
    }

    #[test]
    fn is_in_serializes_values_list() {
        assert_eq!(
            FilterExpr::is_in("severity", [1, 2, 3]).to_value(),
            json!({ "_in": { "_field": "severity", "_values": [1, 2, 3] } })
        );
    }

    #[test]
    fn bitand_flattens_into_one_and_list() {
        let expr = FilterExpr::eq("a", 1) & FilterExpr::eq("b", 2) & FilterExpr::eq("c", 3);

        assert_eq!(
            expr.to_value(),
            json!({ "_and": [
                { "_eq": { "_field": "a", "_value": 1 } },
                { "_eq": { "_field": "b", "_value": 2 } },
                { "_eq": { "_field": "c", "_value": 3 } },
            ] })
        );
    }

    #[test]
    fn not_wraps_the_expression() {
        let expr = !FilterExpr::has("caseId");

        assert_eq!(expr.to_value(), json!({ "_not": { "_has": "caseId" } }));
    }

    #[test]
    fn or_of_and_keeps_nesting() {
        let expr = (FilterExpr::eq("a", 1) & FilterExpr::eq("b", 2)) | FilterExpr::eq("c", 3);

        assert_eq!(
            expr.to_value(),
            json!({ "_or": [
                { "_and": [
                    { "_eq": { "_field": "a", "_value": 1 } },
                    { "_eq": { "_field": "b", "_value": 2 } },
                ] },
                { "_eq": { "_field": "c", "_value": 3 } },
            ] })
        );
    }
}
