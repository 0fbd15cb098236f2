use serde::{Serialize, Serializer};
use serde_json::{Value, json};

/// Pagination window for a query pipeline.
///
/// `from` and `to` are record offsets; `extra_data` names computed fields
/// the server should include with each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginate {
    pub from: u64,
    pub to: u64,
    pub extra_data: Vec<String>,
}

impl Paginate {
    /// Select the records in the `[from, to)` offset range
    pub fn new(from: u64, to: u64) -> Self {
        Self {
            from,
            to,
            extra_data: Vec::new(),
        }
    }

    /// Request extra computed fields alongside each record
    pub fn with_extra_data(mut self, extra_data: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.extra_data = extra_data.into_iter().map(Into::into).collect();
        self
    }

    pub(crate) fn to_value(&self) -> Value {
        json!({
            "from": self.from,
            "to": self.to,
            "extraData": self.extra_data,
        })
    }
}

impl Serialize for Paginate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_value().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_offsets_and_extra_data() {
        let page = Paginate::new(0, 100).with_extra_data(["observableCount", "importDate"]);

        assert_eq!(
            page.to_value(),
            json!({
                "from": 0,
                "to": 100,
                "extraData": ["observableCount", "importDate"],
            })
        );
    }

    #[test]
    fn extra_data_defaults_to_empty_list() {
        assert_eq!(
            Paginate::new(10, 20).to_value(),
            json!({ "from": 10, "to": 20, "extraData": [] })
        );
    }
}
