use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for attaching an observable to an alert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputObservable {
    pub data_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ioc: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sighted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sighted_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_similarity: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl InputObservable {
    /// Create an observable payload for the given data type and value
    pub fn new(data_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            data: Some(data.into()),
            ..Self::default()
        }
    }
}

/// An observable as returned by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputObservable {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub record_type: String,
    #[serde(rename = "_createdBy")]
    pub created_by: String,
    #[serde(rename = "_updatedBy", default)]
    pub updated_by: Option<String>,
    #[serde(rename = "_createdAt")]
    pub created_at: i64,
    #[serde(rename = "_updatedAt", default)]
    pub updated_at: Option<i64>,
    pub data_type: String,
    #[serde(default)]
    pub data: Option<String>,
    pub start_date: i64,
    pub tlp: u8,
    pub pap: u8,
    pub ioc: bool,
    pub sighted: bool,
    #[serde(default)]
    pub sighted_at: Option<i64>,
    #[serde(default)]
    pub reports: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub extra_data: Option<Value>,
}
