use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload for creating an alert.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub source: String,
    pub source_ref: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_template: Option<String>,
}

impl InputAlert {
    /// Create an alert payload with the required fields set
    pub fn new(
        alert_type: impl Into<String>,
        source: impl Into<String>,
        source_ref: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            alert_type: alert_type.into(),
            source: source.into(),
            source_ref: source_ref.into(),
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}

/// Field updates for a single alert; unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputUpdateAlert {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tlp: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pap: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Field updates applied to several alerts at once.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InputBulkUpdateAlert {
    pub ids: Vec<String>,
    #[serde(flatten)]
    pub fields: InputUpdateAlert,
}

/// An alert as returned by the server.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputAlert {
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
    #[serde(rename = "type")]
    pub alert_type: String,
    pub source: String,
    pub source_ref: String,
    #[serde(default)]
    pub external_link: Option<String>,
    pub title: String,
    pub description: String,
    pub severity: u8,
    pub date: i64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub tlp: u8,
    pub pap: u8,
    pub follow: bool,
    #[serde(default)]
    pub custom_fields: Option<Value>,
    #[serde(default)]
    pub case_template: Option<String>,
    #[serde(default)]
    pub observable_count: Option<u64>,
    #[serde(default)]
    pub case_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub extra_data: Option<Value>,
}
