use serde::Deserialize;
use serde_json::Value;

/// A case as returned by the server, e.g. after promoting or merging alerts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputCase {
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
    pub number: u64,
    pub title: String,
    pub description: String,
    pub severity: u8,
    pub start_date: i64,
    #[serde(default)]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub flag: bool,
    pub tlp: u8,
    pub pap: u8,
    pub status: String,
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub impact_status: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub custom_fields: Option<Value>,
    #[serde(default)]
    pub extra_data: Option<Value>,
}
