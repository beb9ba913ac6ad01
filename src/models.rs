use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    pub checked: bool,
}

impl ChecklistItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            checked: false,
        }
    }
}

/// Snapshot of one day's checklist, keyed by `date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub email: String,
    #[serde(rename = "pdfBase64", default)]
    pub pdf_base64: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChecklistView {
    pub date: String,
    pub items: Vec<ChecklistItem>,
    pub completed: u32,
    pub total: u32,
    pub percentage: f64,
    pub day_changed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub date: String,
    pub label: String,
    pub completed: u32,
    pub total: u32,
    pub percentage: f64,
    pub bar_height: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryView {
    pub records: Vec<HistoryPoint>,
    pub max_completed: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub checklist: ChecklistView,
    pub history: HistoryView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SendStatus {
    pub sending: bool,
}
