use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One recorded headache episode. This is the canonical shape: `date` is an
/// ISO `YYYY-MM-DD` string, `triggers` and `medications` are id arrays.
/// `severity` stays optional on the storage side so that hand-edited data
/// files missing the field still load; the API validates it on write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadacheEntry {
    pub id: String,
    pub date: String,
    #[serde(default)]
    pub severity: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub entries: BTreeMap<String, HeadacheEntry>,
}

#[derive(Debug, Deserialize)]
pub struct NewEntryRequest {
    pub date: Option<String>,
    pub severity: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub triggers: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

/// Partial update: absent fields keep their stored value.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateEntryRequest {
    pub date: Option<String>,
    pub severity: Option<i64>,
    pub notes: Option<String>,
    pub triggers: Option<Vec<String>>,
    pub medications: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub count: u64,
    pub average_severity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationStat {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub total_headaches: u64,
    pub severity_distribution: [u64; 5],
    pub monthly_frequency: Vec<MonthlyPoint>,
    pub medication_stats: Vec<MedicationStat>,
}

#[derive(Debug, Serialize)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub medications: Vec<CatalogItem>,
    pub triggers: Vec<CatalogItem>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub entries: u64,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_deserializes_with_missing_optional_fields() {
        let entry: HeadacheEntry =
            serde_json::from_str(r#"{"id": "abc", "date": "2024-03-10"}"#).unwrap();
        assert_eq!(entry.id, "abc");
        assert_eq!(entry.date, "2024-03-10");
        assert_eq!(entry.severity, None);
        assert_eq!(entry.notes, None);
        assert!(entry.triggers.is_empty());
        assert!(entry.medications.is_empty());
    }

    #[test]
    fn app_data_round_trips_through_json() {
        let mut data = AppData::default();
        data.entries.insert(
            "abc".to_string(),
            HeadacheEntry {
                id: "abc".to_string(),
                date: "2024-03-10".to_string(),
                severity: Some(4),
                notes: Some("after work".to_string()),
                triggers: vec!["stress".to_string()],
                medications: vec!["ibuprofen".to_string()],
            },
        );

        let payload = serde_json::to_vec_pretty(&data).unwrap();
        let restored: AppData = serde_json::from_slice(&payload).unwrap();
        let entry = restored.entries.get("abc").expect("missing entry");
        assert_eq!(entry.severity, Some(4));
        assert_eq!(entry.medications, vec!["ibuprofen".to_string()]);
    }
}
