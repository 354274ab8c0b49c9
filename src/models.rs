use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One day's record. The stored field is named `battery` so that log files
/// written by earlier versions of the tool load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub battery: u8,
    #[serde(default)]
    pub note: String,
}

/// All entries for one identity, keyed by canonical ISO date ("YYYY-MM-DD").
/// Serializes as a bare date -> record map, matching the on-disk layout:
///
/// ```json
/// { "2024-06-01": {"battery": 72, "note": "slept well"} }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LogCollection {
    pub entries: BTreeMap<String, Entry>,
}

impl LogCollection {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    /// Defaults to today (server local date) when absent.
    pub date: Option<String>,
    pub value: i64,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntryResponse {
    pub date: String,
    pub value: u8,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<EntryResponse>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinMax {
    pub min_date: String,
    pub min_value: u8,
    pub max_date: String,
    pub max_value: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragePoint {
    pub label: String,
    pub days: u32,
    pub mean: f64,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub minmax: Option<MinMax>,
    pub weekly: Vec<AveragePoint>,
    pub monthly: Vec<AveragePoint>,
}
