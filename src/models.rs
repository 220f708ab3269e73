//! Data models for the complaint analytics dashboard.
//!
//! This module contains the input record shape as it appears in the
//! dataset and the chart-ready summary types produced by the aggregator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single complaint record from the dataset.
///
/// Every field is optional: the dataset is scraped tweet data and any
/// field may be absent or malformed. Missing fields never fail
/// deserialization; they simply exclude the record from the
/// aggregations that need them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplaintRecord {
    /// Timestamp string, possibly malformed.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Free-form complaint text, may contain `@mention` tokens.
    #[serde(default)]
    pub full_text: Option<String>,
    /// Region label.
    #[serde(default)]
    pub region: Option<String>,
    /// Location string, segments separated by `/`.
    #[serde(default)]
    pub location: Option<String>,
    /// Whether the record belongs to the National Capital Region subset.
    #[serde(default)]
    pub ncr: Option<bool>,
    /// Whether the complaint is a network issue.
    #[serde(default)]
    pub network_issue: Option<bool>,
    /// Network issue kind: `"no_internet"`, `"slow_internet"`, or other.
    #[serde(default)]
    pub network_issue_type: Option<String>,
}

impl ComplaintRecord {
    /// Returns the UTC calendar date (`YYYY-MM-DD`) of `created_at`,
    /// or `None` when the timestamp is absent or unparseable.
    pub fn utc_day(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        parse_timestamp(raw).map(|dt| dt.format("%Y-%m-%d").to_string())
    }

    /// Truthiness of the `network_issue` flag.
    pub fn is_network_issue(&self) -> bool {
        self.network_issue.unwrap_or(false)
    }

    /// Truthiness of the `ncr` flag.
    pub fn is_ncr(&self) -> bool {
        self.ncr.unwrap_or(false)
    }
}

/// Parse a record timestamp.
///
/// Accepts RFC 3339 (`2024-01-01T08:00:00Z`) and the classic Twitter
/// `created_at` format (`Wed Oct 10 20:19:24 +0000 2018`). Anything
/// else is treated as unparseable.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    DateTime::parse_from_str(raw, "%a %b %d %H:%M:%S %z %Y")
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Complaint count for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    /// Calendar date, `YYYY-MM-DD`.
    pub day: String,
    /// Number of complaints on that day.
    pub complaints: usize,
}

/// Complaint count for one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCount {
    /// Region label, exactly as it appears in the data.
    pub region: String,
    /// Number of complaints from that region.
    pub complaints: usize,
}

/// One slice of the Network Issue / Other breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCount {
    /// Bucket name: `"Network Issue"` or `"Other"`.
    pub name: String,
    /// Number of complaints in the bucket.
    pub value: usize,
}

/// One slice of the network issue kind breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkIssueCount {
    /// Bucket name: `"No Internet"` or `"Slow Internet"`.
    pub name: String,
    /// Number of complaints in the bucket.
    pub value: usize,
}

/// Complaint count for one city in the NCR subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityCount {
    /// City name, the last segment of the record's location.
    pub name: String,
    /// Number of NCR complaints from that city.
    pub value: usize,
}

/// Metadata about a generated dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetadata {
    /// Where the records came from (file path or URL).
    pub source: String,
    /// Date and time of generation.
    pub generated_at: DateTime<Utc>,
    /// Total number of input records.
    pub total_records: usize,
    /// Records whose `created_at` parsed to a valid day.
    pub records_with_valid_date: usize,
    /// Time spent loading and aggregating, in seconds.
    pub duration_seconds: f64,
}

/// The complete dashboard: every chart-ready series plus the raw feed.
///
/// This is the unit the report layer consumes; it carries no knowledge
/// of how the series will be rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Metadata about this generation run.
    pub metadata: DashboardMetadata,
    /// Complaints per day, first-seen order.
    pub daily: Vec<DayCount>,
    /// Complaints per region, first-seen order.
    pub regions: Vec<RegionCount>,
    /// Network Issue vs Other, always exactly two entries.
    pub complaint_types: Vec<TypeCount>,
    /// No Internet vs Slow Internet, always exactly two entries.
    pub network_issues: Vec<NetworkIssueCount>,
    /// Complaints per city among NCR-flagged records.
    pub ncr_cities: Vec<CityCount>,
    /// Raw complaint texts for the feed panel.
    pub feed: Vec<String>,
}
