//! Analysis modules.
//!
//! The aggregator produces the individual chart-ready series; this
//! module assembles them into a complete [`Dashboard`].

pub mod aggregator;

pub use aggregator::*;

use crate::models::{ComplaintRecord, Dashboard, DashboardMetadata};
use chrono::Utc;

/// Build the full dashboard from a record slice.
///
/// Runs every aggregation over the same input and collects the raw
/// feed in input order. `feed_limit` of zero disables the feed panel.
/// `duration_seconds` starts at zero; the caller stamps it once the
/// whole run is measured.
pub fn build_dashboard(
    records: &[ComplaintRecord],
    source: &str,
    feed_limit: usize,
) -> Dashboard {
    let daily = by_day(records);
    let records_with_valid_date = daily.iter().map(|d| d.complaints).sum();

    let feed: Vec<String> = records
        .iter()
        .filter_map(|r| r.full_text.as_deref())
        .filter(|t| !t.trim().is_empty())
        .take(feed_limit)
        .map(String::from)
        .collect();

    Dashboard {
        metadata: DashboardMetadata {
            source: source.to_string(),
            generated_at: Utc::now(),
            total_records: records.len(),
            records_with_valid_date,
            duration_seconds: 0.0,
        },
        daily,
        regions: by_region(records),
        complaint_types: by_complaint_type(records),
        network_issues: by_network_issue_type(records),
        ncr_cities: by_city_ncr(records),
        feed,
    }
}
