//! Record aggregation into chart-ready series.
//!
//! Every function here is a pure, single-pass transform from a record
//! slice to a small summary sequence. They never fail and never mutate
//! their input: a malformed or missing field excludes the record from
//! that specific aggregation, silently. Grouped outputs preserve
//! first-occurrence order so charts stay stable across runs.

use crate::models::{CityCount, ComplaintRecord, DayCount, NetworkIssueCount, RegionCount, TypeCount};
use std::collections::HashMap;

/// Count complaints per UTC calendar day, first-seen order.
///
/// Records with an absent or unparseable `created_at` are excluded.
pub fn by_day(records: &[ComplaintRecord]) -> Vec<DayCount> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut days: Vec<DayCount> = Vec::new();

    for record in records {
        let Some(day) = record.utc_day() else {
            continue;
        };

        match slots.get(&day) {
            Some(&i) => days[i].complaints += 1,
            None => {
                slots.insert(day.clone(), days.len());
                days.push(DayCount { day, complaints: 1 });
            }
        }
    }

    days
}

/// Count complaints per region, first-seen order.
///
/// Records with an absent or empty region are excluded. Matching is
/// exact and case-sensitive.
pub fn by_region(records: &[ComplaintRecord]) -> Vec<RegionCount> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut regions: Vec<RegionCount> = Vec::new();

    for record in records {
        let Some(region) = record.region.as_deref() else {
            continue;
        };
        if region.is_empty() {
            continue;
        }

        match slots.get(region) {
            Some(&i) => regions[i].complaints += 1,
            None => {
                slots.insert(region.to_string(), regions.len());
                regions.push(RegionCount {
                    region: region.to_string(),
                    complaints: 1,
                });
            }
        }
    }

    regions
}

/// Split records into Network Issue vs Other.
///
/// Always returns exactly two entries in that order, even at zero.
/// Every record lands in exactly one bucket, keyed on the truthiness
/// of `network_issue`.
pub fn by_complaint_type(records: &[ComplaintRecord]) -> Vec<TypeCount> {
    let mut network = 0;
    let mut other = 0;

    for record in records {
        if record.is_network_issue() {
            network += 1;
        } else {
            other += 1;
        }
    }

    vec![
        TypeCount {
            name: "Network Issue".to_string(),
            value: network,
        },
        TypeCount {
            name: "Other".to_string(),
            value: other,
        },
    ]
}

/// Split records into No Internet vs Slow Internet.
///
/// Always returns exactly two entries in that order. Unlike
/// [`by_complaint_type`], records with an absent `network_issue_type`
/// are skipped entirely, and only exact `"no_internet"` /
/// `"slow_internet"` values count; anything else is dropped. The
/// asymmetry against the complaint-type split is deliberate.
pub fn by_network_issue_type(records: &[ComplaintRecord]) -> Vec<NetworkIssueCount> {
    let mut no_internet = 0;
    let mut slow_internet = 0;

    for record in records {
        match record.network_issue_type.as_deref() {
            Some("no_internet") => no_internet += 1,
            Some("slow_internet") => slow_internet += 1,
            _ => {}
        }
    }

    vec![
        NetworkIssueCount {
            name: "No Internet".to_string(),
            value: no_internet,
        },
        NetworkIssueCount {
            name: "Slow Internet".to_string(),
            value: slow_internet,
        },
    ]
}

/// Count complaints per city among NCR-flagged records, first-seen order.
///
/// The city key is the last non-empty `/`-separated segment of
/// `location`, whitespace-trimmed. Records without a usable segment
/// are skipped.
pub fn by_city_ncr(records: &[ComplaintRecord]) -> Vec<CityCount> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut cities: Vec<CityCount> = Vec::new();

    for record in records {
        if !record.is_ncr() {
            continue;
        }
        let Some(city) = last_location_segment(record.location.as_deref()) else {
            continue;
        };

        match slots.get(&city) {
            Some(&i) => cities[i].value += 1,
            None => {
                slots.insert(city.clone(), cities.len());
                cities.push(CityCount { name: city, value: 1 });
            }
        }
    }

    cities
}

/// Last non-empty `/`-separated segment of a location, trimmed.
fn last_location_segment(location: Option<&str>) -> Option<String> {
    let location = location?;

    location
        .split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .next_back()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_date(created_at: &str) -> ComplaintRecord {
        ComplaintRecord {
            created_at: Some(created_at.to_string()),
            ..Default::default()
        }
    }

    fn record_with_region(region: &str) -> ComplaintRecord {
        ComplaintRecord {
            region: Some(region.to_string()),
            ..Default::default()
        }
    }

    fn ncr_record(location: Option<&str>) -> ComplaintRecord {
        ComplaintRecord {
            ncr: Some(true),
            location: location.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_by_day_groups_and_skips_malformed() {
        let records = vec![
            record_with_date("2024-01-01T00:00:00Z"),
            record_with_date("2024-01-01T08:00:00Z"),
            record_with_date("not-a-date"),
        ];

        let daily = by_day(&records);

        assert_eq!(
            daily,
            vec![DayCount {
                day: "2024-01-01".to_string(),
                complaints: 2,
            }]
        );
    }

    #[test]
    fn test_by_day_first_seen_order() {
        let records = vec![
            record_with_date("2024-01-02T10:00:00Z"),
            record_with_date("2024-01-01T10:00:00Z"),
            record_with_date("2024-01-02T12:00:00Z"),
        ];

        let daily = by_day(&records);

        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].day, "2024-01-02");
        assert_eq!(daily[0].complaints, 2);
        assert_eq!(daily[1].day, "2024-01-01");
    }

    #[test]
    fn test_by_day_sum_matches_parseable_records() {
        let records = vec![
            record_with_date("2024-01-01T00:00:00Z"),
            record_with_date("garbage"),
            record_with_date("Wed Oct 10 20:19:24 +0000 2018"),
            ComplaintRecord::default(),
        ];

        let total: usize = by_day(&records).iter().map(|d| d.complaints).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn test_by_day_empty_input() {
        assert!(by_day(&[]).is_empty());
    }

    #[test]
    fn test_by_region_skips_empty_and_keeps_order() {
        let records = vec![
            record_with_region("NCR"),
            record_with_region(""),
            record_with_region("Region VII"),
            ComplaintRecord::default(),
            record_with_region("NCR"),
        ];

        let regions = by_region(&records);

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].region, "NCR");
        assert_eq!(regions[0].complaints, 2);
        assert_eq!(regions[1].region, "Region VII");
        assert_eq!(regions[1].complaints, 1);
    }

    #[test]
    fn test_by_region_case_sensitive() {
        let records = vec![record_with_region("ncr"), record_with_region("NCR")];
        assert_eq!(by_region(&records).len(), 2);
    }

    #[test]
    fn test_by_complaint_type_always_two_buckets() {
        let buckets = by_complaint_type(&[]);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "Network Issue");
        assert_eq!(buckets[0].value, 0);
        assert_eq!(buckets[1].name, "Other");
        assert_eq!(buckets[1].value, 0);
    }

    #[test]
    fn test_by_complaint_type_counts_every_record() {
        let records = vec![
            ComplaintRecord {
                network_issue: Some(true),
                ..Default::default()
            },
            ComplaintRecord {
                network_issue: Some(false),
                ..Default::default()
            },
            // Absent flag counts as Other, not skipped.
            ComplaintRecord::default(),
        ];

        let buckets = by_complaint_type(&records);

        assert_eq!(buckets[0].value, 1);
        assert_eq!(buckets[1].value, 2);
        let total: usize = buckets.iter().map(|b| b.value).sum();
        assert_eq!(total, records.len());
    }

    #[test]
    fn test_by_network_issue_type_skips_unrecognized() {
        let records = vec![
            ComplaintRecord {
                network_issue_type: Some("no_internet".to_string()),
                ..Default::default()
            },
            ComplaintRecord {
                network_issue_type: Some("slow_internet".to_string()),
                ..Default::default()
            },
            ComplaintRecord {
                network_issue_type: Some("slow_internet".to_string()),
                ..Default::default()
            },
            ComplaintRecord {
                network_issue_type: None,
                ..Default::default()
            },
        ];

        let buckets = by_network_issue_type(&records);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].name, "No Internet");
        assert_eq!(buckets[0].value, 1);
        assert_eq!(buckets[1].name, "Slow Internet");
        assert_eq!(buckets[1].value, 2);

        let total: usize = buckets.iter().map(|b| b.value).sum();
        assert!(total <= records.len());
    }

    #[test]
    fn test_by_network_issue_type_drops_other_values() {
        let records = vec![ComplaintRecord {
            network_issue_type: Some("intermittent".to_string()),
            ..Default::default()
        }];

        let buckets = by_network_issue_type(&records);

        assert_eq!(buckets[0].value, 0);
        assert_eq!(buckets[1].value, 0);
    }

    #[test]
    fn test_by_city_ncr_takes_last_segment() {
        let records = vec![ncr_record(Some("Iligan City / Quezon City"))];

        let cities = by_city_ncr(&records);

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Quezon City");
        assert_eq!(cities[0].value, 1);
    }

    #[test]
    fn test_by_city_ncr_excludes_unflagged() {
        let records = vec![
            ComplaintRecord {
                ncr: Some(false),
                location: Some("Manila".to_string()),
                ..Default::default()
            },
            ComplaintRecord {
                ncr: None,
                location: Some("Manila".to_string()),
                ..Default::default()
            },
        ];

        assert!(by_city_ncr(&records).is_empty());
    }

    #[test]
    fn test_by_city_ncr_skips_blank_locations() {
        let records = vec![
            ncr_record(None),
            ncr_record(Some("")),
            ncr_record(Some("  /  ")),
            ncr_record(Some("Makati")),
        ];

        let cities = by_city_ncr(&records);

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Makati");
    }

    #[test]
    fn test_last_location_segment_trailing_slash() {
        assert_eq!(
            last_location_segment(Some("Taguig / ")),
            Some("Taguig".to_string())
        );
    }

    #[test]
    fn test_aggregations_are_idempotent() {
        let records = vec![
            ComplaintRecord {
                created_at: Some("2024-01-01T00:00:00Z".to_string()),
                region: Some("NCR".to_string()),
                location: Some("NCR / Pasig".to_string()),
                ncr: Some(true),
                network_issue: Some(true),
                network_issue_type: Some("no_internet".to_string()),
                ..Default::default()
            },
            record_with_date("2024-01-02T00:00:00Z"),
        ];

        assert_eq!(by_day(&records), by_day(&records));
        assert_eq!(by_region(&records), by_region(&records));
        assert_eq!(by_complaint_type(&records), by_complaint_type(&records));
        assert_eq!(by_network_issue_type(&records), by_network_issue_type(&records));
        assert_eq!(by_city_ncr(&records), by_city_ncr(&records));
    }
}
