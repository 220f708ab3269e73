//! Dashboard report generation.
//!
//! Renders a [`Dashboard`] as Markdown (one section per chart series)
//! or as pretty-printed JSON. Empty series render the configured
//! placeholder line instead of a table; the two fixed-bucket series
//! are never empty and always render as tables.

use crate::feed;
use crate::models::{Dashboard, DashboardMetadata};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Generate the complete Markdown dashboard report.
///
/// `placeholder` is the text shown in place of an empty chart,
/// configurable via `[report] placeholder` in `.konektado.toml`.
pub fn generate_markdown_report(dashboard: &Dashboard, placeholder: &str) -> String {
    let mut output = String::new();

    output.push_str("# Konektado Dashboard\n\n");
    output.push_str(&generate_metadata_section(&dashboard.metadata));
    output.push_str(&generate_daily_section(dashboard, placeholder));
    output.push_str(&generate_region_section(dashboard, placeholder));
    output.push_str(&generate_complaint_type_section(dashboard));
    output.push_str(&generate_network_issue_section(dashboard));
    output.push_str(&generate_city_section(dashboard, placeholder));
    output.push_str(&generate_feed_section(dashboard, placeholder));
    output.push_str(&generate_footer());

    output
}

/// Render the empty-chart placeholder line.
fn placeholder_line(placeholder: &str) -> String {
    format!("*{}*\n\n", placeholder)
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &DashboardMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** `{}`\n", metadata.source));
    section.push_str(&format!(
        "- **Generated:** {}\n",
        metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    section.push_str(&format!("- **Total Records:** {}\n", metadata.total_records));
    section.push_str(&format!(
        "- **Records with Valid Date:** {}\n",
        metadata.records_with_valid_date
    ));
    section.push_str(&format!(
        "- **Duration:** {:.1}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Generate the daily complaints section.
fn generate_daily_section(dashboard: &Dashboard, placeholder: &str) -> String {
    let mut section = String::new();

    section.push_str("## Daily Complaints\n\n");

    if dashboard.daily.is_empty() {
        section.push_str(&placeholder_line(placeholder));
        return section;
    }

    section.push_str("| Day | Complaints |\n");
    section.push_str("|:---|:---:|\n");
    for day in &dashboard.daily {
        section.push_str(&format!("| {} | {} |\n", day.day, day.complaints));
    }
    section.push('\n');

    section
}

/// Generate the complaints-by-region section.
fn generate_region_section(dashboard: &Dashboard, placeholder: &str) -> String {
    let mut section = String::new();

    section.push_str("## Complaints by Region\n\n");

    if dashboard.regions.is_empty() {
        section.push_str(&placeholder_line(placeholder));
        return section;
    }

    section.push_str("| Region | Complaints |\n");
    section.push_str("|:---|:---:|\n");
    for region in &dashboard.regions {
        section.push_str(&format!("| {} | {} |\n", region.region, region.complaints));
    }
    section.push('\n');

    section
}

/// Generate the Network Issue vs Other section.
///
/// Both buckets are always present, so this section always renders a
/// table, even for an empty dataset.
fn generate_complaint_type_section(dashboard: &Dashboard) -> String {
    let mut section = String::new();

    section.push_str("## Complaint Types\n\n");
    section.push_str("| Type | Count |\n");
    section.push_str("|:---|:---:|\n");
    for bucket in &dashboard.complaint_types {
        section.push_str(&format!("| {} | {} |\n", bucket.name, bucket.value));
    }
    section.push('\n');

    section
}

/// Generate the network issue kind section.
fn generate_network_issue_section(dashboard: &Dashboard) -> String {
    let mut section = String::new();

    section.push_str("## Network Issue Breakdown\n\n");
    section.push_str("| Issue | Count |\n");
    section.push_str("|:---|:---:|\n");
    for bucket in &dashboard.network_issues {
        section.push_str(&format!("| {} | {} |\n", bucket.name, bucket.value));
    }
    section.push('\n');

    section
}

/// Generate the NCR cities section.
fn generate_city_section(dashboard: &Dashboard, placeholder: &str) -> String {
    let mut section = String::new();

    section.push_str("## NCR Complaints by City\n\n");

    if dashboard.ncr_cities.is_empty() {
        section.push_str(&placeholder_line(placeholder));
        return section;
    }

    section.push_str("| City | Complaints |\n");
    section.push_str("|:---|:---:|\n");
    for city in &dashboard.ncr_cities {
        section.push_str(&format!("| {} | {} |\n", city.name, city.value));
    }
    section.push('\n');

    section
}

/// Generate the raw feed section with mentions emphasized.
fn generate_feed_section(dashboard: &Dashboard, placeholder: &str) -> String {
    let mut section = String::new();

    section.push_str("## Complaint Feed\n\n");

    if dashboard.feed.is_empty() {
        section.push_str(&placeholder_line(placeholder));
        return section;
    }

    for text in &dashboard.feed {
        let fragments = feed::highlight_mentions(text);
        section.push_str(&format!("> {}\n\n", feed::render_markdown(&fragments)));
    }

    section
}

/// Generate the report footer.
fn generate_footer() -> String {
    "---\n\n*Report generated by Konektado*\n".to_string()
}

/// Generate a JSON report.
pub fn generate_json_report(dashboard: &Dashboard) -> Result<String> {
    serde_json::to_string_pretty(dashboard).map_err(Into::into)
}

/// Write a rendered report to a file.
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;

    Ok(())
}
