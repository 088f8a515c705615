use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::SheetConfig;
use crate::fetch::fetch_sheet_values;
use crate::group::group_activities;
use crate::report::{render_report, report_filename, write_report};
use crate::week::{format_date_range, week_range};

/// One fetch-and-generate cycle. Returns the path of the digest written, or
/// `None` when the sheet yielded no usable data (fetch failure, empty sheet,
/// or header row only) — that path logs and produces no file.
pub async fn generate_weekly_activities(
    client: &Client,
    config: &SheetConfig,
    out_dir: impl AsRef<Path>,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    info!("fetching data from google sheets");
    let rows = fetch_sheet_values(client, config).await;
    generate_from_rows(&rows, out_dir, today)
}

/// Grouping and rendering half of the cycle, split off from the fetch so it
/// can run against canned rows.
pub fn generate_from_rows(
    rows: &[Vec<String>],
    out_dir: impl AsRef<Path>,
    today: NaiveDate,
) -> Result<Option<PathBuf>> {
    if rows.len() < 2 {
        info!("no data found or insufficient data");
        return Ok(None);
    }

    let (start, end) = week_range(today);
    let date_range = format_date_range(start, end);
    info!("generating activities for week: {}", date_range);

    let groups = group_activities(rows);
    let content = render_report(&groups, &date_range);
    let filename = report_filename(start, end);
    let path = write_report(out_dir, &filename, &content)?;

    info!("generated: {}", filename);
    println!("\nContent preview:");
    println!("{content}");

    Ok(Some(path))
}
