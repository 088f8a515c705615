use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use crate::group::CategoryGroups;

/// Build the digest text: a CJK header line with the week label, then one
/// block per category that actually has organizers. Categories with no
/// organizers are omitted entirely, heading included.
pub fn render_report(groups: &CategoryGroups, date_range: &str) -> String {
    let mut content = format!("［每週香港活動 - {date_range}］\n\n");

    for category in &groups.categories {
        let organizers = groups.organizers(category);
        if organizers.is_empty() {
            continue;
        }
        content.push_str(category);
        content.push('\n');
        for organizer in organizers {
            content.push_str(organizer);
            content.push('\n');
        }
        content.push('\n');
    }

    content
}

/// `weekly_activities_<YYYYMMDD>_<YYYYMMDD>.txt`
pub fn report_filename(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "weekly_activities_{}_{}.txt",
        start.format("%Y%m%d"),
        end.format("%Y%m%d")
    )
}

/// Write the digest under `dir`, replacing any previous file of the same
/// name. Returns the full path written.
pub fn write_report(dir: impl AsRef<Path>, filename: &str, content: &str) -> Result<PathBuf> {
    let path = dir.as_ref().join(filename);
    fs::write(&path, content).with_context(|| format!("could not write `{}`", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group_activities;
    use tempfile::tempdir;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn renders_header_and_blocks() {
        let rows = vec![
            row(&["h", "h", "h"]),
            row(&["Run Club", "Sports", "alice", "x", "y"]),
            row(&["Art Jam", "Sports", "bob", "x", "y"]),
            row(&["Book Talk", "Reading", "carol", "x", "y"]),
        ];
        let groups = group_activities(&rows);
        let content = render_report(&groups, "3-9/06");
        assert_eq!(
            content,
            "［每週香港活動 - 3-9/06］\n\nSports\n@alice\n@bob\n\nReading\n@carol\n\n"
        );
    }

    #[test]
    fn empty_category_gets_no_heading() {
        let rows = vec![
            row(&["h", "h", "h"]),
            row(&["Quiz Night", "Games"]), // registers the category only
            row(&["Hike", "Outdoors", "dan", "x", "y"]),
        ];
        let groups = group_activities(&rows);
        let content = render_report(&groups, "3-9/06");
        assert!(!content.contains("Games"));
        assert!(content.contains("Outdoors\n@dan\n"));
    }

    #[test]
    fn filename_from_week_span() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();
        assert_eq!(
            report_filename(start, end),
            "weekly_activities_20240605_20240609.txt"
        );
    }

    #[test]
    fn write_overwrites_and_preserves_utf8() {
        let tmp = tempdir().unwrap();
        let name = "weekly_activities_20240605_20240609.txt";

        write_report(tmp.path(), name, "old").unwrap();
        let content = "［每週香港活動 - 3-9/06］\n\nSports\n@alice\n\n";
        let path = write_report(tmp.path(), name, content).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), content);
    }
}
