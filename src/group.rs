use std::collections::{HashMap, HashSet};

/// Organizer handles grouped under their sheet category. Category order and
/// organizer order both follow first appearance in the source rows.
#[derive(Debug, Default)]
pub struct CategoryGroups {
    /// Distinct category names in first-appearance order.
    pub categories: Vec<String>,
    /// Category name → "@"-prefixed handles, duplicate-free, in insertion order.
    pub organizers_by_category: HashMap<String, Vec<String>>,
    /// Rows that failed the column-count or required-cell checks. Skipping is
    /// silent at runtime; the count exists so tests can observe the filtering.
    pub skipped_rows: usize,
}

impl CategoryGroups {
    pub fn organizers(&self, category: &str) -> &[String] {
        self.organizers_by_category
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Group organizers by category across all rows, skipping the header row.
///
/// Category-order tracking accepts any row with at least 2 cells and a
/// non-empty category; organizer extraction requires at least 5 cells, a
/// non-empty event name, and a non-empty organizer. The looser category
/// threshold means a category can hold a place in the order without ever
/// receiving organizers; rendering drops such categories later.
pub fn group_activities(rows: &[Vec<String>]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    let mut seen_categories: HashSet<String> = HashSet::new();
    let mut seen_organizers: HashMap<String, HashSet<String>> = HashMap::new();

    for row in rows.iter().skip(1) {
        if row.len() >= 2 {
            let category = row[1].trim();
            if !category.is_empty() && seen_categories.insert(category.to_string()) {
                groups.categories.push(category.to_string());
            }
        }

        if row.len() < 5 {
            groups.skipped_rows += 1;
            continue;
        }
        let event_name = row[0].trim();
        let category = row[1].trim();
        let organizer = row[2].trim();
        if event_name.is_empty() || organizer.is_empty() {
            groups.skipped_rows += 1;
            continue;
        }

        let seen = seen_organizers.entry(category.to_string()).or_default();
        if seen.insert(organizer.to_string()) {
            groups
                .organizers_by_category
                .entry(category.to_string())
                .or_default()
                .push(format!("@{organizer}"));
        }
    }

    groups
}
