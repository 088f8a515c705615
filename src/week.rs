use chrono::{Datelike, Duration, NaiveDate};

/// Span from `today` to the upcoming Sunday. When today is already Sunday
/// the end lands a full week out, never on today itself.
pub fn week_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    // 0 = Monday .. 6 = Sunday
    let weekday = today.weekday().num_days_from_monday() as i64;
    let mut days_until_sunday = (6 - weekday).rem_euclid(7);
    if days_until_sunday == 0 {
        days_until_sunday = 7;
    }
    (today, today + Duration::days(days_until_sunday))
}

/// Render a span as `D-D/MM` within one month, `D/MM-D/MM` across months.
/// Months are zero-padded, days are not.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() {
        format!("{}-{}/{:02}", start.day(), end.day(), start.month())
    } else {
        format!(
            "{}/{:02}-{}/{:02}",
            start.day(),
            start.month(),
            end.day(),
            end.month()
        )
    }
}

/// Parse a `D/M` cell into a date in `year`, `None` on anything malformed.
pub fn parse_day_month(s: &str, year: i32) -> Option<NaiveDate> {
    let (day, month) = s.trim().split_once('/')?;
    let day: u32 = day.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Inclusive containment check against a week span.
pub fn is_date_in_week(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

/// Expand a sheet date cell into concrete dates. Cells hold comma-separated
/// terms, each one of:
///   - a single `D/M`
///   - an inclusive range `D/M-D/M`
///   - `till D/M`, meaning every day from `today` through that date
/// Terms that fail to parse contribute nothing.
pub fn parse_date_list(s: &str, today: NaiveDate) -> Vec<NaiveDate> {
    let year = today.year();
    let mut dates = Vec::new();

    for term in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(rest) = term.strip_prefix("till ") {
            if let Some(end) = parse_day_month(rest, year) {
                push_span(&mut dates, today, end);
            }
        } else if let Some((a, b)) = term.split_once('-') {
            if let (Some(start), Some(end)) =
                (parse_day_month(a, year), parse_day_month(b, year))
            {
                push_span(&mut dates, start, end);
            }
        } else if let Some(date) = parse_day_month(term, year) {
            dates.push(date);
        }
    }

    dates
}

fn push_span(dates: &mut Vec<NaiveDate>, start: NaiveDate, end: NaiveDate) {
    let mut d = start;
    while d <= end {
        dates.push(d);
        d += Duration::days(1);
    }
}
