use chrono::NaiveDate;

/// Parses the date strings found in chart data.
///
/// Accepts ISO `YYYY-MM-DD`, a timestamp carrying that form as a prefix
/// (`1207-10-01T00:00:00`), or a bare year, which is common in medieval
/// records where only the year is known.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(t, "%Y-%m-%d") {
        return Some(d);
    }
    if let Some(head) = t.get(..10) {
        if let Ok(d) = NaiveDate::parse_from_str(head, "%Y-%m-%d") {
            return Some(d);
        }
    }
    if let Ok(year) = t.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}
