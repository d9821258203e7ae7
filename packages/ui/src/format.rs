//! Display helpers for catalog data.

use chrono::NaiveDate;

/// Accepts a bare date or a full ISO timestamp.
fn parse(date: &str) -> Option<NaiveDate> {
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// "Dec 5" for an ISO date; the input unchanged if it does not parse.
pub fn short_date(date: &str) -> String {
    parse(date)
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// "December 5, 2025"
pub fn long_date(date: &str) -> String {
    parse(date)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Today's date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Attendance line for a card: "42 / 60 attending" or "42 attending".
pub fn attendance(attendees: u32, capacity: Option<u32>) -> String {
    match capacity {
        Some(capacity) => format!("{attendees} / {capacity} attending"),
        None => format!("{attendees} attending"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        assert_eq!(short_date("2025-12-05"), "Dec 5");
        assert_eq!(long_date("2025-12-05"), "December 5, 2025");
        assert_eq!(short_date("TBA"), "TBA");
        assert_eq!(short_date("2025-12-05T18:30:00.000Z"), "Dec 5");
    }

    #[test]
    fn test_today_is_iso() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(parse(&today).is_some());
    }

    #[test]
    fn test_attendance() {
        assert_eq!(attendance(42, Some(60)), "42 / 60 attending");
        assert_eq!(attendance(7, None), "7 attending");
    }
}
