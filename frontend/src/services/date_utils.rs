use chrono::NaiveDate;

/// Format a date for display (e.g., "June 10, 2024")
pub fn format_date_for_display(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Compact date for lists and badges (e.g., "Jun 10")
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}
