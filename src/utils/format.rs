//! Presentation helpers for the metric cards and due-date badges.

use chrono::NaiveDate;

/// Compact money label in thousands, the way the dashboard cards render it:
/// `compact_amount(123_400.0, "LKR")` is `"LKR 123K"`.
pub fn compact_amount(amount: f64, currency: &str) -> String {
    format!("{} {:.0}K", currency, amount / 1000.0)
}

/// Human-relative day label between two calendar days: "Today", "Tomorrow",
/// "3 days ago", "in 5 days".
pub fn relative_day(from: NaiveDate, target: NaiveDate) -> String {
    let days = (target - from).num_days();
    if days < 0 {
        format!("{} days ago", -days)
    } else if days == 0 {
        "Today".into()
    } else if days == 1 {
        "Tomorrow".into()
    } else {
        format!("in {} days", days)
    }
}
