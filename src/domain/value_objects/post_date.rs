//! Date answers accepted by the publish workflow.

use chrono::NaiveDate;

/// Date format used in front matter and published file names.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an interactive date answer.
///
/// `t` or `today` (any case) mean `today`; anything else must be `YYYY-MM-DD`.
/// Returns `None` for input that should be re-prompted.
pub fn parse_date_answer(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("t") || trimmed.eq_ignore_ascii_case("today") {
        return Some(today);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}
