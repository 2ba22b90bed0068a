//! Date-folder formatting.
//!
//! New notes are routed under a date-stamped folder such as `2024/03/07/`.
//! Patterns use the host calendar tokens `YYYY`, `YY`, `MM`, `DD`; every
//! other character passes through verbatim.

use chrono::{Datelike, NaiveDate};

/// Format `date` into a folder fragment according to `pattern`.
///
/// ```
/// use chrono::NaiveDate;
/// use clipnote_core::datefmt::format_date_folder;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
/// assert_eq!(format_date_folder("YYYY/MM/DD/", date), "2024/03/07/");
/// ```
pub fn format_date_folder(pattern: &str, date: NaiveDate) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some(tail) = rest.strip_prefix("YYYY") {
            out.push_str(&format!("{:04}", date.year()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("YY") {
            out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("MM") {
            out.push_str(&format!("{:02}", date.month()));
            rest = tail;
        } else if let Some(tail) = rest.strip_prefix("DD") {
            out.push_str(&format!("{:02}", date.day()));
            rest = tail;
        } else {
            let mut chars = rest.chars();
            match chars.next() {
                Some(c) => {
                    out.push(c);
                    rest = chars.as_str();
                }
                None => break,
            }
        }
    }
    out
}
