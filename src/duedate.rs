//! Natural-language due-date extraction.
//!
//! [`extract_due`] scans free-form task text for a small fixed set of
//! English time expressions and turns the first match into a concrete due
//! value. Rules run in a fixed order and the first one that produces a
//! value wins; an unparseable time (hour 25, "0pm") is treated as no match
//! so later rules still get a chance.

use crate::types::DueAt;
use chrono::NaiveDate;
use regex_lite::Regex;
use std::sync::OnceLock;

/// Named times of day, checked longest-first so "afternoon" is never
/// matched as "noon".
const NAMED_TIMES: [(&str, u32, u32); 7] = [
    ("end of day", 17, 0),
    ("afternoon", 14, 0),
    ("midnight", 0, 0),
    ("morning", 9, 0),
    ("evening", 18, 0),
    ("noon", 12, 0),
    ("eod", 17, 0),
];

type Rule = fn(&str, NaiveDate) -> Option<DueAt>;

/// Extraction rules in priority order.
const RULES: [Rule; 5] = [
    named_time,
    clock_12h_with_minutes,
    clock_12h,
    clock_24h,
    date_only,
];

/// Extract a due value from task text. `reference` is "today"; the word
/// "tomorrow" anywhere in the text shifts the whole result one day forward.
/// Returns None when no rule matches.
pub fn extract_due(text: &str, reference: NaiveDate) -> Option<DueAt> {
    let text = text.to_lowercase();
    let target = if text.contains("tomorrow") {
        reference.succ_opt()?
    } else {
        reference
    };
    RULES.iter().find_map(|rule| rule(&text, target))
}

fn named_time(text: &str, target: NaiveDate) -> Option<DueAt> {
    NAMED_TIMES
        .iter()
        .find(|(name, _, _)| text.contains(name))
        .and_then(|(_, hour, minute)| target.and_hms_opt(*hour, *minute, 0))
        .map(DueAt::At)
}

/// `10:30am`, `10:30 pm`.
fn clock_12h_with_minutes(text: &str, target: NaiveDate) -> Option<DueAt> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\b(\d{1,2}):(\d{2})\s*(am|pm)\b").expect("valid pattern")
    });
    let caps = re.captures(text)?;
    let hour = to_24_hour(caps[1].parse().ok()?, &caps[3])?;
    let minute: u32 = caps[2].parse().ok()?;
    target.and_hms_opt(hour, minute, 0).map(DueAt::At)
}

/// `9am`, `5 pm`.
fn clock_12h(text: &str, target: NaiveDate) -> Option<DueAt> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re =
        RE.get_or_init(|| Regex::new(r"\b(\d{1,2})\s*(am|pm)\b").expect("valid pattern"));
    let caps = re.captures(text)?;
    let hour = to_24_hour(caps[1].parse().ok()?, &caps[2])?;
    target.and_hms_opt(hour, 0, 0).map(DueAt::At)
}

/// `14:00`. Hour and minute are range-checked; `25:00` is no match.
fn clock_24h(text: &str, target: NaiveDate) -> Option<DueAt> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").expect("valid pattern"));
    let caps = re.captures(text)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    target.and_hms_opt(hour, minute, 0).map(DueAt::At)
}

/// "today" or "tomorrow" with no usable time: date-only due.
fn date_only(text: &str, target: NaiveDate) -> Option<DueAt> {
    (text.contains("today") || text.contains("tomorrow")).then_some(DueAt::Date(target))
}

/// Convert a 12-hour clock hour. Hours outside 1-12 are rejected;
/// 12am is midnight and 12pm is noon.
fn to_24_hour(hour: u32, meridiem: &str) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    Some(match (hour, meridiem) {
        (12, "am") => 0,
        (12, "pm") => 12,
        (h, "pm") => h + 12,
        (h, _) => h,
    })
}
