//! The JSON-RPC date grammars.
//!
//! Three textual forms are recognized, in priority order:
//!
//! 1. long bracket form `date{yyyy-MM-dd-HH-mm-ss-SSS}`, leading zeros
//!    optional on every field but the year;
//! 2. short bracket form `date{yyyy-MM-dd}`, implying midnight;
//! 3. ISO-8601 `yyyy-MM-ddTHH:mm:ss.SSSZ`, fixed widths, literal `Z`.
//!
//! Writing always emits the fully zero-padded long form, whichever grammar
//! produced the value on read.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::error::JohnsonError;

static DATE_LONG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^date\{(\d{4})-([01]?\d)-([0123]?\d)-(\d{1,2})-(\d{1,2})-(\d{1,2})-(\d{1,3})\}$")
        .expect("long date grammar")
});

static DATE_SHORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^date\{(\d{4})-([01]?\d)-([0123]?\d)\}$").expect("short date grammar")
});

static DATE_ISO_8601_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4})-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})\.(\d{3})Z$")
        .expect("ISO-8601 grammar")
});

static DATE_PLAIN_SHORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-([01]?\d)-([0123]?\d)$").expect("plain short grammar"));

/// Parse any of the three date grammars into a timezone-naive instant.
///
/// The ISO form shares the component path with the long bracket form, so
/// both grammars validate and round identically.
pub fn parse_json_rpc_date(text: &str) -> Result<NaiveDateTime, JohnsonError> {
    if let Some(caps) = DATE_LONG_RE.captures(text) {
        return datetime_from_parts(text, &caps, true);
    }
    if let Some(caps) = DATE_SHORT_RE.captures(text) {
        return datetime_from_parts(text, &caps, false);
    }
    if let Some(caps) = DATE_ISO_8601_RE.captures(text) {
        return datetime_from_parts(text, &caps, true);
    }
    Err(JohnsonError::NotAJsonRpcDate(text.to_string()))
}

/// Parse a plain `yyyy-MM-dd` string (no `date{}` wrapper), midnight time.
pub fn parse_short_date(text: &str) -> Result<NaiveDateTime, JohnsonError> {
    match DATE_PLAIN_SHORT_RE.captures(text) {
        Some(caps) => datetime_from_parts(text, &caps, false),
        None => Err(JohnsonError::NotAJsonRpcDate(text.to_string())),
    }
}

/// The canonical write-form: zero-padded long bracket form.
pub fn format_json_rpc_date(dt: NaiveDateTime) -> String {
    format!(
        "date{{{:04}-{:02}-{:02}-{:02}-{:02}-{:02}-{:03}}}",
        dt.year(),
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute(),
        dt.second(),
        dt.nanosecond() / 1_000_000,
    )
}

/// Date component only, `yyyy-MM-dd`, no wrapper.
pub fn format_short_date(dt: NaiveDateTime) -> String {
    format!("{:04}-{:02}-{:02}", dt.year(), dt.month(), dt.day())
}

/// Thin pass-through to chrono's strftime formatter for caller-supplied
/// patterns. Pattern validity is the caller's problem.
pub fn format_with_pattern(pattern: &str, dt: NaiveDateTime) -> String {
    dt.format(pattern).to_string()
}

/// Assemble an instant from regex captures. The grammars already bound the
/// field widths; out-of-range components (month 0, day 39, hour 25) fail
/// here, the way a non-lenient calendar parser would.
fn datetime_from_parts(
    text: &str,
    caps: &regex::Captures<'_>,
    with_time: bool,
) -> Result<NaiveDateTime, JohnsonError> {
    let field = |i: usize| -> u32 { caps[i].parse().unwrap_or(0) };
    let year: i32 = caps[1].parse().unwrap_or(0);
    let date = NaiveDate::from_ymd_opt(year, field(2), field(3))
        .ok_or_else(|| JohnsonError::NotAJsonRpcDate(text.to_string()))?;
    if !with_time {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    // The millisecond field is a plain count: `-7` means 7 ms, not 700 ms.
    date.and_hms_milli_opt(field(4), field(5), field(6), field(7))
        .ok_or_else(|| JohnsonError::NotAJsonRpcDate(text.to_string()))
}
