use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Date layouts accepted inside the `[...]` header, tried in this order.
///
/// `MonthDayYear` and `DayMonthYear` overlap for values such as `03/04/2025`;
/// the first layout wins, so ambiguous dates read month-first.
/// `YearMonthDay` is listed for completeness but cannot match sanitized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `MM/DD/YY HH:MM:SS:ffffff` (Liberty default)
    MonthDayShortYear,
    /// `MM/DD/YYYY HH:MM:SS:ffffff`
    MonthDayYear,
    /// `YYYY-MM-DD HH:MM:SS,ffffff`
    YearMonthDay,
    /// `DD/MM/YYYY HH:MM:SS:ffffff`
    DayMonthYear,
}

const TIME_OF_DAY: &str =
    r"\s+(?P<hour>[0-9]{1,2}):(?P<minute>[0-9]{1,2}):(?P<second>[0-9]{1,2})";

impl DateLayout {
    pub const ALL: [DateLayout; 4] = [
        DateLayout::MonthDayShortYear,
        DateLayout::MonthDayYear,
        DateLayout::YearMonthDay,
        DateLayout::DayMonthYear,
    ];

    fn pattern(self) -> String {
        // Commas are rewritten to spaces before matching, so the literal
        // `,` fraction separator of YearMonthDay never matches and such
        // timestamps are kept verbatim.
        let (date, fraction_sep) = match self {
            DateLayout::MonthDayShortYear => (
                r"(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{2})",
                ":",
            ),
            DateLayout::MonthDayYear => (
                r"(?P<month>[0-9]{1,2})/(?P<day>[0-9]{1,2})/(?P<year>[0-9]{4})",
                ":",
            ),
            DateLayout::YearMonthDay => (
                r"(?P<year>[0-9]{4})-(?P<month>[0-9]{1,2})-(?P<day>[0-9]{1,2})",
                ",",
            ),
            DateLayout::DayMonthYear => (
                r"(?P<day>[0-9]{1,2})/(?P<month>[0-9]{1,2})/(?P<year>[0-9]{4})",
                ":",
            ),
        };
        format!("^{date}{TIME_OF_DAY}{fraction_sep}(?P<fraction>[0-9]{{1,6}})$")
    }

    fn resolve_year(self, digits: &str) -> Option<i32> {
        let value: i32 = digits.parse().ok()?;
        match self {
            // POSIX pivot: 69..=99 -> 19xx, 00..=68 -> 20xx
            DateLayout::MonthDayShortYear if value >= 69 => Some(1900 + value),
            DateLayout::MonthDayShortYear => Some(2000 + value),
            _ => Some(value),
        }
    }
}

static LAYOUTS: Lazy<Vec<(DateLayout, Regex)>> = Lazy::new(|| {
    DateLayout::ALL
        .iter()
        .map(|&layout| {
            let re = Regex::new(&layout.pattern())
                .expect("timestamp layout pattern");
            (layout, re)
        })
        .collect()
});

fn number(caps: &Captures<'_>, name: &str) -> Option<u32> {
    caps.name(name)?.as_str().parse().ok()
}

/// Fraction digits are read as the leading digits of the microseconds field.
fn micros(fraction: &str) -> Option<u32> {
    let value: u32 = fraction.parse().ok()?;
    let pad = 6u32.checked_sub(fraction.len() as u32)?;
    Some(value * 10u32.pow(pad))
}

fn build(layout: DateLayout, caps: &Captures<'_>) -> Option<NaiveDateTime> {
    let year = layout.resolve_year(caps.name("year")?.as_str())?;
    let date = NaiveDate::from_ymd_opt(year, number(caps, "month")?, number(caps, "day")?)?;
    let time = NaiveTime::from_hms_micro_opt(
        number(caps, "hour")?,
        number(caps, "minute")?,
        number(caps, "second")?,
        micros(caps.name("fraction")?.as_str())?,
    )?;
    Some(NaiveDateTime::new(date, time))
}

/// Parse the date/time part of a header timestamp (timezone token removed).
pub fn parse_datetime(candidate: &str) -> Option<(DateLayout, NaiveDateTime)> {
    let sanitized = candidate.replace(", ", " ").replace(',', " ");
    LAYOUTS.iter().find_map(|(layout, re)| {
        let caps = re.captures(&sanitized)?;
        build(*layout, &caps).map(|dt| (*layout, dt))
    })
}

/// ISO-8601 local time; the fraction is printed only when non-zero.
pub fn to_iso(dt: &NaiveDateTime) -> String {
    if dt.nanosecond() == 0 {
        dt.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        dt.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

/// Split a trailing alphabetic token (`EST`, `CET`, ...) off a timestamp.
fn split_zone(text: &str) -> (&str, Option<&str>) {
    match text.rsplit_once(' ') {
        Some((head, zone)) if !zone.is_empty() && zone.chars().all(char::is_alphabetic) => {
            (head, Some(zone))
        }
        _ => (text, None),
    }
}

/// Rewrite a raw header timestamp as ISO-8601 text.
///
/// The zone abbreviation, if present, is carried over verbatim; no offset is
/// applied. Text that fits no layout comes back trimmed but otherwise as-is.
pub fn normalize_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    let (candidate, zone) = split_zone(trimmed);
    match parse_datetime(candidate) {
        Some((_, dt)) => match zone {
            Some(zone) => format!("{} {}", to_iso(&dt), zone),
            None => to_iso(&dt),
        },
        None => trimmed.to_string(),
    }
}
