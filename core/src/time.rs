use chrono::{Datelike, Duration, Local, NaiveDate};
use anyhow::{anyhow, Result};

pub const DAY_FORMAT: &str = "%Y-%m-%d";
const MONTH_KEY_LEN: usize = 7;

/// A calendar selection: one day, or a whole month.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Day(NaiveDate),
    Month(String),
}

impl Selection {
    /// `YYYY-MM` of the selection, usable as an export prefix.
    pub fn month(&self) -> String {
        match self {
            Selection::Day(d) => month_of(*d),
            Selection::Month(m) => m.clone(),
        }
    }
}

/// First seven characters of a trip date. Shorter dates come back whole.
pub fn month_key(date: &str) -> &str {
    match date.char_indices().nth(MONTH_KEY_LEN) {
        Some((end, _)) => &date[..end],
        None => date,
    }
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub fn month_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a day selection relative to the local date.
pub fn parse_human_date(input: &str) -> Result<NaiveDate> {
    parse_day(input, today())
}

/// Parses a day selection relative to `today`.
///
/// Accepts `today`/`tod`, `yesterday`/`yes`, `tomorrow`/`tom`,
/// relative offsets (`-3d`, `+1w`) and `YYYY-MM-DD`.
pub fn parse_day(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "yesterday" | "yes" => return shift_day(today, Duration::days(-1)),
        "tomorrow" | "tom" => return shift_day(today, Duration::days(1)),
        _ => {}
    }

    // 2. Relative format (+Nd, -Nd, +Nw, -Nw)
    if input.starts_with('+') || input.starts_with('-') {
        return shift_day(today, parse_offset(input)?);
    }

    // 3. Fallback to ISO
    NaiveDate::parse_from_str(input, DAY_FORMAT)
        .map_err(|_| anyhow!("Could not parse date: {}", input))
}

/// Parses either a day (see [`parse_day`]) or a `YYYY-MM` month.
pub fn parse_selection(input: &str, today: NaiveDate) -> Result<Selection> {
    let input = input.trim();
    match input.to_lowercase().as_str() {
        "month" | "thismonth" => return Ok(Selection::Month(month_of(today))),
        "lastmonth" => return Ok(Selection::Month(shift_month(&month_of(today), -1)?)),
        _ => {}
    }

    if let Ok(day) = parse_day(input, today) {
        return Ok(Selection::Day(day));
    }
    if is_month(input) {
        return Ok(Selection::Month(input.to_string()));
    }
    Err(anyhow!("Could not parse date or month: {}", input))
}

/// Moves a `YYYY-MM` key by `delta` months.
pub fn shift_month(month: &str, delta: i32) -> Result<String> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", month), DAY_FORMAT)
        .map_err(|_| anyhow!("Invalid month: {}", month))?;
    let index = first.year() * 12 + first.month0() as i32 + delta;
    Ok(format!("{:04}-{:02}", index.div_euclid(12), index.rem_euclid(12) + 1))
}

fn is_month(input: &str) -> bool {
    input.len() == MONTH_KEY_LEN
        && NaiveDate::parse_from_str(&format!("{}-01", input), DAY_FORMAT).is_ok()
}

fn parse_offset(input: &str) -> Result<Duration> {
    let split = match input.char_indices().last() {
        Some((i, _)) if i >= 2 => i,
        _ => return Err(anyhow!("Invalid relative format: {}", input)),
    };
    let (num_str, unit) = input.split_at(split);
    let count: i64 = num_str.parse().map_err(|_| anyhow!("Invalid relative format: {}", input))?;

    let offset = match unit.to_lowercase().as_str() {
        "d" => Duration::try_days(count),
        "w" => Duration::try_weeks(count),
        _ => return Err(anyhow!("Unknown unit in relative time: {}", unit)),
    };
    offset.ok_or_else(|| anyhow!("Relative offset out of range: {}", input))
}

fn shift_day(day: NaiveDate, offset: Duration) -> Result<NaiveDate> {
    day.checked_add_signed(offset)
        .ok_or_else(|| anyhow!("Date out of range: {} {:+} days", day, offset.num_days()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 14).unwrap()
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key("2025-05-14"), "2025-05");
        assert_eq!(month_key("2025-05"), "2025-05");
        assert_eq!(month_key("5/1"), "5/1");
        assert_eq!(month_key(""), "");
        assert_eq!(month_key("2025년5월14일"), "2025년5월");
    }

    #[test]
    fn test_parse_day_keywords() {
        assert_eq!(parse_day("today", anchor()).unwrap(), anchor());
        assert_eq!(parse_day("yes", anchor()).unwrap(), NaiveDate::from_ymd_opt(2025, 5, 13).unwrap());
        assert_eq!(parse_day("tom", anchor()).unwrap(), NaiveDate::from_ymd_opt(2025, 5, 15).unwrap());
    }

    #[test]
    fn test_parse_day_relative() {
        assert_eq!(parse_day("-14d", anchor()).unwrap(), NaiveDate::from_ymd_opt(2025, 4, 30).unwrap());
        assert_eq!(parse_day("+1w", anchor()).unwrap(), NaiveDate::from_ymd_opt(2025, 5, 21).unwrap());
        assert!(parse_day("+1y", anchor()).is_err());
        assert!(parse_day("-d", anchor()).is_err());
        assert!(parse_day("-3일", anchor()).is_err());
    }

    #[test]
    fn test_parse_day_huge_offsets_are_errors() {
        assert!(parse_day("+999999999d", anchor()).is_err());
        assert!(parse_day("-999999999d", anchor()).is_err());
        assert!(parse_day("+9999999999999999d", anchor()).is_err());
        assert!(parse_day("+9999999999999999w", anchor()).is_err());
        assert!(parse_day("+99999999999999999999d", anchor()).is_err());
        assert!(parse_day("tom", NaiveDate::MAX).is_err());
        assert!(parse_selection("+999999999d", anchor()).is_err());
    }

    #[test]
    fn test_parse_selection() {
        assert_eq!(
            parse_selection("2025-05-01", anchor()).unwrap(),
            Selection::Day(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap())
        );
        assert_eq!(parse_selection("2025-04", anchor()).unwrap(), Selection::Month("2025-04".to_string()));
        assert_eq!(parse_selection("month", anchor()).unwrap(), Selection::Month("2025-05".to_string()));
        assert_eq!(parse_selection("lastmonth", anchor()).unwrap(), Selection::Month("2025-04".to_string()));
        assert!(parse_selection("2025-13", anchor()).is_err());
        assert!(parse_selection("May", anchor()).is_err());
    }

    #[test]
    fn test_shift_month() {
        assert_eq!(shift_month("2025-01", -1).unwrap(), "2024-12");
        assert_eq!(shift_month("2025-12", 1).unwrap(), "2026-01");
        assert_eq!(shift_month("2025-05", 0).unwrap(), "2025-05");
        assert!(shift_month("garbage", 1).is_err());
    }

    #[test]
    fn test_selection_month() {
        assert_eq!(Selection::Day(anchor()).month(), "2025-05");
    }
}
