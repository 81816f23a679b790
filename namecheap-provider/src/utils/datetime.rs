//! 日期时间解析工具
//!
//! Namecheap 返回的时间不带时区，时区由响应信封中的 `GMTTimeDifference`
//! 给出（形如 `+5`、`--5:00`、`+5:30`）。
//! - [`parse_gmt_offset`]: 偏移字符串 -> `FixedOffset`
//! - [`parse_date`]: `MM/DD/YYYY` 或 `M/D/YYYY h:mm:ss AM|PM` -> `DateTime<FixedOffset>`

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use crate::error::{NamecheapError, Result};

const OFFSET_FIELD: &str = "GMTTimeDifference";
const OFFSET_SHAPE: &str = "expected an optional sign, 1-2 digit hours and optional :MM";

const DATE_FORMAT: &str = "%m/%d/%Y";
const DATE_TIME_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// 解析 `GMTTimeDifference`
///
/// 前导符号可以有多个（provider 会返回 `--5:00`），只要出现 `-` 即为负偏移。
pub fn parse_gmt_offset(raw: &str) -> Result<FixedOffset> {
    let invalid = || NamecheapError::format(OFFSET_FIELD, raw, OFFSET_SHAPE);

    let trimmed = raw.trim();
    let digits = trimmed.trim_start_matches(['+', '-']);
    let negative = trimmed[..trimmed.len() - digits.len()].contains('-');

    let (hours, minutes) = match digits.split_once(':') {
        Some((h, m)) => (h, m),
        None => (digits, "00"),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hours.len())
        || minutes.len() != 2
        || !all_digits(hours)
        || !all_digits(minutes)
    {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| invalid())?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 {
        return Err(invalid());
    }

    let seconds = (hours * 60 + minutes) * 60;
    let seconds = if negative { -seconds } else { seconds };
    FixedOffset::east_opt(seconds).ok_or_else(invalid)
}

/// 按信封偏移解析日期；空字符串返回 `None`
pub fn parse_date(
    field: &str,
    raw: &str,
    offset: FixedOffset,
) -> Result<Option<DateTime<FixedOffset>>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let naive = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(|d| d.and_time(NaiveTime::MIN))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, DATE_TIME_FORMAT))
        .map_err(|e| NamecheapError::format(field, raw, e.to_string()))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(Some)
        .ok_or_else(|| NamecheapError::format(field, raw, "ambiguous local time"))
}

/// UTC，信封里没有 `GMTTimeDifference` 时使用
pub fn utc() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn hours(h: i32) -> FixedOffset {
        FixedOffset::east_opt(h * 3600).unwrap()
    }

    // ---- parse_gmt_offset ----

    #[test]
    fn offset_plus_hours() {
        assert_eq!(parse_gmt_offset("+5").unwrap(), hours(5));
    }

    #[test]
    fn offset_double_minus() {
        assert_eq!(parse_gmt_offset("--5:00").unwrap(), hours(-5));
    }

    #[test]
    fn offset_half_hour() {
        assert_eq!(
            parse_gmt_offset("+5:30").unwrap(),
            FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
        );
    }

    #[test]
    fn offset_two_digit_hours_and_no_sign() {
        assert_eq!(parse_gmt_offset("10").unwrap(), hours(10));
        assert_eq!(parse_gmt_offset("-12:00").unwrap(), hours(-12));
    }

    #[test]
    fn offset_rejects_other_shapes() {
        for raw in ["EST", "", "+", "+123", "+5:3", "+5:300", "+5:xx", "+5:75", "5h"] {
            let err = parse_gmt_offset(raw).unwrap_err();
            assert!(
                matches!(err, NamecheapError::Format { ref field, .. } if field == OFFSET_FIELD),
                "{raw:?} should be rejected, got {err:?}"
            );
        }
    }

    // ---- parse_date ----

    #[test]
    fn date_only() {
        let dt = parse_date("Created", "11/04/2014", hours(-5)).unwrap().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2014, 11, 4));
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.offset(), &hours(-5));
    }

    #[test]
    fn date_with_time() {
        let dt = parse_date("ExpiredDate", "4/30/2021 11:31:13 AM", hours(5))
            .unwrap()
            .unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2021, 4, 30));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (11, 31, 13));
        assert_eq!(dt.to_rfc3339(), "2021-04-30T11:31:13+05:00");
    }

    #[test]
    fn date_pm() {
        let dt = parse_date("x", "1/2/2020 3:04:05 PM", utc()).unwrap().unwrap();
        assert_eq!(dt.hour(), 15);
    }

    #[test]
    fn empty_date_is_none() {
        assert!(parse_date("Expires", "", utc()).unwrap().is_none());
    }

    #[test]
    fn malformed_date_is_format_error() {
        let err = parse_date("Expires", "2014-11-04", utc()).unwrap_err();
        assert!(matches!(err, NamecheapError::Format { ref field, ref value, .. }
            if field == "Expires" && value == "2014-11-04"));
    }
}
