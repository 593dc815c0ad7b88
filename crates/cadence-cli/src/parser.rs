use anyhow::{anyhow, Result};
use cadence_core::dates;
use chrono::NaiveDate;

/// Strict `YYYY-MM-DD` parsing for CLI arguments. The lenient fallback in the
/// core is for data already in the store; user input gets rejected outright.
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate> {
    dates::try_parse_date(date_str)
        .ok_or_else(|| anyhow!("Invalid date '{}': expected YYYY-MM-DD", date_str))
}

/// Parses a comma-separated weekday list ("mon,wed" or "1,3") into indices,
/// 0=Sunday..6=Saturday.
pub fn parse_week_days(input: &str) -> Result<Vec<u8>> {
    let mut days = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let day = match part.to_lowercase().as_str() {
            "sun" | "sunday" | "0" => 0,
            "mon" | "monday" | "1" => 1,
            "tue" | "tuesday" | "2" => 2,
            "wed" | "wednesday" | "3" => 3,
            "thu" | "thursday" | "4" => 4,
            "fri" | "friday" | "5" => 5,
            "sat" | "saturday" | "6" => 6,
            other => return Err(anyhow!("Invalid weekday '{}'", other)),
        };
        if !days.contains(&day) {
            days.push(day);
        }
    }
    if days.is_empty() {
        return Err(anyhow!("Expected at least one weekday (e.g. 'mon,wed')"));
    }
    Ok(days)
}

/// Parses 'HH:MM' (24-hour) into minutes since midnight.
pub fn parse_time_of_day(input: &str) -> Result<u32> {
    let (hours, minutes) = input
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid time '{}': expected HH:MM", input))?;
    let hours: u32 = hours
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid hour in '{}'", input))?;
    let minutes: u32 = minutes
        .trim()
        .parse()
        .map_err(|_| anyhow!("Invalid minute in '{}'", input))?;
    if hours > 23 || minutes > 59 {
        return Err(anyhow!("Time '{}' out of range", input));
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes-since-midnight back to 'HH:MM'.
pub fn format_time_of_day(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_lists_accept_names_and_indices() {
        assert_eq!(parse_week_days("mon,wed").unwrap(), vec![1, 3]);
        assert_eq!(parse_week_days("0, 6").unwrap(), vec![0, 6]);
        assert_eq!(parse_week_days("fri,FRI,friday").unwrap(), vec![5]);
        assert!(parse_week_days("someday").is_err());
        assert!(parse_week_days("").is_err());
    }

    #[test]
    fn times_round_trip() {
        assert_eq!(parse_time_of_day("9:00").unwrap(), 540);
        assert_eq!(parse_time_of_day("14:30").unwrap(), 870);
        assert_eq!(format_time_of_day(870), "14:30");
        assert!(parse_time_of_day("24:00").is_err());
        assert!(parse_time_of_day("9").is_err());
    }
}
