//! Slot model and availability tokens.
//!
//! A slot is one schedulable cell of the roster: a day, a shift period and
//! a store. Employees declare availability with tokens such as `"AM MON"`,
//! which this module parses into typed `(Weekday, ShiftPeriod)` pairs.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Half-day shift period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftPeriod {
    /// Morning shift.
    #[serde(rename = "AM")]
    Am,
    /// Afternoon/evening shift.
    #[serde(rename = "PM")]
    Pm,
}

impl ShiftPeriod {
    /// Both periods in roster order.
    pub const ALL: [ShiftPeriod; 2] = [ShiftPeriod::Am, ShiftPeriod::Pm];

    /// The label used in availability tokens and the rendered grid.
    pub fn label(self) -> &'static str {
        match self {
            ShiftPeriod::Am => "AM",
            ShiftPeriod::Pm => "PM",
        }
    }
}

impl fmt::Display for ShiftPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when an availability token or one of its parts is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised availability token '{0}'")]
pub struct ParseAvailabilityError(pub String);

impl FromStr for ShiftPeriod {
    type Err = ParseAvailabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Ok(ShiftPeriod::Am),
            "PM" => Ok(ShiftPeriod::Pm),
            _ => Err(ParseAvailabilityError(s.to_string())),
        }
    }
}

/// The seven days in roster order, Monday first.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Upper-case three-letter code for a day, as used in tokens and grid headers.
pub fn day_code(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

fn parse_day_code(code: &str) -> Option<Weekday> {
    WEEK.iter()
        .copied()
        .find(|day| day_code(*day).eq_ignore_ascii_case(code))
}

/// Parses an availability token of the form `"<PERIOD> <DAY>"`, e.g. `"PM TUE"`.
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use shift_roster::models::{ShiftPeriod, parse_availability_token};
///
/// assert_eq!(
///     parse_availability_token("PM TUE"),
///     Ok((Weekday::Tue, ShiftPeriod::Pm))
/// );
/// assert!(parse_availability_token("No hours selected").is_err());
/// ```
pub fn parse_availability_token(
    token: &str,
) -> Result<(Weekday, ShiftPeriod), ParseAvailabilityError> {
    let mut parts = token.split_whitespace();
    let (Some(period), Some(day), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseAvailabilityError(token.to_string()));
    };

    let shift = period
        .parse::<ShiftPeriod>()
        .map_err(|_| ParseAvailabilityError(token.to_string()))?;
    let day = parse_day_code(day).ok_or_else(|| ParseAvailabilityError(token.to_string()))?;

    Ok((day, shift))
}

/// Formats a `(day, shift)` pair as an availability token.
pub fn availability_token(day: Weekday, shift: ShiftPeriod) -> String {
    format!("{} {}", shift.label(), day_code(day))
}

/// One schedulable cell: a (day, shift period, store) triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day of the week.
    pub day: Weekday,
    /// Shift period within the day.
    pub shift: ShiftPeriod,
    /// Store name.
    pub store: String,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: Weekday, shift: ShiftPeriod, store: impl Into<String>) -> Self {
        Self {
            day,
            shift,
            store: store.into(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} @ {}", day_code(self.day), self.shift, self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_token_of_the_week() {
        for day in WEEK {
            for shift in ShiftPeriod::ALL {
                let token = availability_token(day, shift);
                assert_eq!(parse_availability_token(&token), Ok((day, shift)));
            }
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_availability_token("am sat"),
            Ok((Weekday::Sat, ShiftPeriod::Am))
        );
    }

    #[test]
    fn test_parse_tolerates_extra_whitespace() {
        assert_eq!(
            parse_availability_token("  PM   SUN "),
            Ok((Weekday::Sun, ShiftPeriod::Pm))
        );
    }

    #[test]
    fn test_parse_rejects_placeholder_and_garbage() {
        assert!(parse_availability_token("No hours selected").is_err());
        assert!(parse_availability_token("").is_err());
        assert!(parse_availability_token("AM").is_err());
        assert!(parse_availability_token("NOON MON").is_err());
        assert!(parse_availability_token("AM MONDAY").is_err());
    }

    #[test]
    fn test_shift_period_serialization() {
        assert_eq!(serde_json::to_string(&ShiftPeriod::Am).unwrap(), "\"AM\"");
        assert_eq!(serde_json::to_string(&ShiftPeriod::Pm).unwrap(), "\"PM\"");
        let parsed: ShiftPeriod = serde_json::from_str("\"PM\"").unwrap();
        assert_eq!(parsed, ShiftPeriod::Pm);
    }

    #[test]
    fn test_slot_display() {
        let slot = Slot::new(Weekday::Wed, ShiftPeriod::Pm, "Downtown");
        assert_eq!(slot.to_string(), "WED PM @ Downtown");
    }
}
