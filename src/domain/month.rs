//! Calendar month value type.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A calendar month, January through December.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// Error returned when a month index or name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthParseError {
    #[error("Month must be between 1 and 12, got {0}")]
    OutOfRange(u32),

    #[error("Unknown month: {0:?}")]
    UnknownName(String),
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Resolves a 1-based month index (`1` = January).
    ///
    /// # Errors
    ///
    /// Returns [`MonthParseError::OutOfRange`] unless `index` is in `1..=12`.
    pub fn from_number(index: u32) -> Result<Self, MonthParseError> {
        match index {
            1..=12 => Ok(Self::ALL[(index - 1) as usize]),
            other => Err(MonthParseError::OutOfRange(other)),
        }
    }

    /// Returns the 1-based month index.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Returns the full English month name.
    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    /// Accepts a month number (`"2"`), a full name (`"February"`) or a
    /// three-letter abbreviation (`"feb"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        if let Ok(index) = trimmed.parse::<u32>() {
            return Self::from_number(index);
        }

        let lower = trimmed.to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| {
                let name = m.name().to_ascii_lowercase();
                name == lower || (lower.len() == 3 && name.starts_with(&lower))
            })
            .ok_or_else(|| MonthParseError::UnknownName(trimmed.to_string()))
    }
}
