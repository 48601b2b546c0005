use crate::NavigatorError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DEFAULT_WORK_WEEK_MASK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_WORK_WEEK_MASK, MONDAY, SUNDAY,
};
use crate::prelude::*;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `NavigatorError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, NavigatorError> {
        let non_zero = NonZeroU8::new(value).ok_or(NavigatorError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(NavigatorError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = NavigatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The weekday a locale starts its weeks on, numbered `1..=7` with 1 = Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FirstDayOfWeek(NonZeroU8);

impl FirstDayOfWeek {
    /// Weeks starting on Monday (ISO 8601)
    pub const MONDAY: Self = Self(NonZeroU8::MIN);

    /// Creates a new first day of week from its day number.
    ///
    /// # Errors
    /// Returns `NavigatorError::InvalidFirstDayOfWeek` if the value is 0 or > 7.
    pub fn new(value: u8) -> Result<Self, NavigatorError> {
        let non_zero =
            NonZeroU8::new(value).ok_or(NavigatorError::InvalidFirstDayOfWeek(value))?;
        if value > SUNDAY {
            return Err(NavigatorError::InvalidFirstDayOfWeek(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day number, 1 = Monday through 7 = Sunday
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    pub const fn is_monday(self) -> bool {
        self.get() == MONDAY
    }

    pub const fn weekday(self) -> Weekday {
        weekday_from_number(self.get())
    }
}

impl Default for FirstDayOfWeek {
    fn default() -> Self {
        Self::MONDAY
    }
}

impl From<Weekday> for FirstDayOfWeek {
    fn from(weekday: Weekday) -> Self {
        let number = day_number(weekday);
        // day_number is always in 1..=7
        Self(NonZeroU8::new(number).unwrap_or(NonZeroU8::MIN))
    }
}

impl TryFrom<u8> for FirstDayOfWeek {
    type Error = NavigatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FirstDayOfWeek> for u8 {
    fn from(day: FirstDayOfWeek) -> Self {
        day.0.get()
    }
}

impl fmt::Display for FirstDayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weekday())
    }
}

/// Seven-bit set of work days: bit `i` is set when weekday `i`
/// (0 = Monday .. 6 = Sunday) is a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{:07b}", "_0")]
#[serde(try_from = "u8", into = "u8")]
pub struct WorkWeekMask(u8);

impl WorkWeekMask {
    /// Every day is a work day
    pub const ALL: Self = Self(MAX_WORK_WEEK_MASK);

    /// No work days at all
    pub const NONE: Self = Self(0);

    /// Creates a mask, rejecting bits above the seventh.
    ///
    /// # Errors
    /// Returns `NavigatorError::InvalidWorkWeekMask` if the value is > 0b111_1111.
    pub fn new(bits: u8) -> Result<Self, NavigatorError> {
        if bits > MAX_WORK_WEEK_MASK {
            return Err(NavigatorError::InvalidWorkWeekMask(bits));
        }
        Ok(Self(bits))
    }

    /// Builds a mask from a list of work days, as a preferences page with
    /// one checkbox per weekday would.
    pub fn from_weekdays<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        Self(days.into_iter().fold(0, |mask, day| mask | bit(day)))
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Number of work days in the mask
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Work days in Monday-first order
    pub fn work_days(self) -> impl Iterator<Item = Weekday> {
        (MONDAY..=SUNDAY)
            .map(weekday_from_number)
            .filter(move |day| self.contains(*day))
    }
}

impl Default for WorkWeekMask {
    fn default() -> Self {
        Self(DEFAULT_WORK_WEEK_MASK)
    }
}

impl TryFrom<u8> for WorkWeekMask {
    type Error = NavigatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WorkWeekMask> for u8 {
    fn from(mask: WorkWeekMask) -> Self {
        mask.0
    }
}

// Helper functions

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_monday()
}

/// Day number of a weekday, 1 = Monday through 7 = Sunday
#[inline]
pub fn day_number(day: Weekday) -> u8 {
    // number_from_monday is always in 1..=7
    u8::try_from(day.number_from_monday()).unwrap_or(MONDAY)
}

const fn weekday_from_number(number: u8) -> Weekday {
    match number {
        2 => Weekday::Tue,
        3 => Weekday::Wed,
        4 => Weekday::Thu,
        5 => Weekday::Fri,
        6 => Weekday::Sat,
        7 => Weekday::Sun,
        _ => Weekday::Mon,
    }
}

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    let month = month.get();
    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(NavigatorError::InvalidMonth(0))));
        assert!(matches!(
            Month::new(13),
            Err(NavigatorError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_month_serde() {
        let month = Month::new(8).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(month, parsed);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_first_day_of_week_range() {
        for d in 1..=7 {
            assert!(FirstDayOfWeek::new(d).is_ok(), "Day {d} should be valid");
        }
        assert!(matches!(
            FirstDayOfWeek::new(0),
            Err(NavigatorError::InvalidFirstDayOfWeek(0))
        ));
        assert!(matches!(
            FirstDayOfWeek::new(8),
            Err(NavigatorError::InvalidFirstDayOfWeek(8))
        ));
    }

    #[test]
    fn test_first_day_of_week_weekday_conversion() {
        assert_eq!(FirstDayOfWeek::default().weekday(), Weekday::Mon);
        assert!(FirstDayOfWeek::default().is_monday());

        let sunday = FirstDayOfWeek::new(7).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sun);
        assert_eq!(FirstDayOfWeek::from(Weekday::Sun), sunday);
        assert_eq!(FirstDayOfWeek::from(Weekday::Sat).get(), 6);
        assert_eq!(sunday.to_string(), "Sun");
    }

    #[test]
    fn test_work_week_mask_default_is_monday_to_friday() {
        let mask = WorkWeekMask::default();
        assert_eq!(mask.bits(), 0b001_1111);
        assert_eq!(mask.len(), 5);
        assert!(mask.contains(Weekday::Mon));
        assert!(mask.contains(Weekday::Fri));
        assert!(!mask.contains(Weekday::Sat));
        assert!(!mask.contains(Weekday::Sun));
        assert_eq!(mask.to_string(), "0011111");
    }

    #[test]
    fn test_work_week_mask_rejects_eighth_bit() {
        assert!(WorkWeekMask::new(0b111_1111).is_ok());
        assert!(matches!(
            WorkWeekMask::new(0b1000_0000),
            Err(NavigatorError::InvalidWorkWeekMask(0b1000_0000))
        ));
    }

    #[test]
    fn test_work_week_mask_from_weekdays() {
        let mask = WorkWeekMask::from_weekdays([Weekday::Sun, Weekday::Tue, Weekday::Thu]);
        assert_eq!(mask.bits(), 0b100_1010);
        assert_eq!(
            mask.work_days().collect::<Vec<_>>(),
            vec![Weekday::Tue, Weekday::Thu, Weekday::Sun]
        );
        assert!(WorkWeekMask::from_weekdays([]).is_empty());
        assert_eq!(*WorkWeekMask::ALL, 0b111_1111);
    }

    #[test]
    fn test_work_week_mask_serde() {
        let mask = WorkWeekMask::new(0b110_0000).unwrap();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "96");
        assert_eq!(serde_json::from_str::<WorkWeekMask>(&json).unwrap(), mask);
        assert!(serde_json::from_str::<WorkWeekMask>("128").is_err());
    }

    #[test]
    fn test_is_leap_year_cases() {
        for (year, expected) in [
            (2020, true),
            (2024, true),
            (2023, false),
            (1900, false),
            (2100, false),
            (2000, true),
            (2400, true),
        ] {
            assert_eq!(is_leap_year(year), expected, "Year {year}");
        }
    }

    #[test]
    fn test_days_in_month() {
        let month = |m| Month::new(m).unwrap();
        assert_eq!(days_in_month(2024, month(1)), 31);
        assert_eq!(days_in_month(2024, month(4)), 30);
        assert_eq!(days_in_month(2023, month(2)), 28);
        assert_eq!(days_in_month(2024, month(2)), 29);
        assert_eq!(days_in_month(1900, month(2)), 28);
        assert_eq!(days_in_month(2000, month(2)), 29);
    }
}
