/// Largest selection a month grid can show (6 rows of 7 days)
pub const MAX_SELECTABLE_DAYS: usize = 42;

/// Days in a full week
pub const DAYS_PER_WEEK: usize = 7;

/// Window size that marks "work week mode" for `select_today`
pub const WORK_WEEK_DAYS: usize = 5;

/// Day number for Monday (days are 1-indexed, Monday first)
pub const MONDAY: u8 = 1;
/// Day number for Sunday
pub const SUNDAY: u8 = 7;

/// Work days default to Monday through Friday (bits 0..=4)
pub const DEFAULT_WORK_WEEK_MASK: u8 = 0b001_1111;

/// Highest valid work-week mask (all seven days)
pub const MAX_WORK_WEEK_MASK: u8 = 0b111_1111;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Months in a year, used for year shifts
pub(crate) const MONTHS_PER_YEAR: i32 = 12;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
