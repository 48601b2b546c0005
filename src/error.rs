use crate::consts::{MAX_MONTH, MAX_WORK_WEEK_MASK, SUNDAY};

/// Errors raised while building navigator value types or loading preferences.
///
/// Navigation itself never fails: bad input to a `select_*` call is
/// normalized instead.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// First day of week outside `1..=7`.
    #[error("Invalid first day of week: {0} (must be 1-{max})", max = SUNDAY)]
    InvalidFirstDayOfWeek(u8),

    /// Work-week mask with bits above the seventh set.
    #[error("Invalid work week mask: {0:#b} (must be at most {max:#b})", max = MAX_WORK_WEEK_MASK)]
    InvalidWorkWeekMask(u8),

    /// Preferences could not be parsed.
    #[error("Invalid navigator config: {0}")]
    Config(#[from] toml::de::Error),

    /// Preferences could not be written.
    #[error("Cannot serialize navigator config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
