//! Locale and work-week preferences consumed by the navigator.

use serde::{Deserialize, Serialize};

use crate::{FirstDayOfWeek, NavigatorError, WorkWeekMask};

/// Calendar preferences injected into a [`DateNavigator`](crate::DateNavigator).
///
/// Serialized as TOML:
///
/// ```toml
/// first_day_of_week = 7   # 1 = Monday .. 7 = Sunday
/// work_week = 0b0011111   # bit 0 = Monday .. bit 6 = Sunday
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub first_day_of_week: FirstDayOfWeek,
    pub work_week:         WorkWeekMask,
}

impl NavigatorConfig {
    pub const fn new(first_day_of_week: FirstDayOfWeek, work_week: WorkWeekMask) -> Self {
        Self {
            first_day_of_week,
            work_week,
        }
    }

    /// Parses preferences from TOML. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `NavigatorError::Config` on malformed TOML or out-of-range values.
    pub fn from_toml_str(s: &str) -> Result<Self, NavigatorError> {
        Ok(toml::from_str(s)?)
    }

    /// # Errors
    /// Returns `NavigatorError::Serialize` if TOML serialization fails.
    pub fn to_toml_string(&self) -> Result<String, NavigatorError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_default_config() {
        let config = NavigatorConfig::default();
        assert_eq!(config.first_day_of_week.weekday(), Weekday::Mon);
        assert_eq!(config.work_week.bits(), 0b001_1111);
    }

    #[test]
    fn test_from_toml_full() {
        let config = NavigatorConfig::from_toml_str(
            "first_day_of_week = 7\nwork_week = 0b0111110\n",
        )
        .unwrap();
        assert_eq!(config.first_day_of_week.weekday(), Weekday::Sun);
        assert!(config.work_week.contains(Weekday::Sat));
        assert!(!config.work_week.contains(Weekday::Mon));
    }

    #[test]
    fn test_from_toml_missing_keys_use_defaults() {
        let config = NavigatorConfig::from_toml_str("first_day_of_week = 6").unwrap();
        assert_eq!(config.first_day_of_week.get(), 6);
        assert_eq!(config.work_week, WorkWeekMask::default());

        let empty = NavigatorConfig::from_toml_str("").unwrap();
        assert_eq!(empty, NavigatorConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_out_of_range() {
        assert!(matches!(
            NavigatorConfig::from_toml_str("first_day_of_week = 8"),
            Err(NavigatorError::Config(_))
        ));
        assert!(matches!(
            NavigatorConfig::from_toml_str("work_week = 200"),
            Err(NavigatorError::Config(_))
        ));
        assert!(NavigatorConfig::from_toml_str("first_day_of_week = \"monday\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = NavigatorConfig::new(
            FirstDayOfWeek::new(7).unwrap(),
            WorkWeekMask::new(0b011_1110).unwrap(),
        );
        let text = config.to_toml_string().unwrap();
        assert_eq!(NavigatorConfig::from_toml_str(&text).unwrap(), config);
    }
}
