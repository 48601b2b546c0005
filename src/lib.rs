//! Calendar date-selection engine.
//!
//! A [`DateNavigator`] owns the set of dates a calendar view shows and turns
//! navigation intents (a day, a week, the work week, a month, a year, or a
//! step forward or back) into a new selection, honouring the configured
//! first day of week and work-week mask. Observers are told about every
//! change synchronously.
//!
//! ```
//! use chrono::NaiveDate;
//! use date_navigator::{DateNavigator, DatesSelected, FixedClock, NavigatorConfig};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let mut nav = DateNavigator::with_clock(NavigatorConfig::default(), FixedClock(today));
//! nav.subscribe(|event: &DatesSelected| println!("{} days selected", event.dates.len()));
//!
//! nav.select_week();
//! assert_eq!(nav.first_selected(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//! assert_eq!(nav.dates_count(), 7);
//! ```

mod clock;
mod config;
mod consts;
mod error;
mod navigator;
mod prelude;
mod selection;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::NavigatorConfig;
pub use consts::*;
pub use error::NavigatorError;
pub use navigator::DateNavigator;
pub use selection::{DatesSelected, ObserverId, SelectionObserver};
pub use types::{FirstDayOfWeek, Month, WorkWeekMask, day_number, days_in_month, is_leap_year};
