use std::fmt;
use std::iter;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use tracing::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::consts::{DAYS_PER_WEEK, MAX_SELECTABLE_DAYS, MONTHS_PER_YEAR, WORK_WEEK_DAYS};
use crate::selection::{DatesSelected, ObserverId, Observers, SelectionObserver};
use crate::types::{Month, day_number, days_in_month};
use crate::{FirstDayOfWeek, NavigatorConfig};

/// Owns the currently selected calendar dates and replaces them according
/// to navigation intents.
///
/// Every `select_*` call that changes the selection notifies all observers
/// exactly once, synchronously, with a snapshot of the new dates. Invalid
/// input is normalized rather than rejected: a missing date becomes today,
/// counts are clamped and an empty date list is ignored.
pub struct DateNavigator<C: Clock = SystemClock> {
    config:    NavigatorConfig,
    clock:     C,
    selected:  Vec<NaiveDate>,
    observers: Observers,
}

impl DateNavigator<SystemClock> {
    /// Creates a navigator reading today's date from the system clock.
    pub fn new(config: NavigatorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for DateNavigator<SystemClock> {
    fn default() -> Self {
        Self::new(NavigatorConfig::default())
    }
}

impl<C: Clock> DateNavigator<C> {
    /// Creates a navigator whose selection is seeded with `clock.today()`.
    /// No notification is sent for the initial selection.
    pub fn with_clock(config: NavigatorConfig, clock: C) -> Self {
        let today = clock.today();
        Self {
            config,
            clock,
            selected: vec![today],
            observers: Observers::default(),
        }
    }

    pub const fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Replaces the locale and work-week preferences. The selection is left
    /// untouched and nothing is emitted; the new values apply to the next
    /// navigation call.
    pub fn set_config(&mut self, config: NavigatorConfig) {
        self.config = config;
    }

    pub const fn clock(&self) -> &C {
        &self.clock
    }

    pub fn selected_dates(&self) -> &[NaiveDate] {
        &self.selected
    }

    pub fn dates_count(&self) -> usize {
        self.selected.len()
    }

    /// First date of the current selection.
    pub fn first_selected(&self) -> NaiveDate {
        // the selection is never empty
        self.selected
            .first()
            .copied()
            .unwrap_or_else(|| self.clock.today())
    }

    /// Registers an observer for selection changes.
    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: SelectionObserver + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Selects a single day. `None` stands for an invalid date and selects today.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        let date = date.unwrap_or_else(|| {
            debug!("an invalid date was passed to select_date, using today");
            self.clock.today()
        });
        self.selected = vec![date];
        self.emit(None);
    }

    /// Selects a single day from raw components; impossible dates select today.
    pub fn select_ymd(&mut self, year: i32, month: u32, day: u32) {
        self.select_date(NaiveDate::from_ymd_opt(year, month, day));
    }

    /// Selects exactly `dates`, in the given order. An empty list is ignored.
    ///
    /// The dates are neither sorted nor deduplicated, so the selection may
    /// be non-contiguous afterwards.
    pub fn select_date_list(&mut self, dates: Vec<NaiveDate>, preferred_month: Option<NaiveDate>) {
        if dates.is_empty() {
            debug!("ignoring empty date list");
            return;
        }
        self.selected = dates;
        self.emit(preferred_month);
    }

    /// Selects `count` days starting at the first selected date, with
    /// `count` clamped to `1..=MAX_SELECTABLE_DAYS`.
    pub fn select_dates(&mut self, count: usize) {
        let count = count.clamp(1, MAX_SELECTABLE_DAYS);
        self.select_dates_from(self.first_selected(), count, None);
    }

    /// Selects `count` contiguous days beginning at `start`.
    pub fn select_dates_from(
        &mut self,
        start: NaiveDate,
        count: usize,
        preferred_month: Option<NaiveDate>,
    ) {
        self.selected = consecutive_days(start).take(count.max(1)).collect();
        self.emit(preferred_month);
    }

    /// Selects the week containing `date` when `weekday` is the first day of
    /// the week and a full week is currently shown; otherwise selects as many
    /// days as are currently selected, starting at `date`.
    pub fn select_week_by_day(
        &mut self,
        weekday: Weekday,
        date: NaiveDate,
        preferred_month: Option<NaiveDate>,
    ) {
        let count = self.dates_count();
        let week_start = FirstDayOfWeek::from(weekday) == self.config.first_day_of_week;
        if week_start && count == DAYS_PER_WEEK {
            self.select_week_of(date, preferred_month);
        } else {
            self.select_dates_from(date, count, preferred_month);
        }
    }

    /// Selects the week containing the first selected date.
    pub fn select_week(&mut self) {
        self.select_week_of(self.first_selected(), None);
    }

    /// Selects the seven days of the week containing `date`.
    pub fn select_week_of(&mut self, date: NaiveDate, preferred_month: Option<NaiveDate>) {
        let start = self.week_start(date);
        self.select_dates_from(start, DAYS_PER_WEEK, preferred_month);
    }

    /// Selects the work days of the week containing the first selected date.
    pub fn select_work_week(&mut self) {
        self.select_work_week_of(self.first_selected());
    }

    /// Selects the days of the week containing `date` that are set in the
    /// work-week mask. A mask without any work day selects the full week.
    pub fn select_work_week_of(&mut self, date: NaiveDate) {
        let mask = self.config.work_week;
        let days: Vec<NaiveDate> = consecutive_days(self.week_start(date))
            .take(DAYS_PER_WEEK)
            .filter(|day| mask.contains(day.weekday()))
            .collect();

        if days.is_empty() {
            debug!(%mask, "work week mask has no work days, selecting the full week");
            self.select_week_of(date, None);
            return;
        }

        self.selected = days;
        self.emit(None);
    }

    /// Moves the selection to today, keeping its shape: a week stays a week,
    /// five days become the work week, any other size is kept as is.
    pub fn select_today(&mut self) {
        let today = self.clock.today();
        match self.dates_count() {
            DAYS_PER_WEEK => self.select_week_of(today, None),
            WORK_WEEK_DAYS => self.select_work_week_of(today),
            count => self.select_dates_from(today, count, None),
        }
    }

    /// Moves back one day when a single day is selected, one week otherwise.
    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    /// Moves forward one day when a single day is selected, one week otherwise.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    pub fn select_previous_week(&mut self) {
        self.shift_days(-week_days());
    }

    pub fn select_next_week(&mut self) {
        self.shift_days(week_days());
    }

    pub fn select_previous_year(&mut self) {
        self.shift_years(-1);
    }

    pub fn select_next_year(&mut self) {
        self.shift_years(1);
    }

    /// Moves the selection back one month.
    ///
    /// `current_month` is the month the view currently displays; the
    /// preferred-month hint is derived from it because the first selected
    /// date may belong to a neighbouring month of a six-week grid. The shifted
    /// date is kept inside `[lower_limit, upper_limit]` when those are given.
    pub fn select_previous_month(
        &mut self,
        current_month: Option<NaiveDate>,
        lower_limit: Option<NaiveDate>,
        upper_limit: Option<NaiveDate>,
    ) {
        self.shift_month(current_month, lower_limit, upper_limit, -1);
    }

    /// Moves the selection forward one month. See [`Self::select_previous_month`].
    pub fn select_next_month(
        &mut self,
        current_month: Option<NaiveDate>,
        lower_limit: Option<NaiveDate>,
        upper_limit: Option<NaiveDate>,
    ) {
        self.shift_month(current_month, lower_limit, upper_limit, 1);
    }

    /// Jumps to `month` of the selected year, keeping the selected day of
    /// month (clamped to the month's length) and aligning to the week grid.
    pub fn select_month(&mut self, month: Month) {
        let first = self.first_selected();
        let year = first.year();
        let day = first.day().min(u32::from(days_in_month(year, month)));
        let month_number = u32::from(month.get());

        let (Some(target), Some(requested_month)) = (
            NaiveDate::from_ymd_opt(year, month_number, day),
            NaiveDate::from_ymd_opt(year, month_number, 1),
        ) else {
            debug!(year, %month, "month is outside the supported date range");
            return;
        };

        let week_start = self.config.first_day_of_week.weekday();
        self.select_week_by_day(week_start, target, Some(requested_month));
    }

    /// Jumps to the same position in `year`.
    pub fn select_year(&mut self, year: i32) {
        let delta = year.saturating_sub(self.first_selected().year());
        self.shift_years(delta);
    }

    fn step(&mut self, direction: i64) {
        let count = self.dates_count();
        let offset = if count == 1 { direction } else { direction * week_days() };
        self.select_dates_from(add_days(self.first_selected(), offset), count, None);
    }

    fn shift_days(&mut self, days: i64) {
        let first = self.first_selected();
        self.select_week_by_day(first.weekday(), add_days(first, days), None);
    }

    fn shift_years(&mut self, years: i32) {
        let first = self.first_selected();
        let shifted = add_months(first, years.saturating_mul(MONTHS_PER_YEAR));
        self.select_week_by_day(first.weekday(), shifted, None);
    }

    fn shift_month(
        &mut self,
        current_month: Option<NaiveDate>,
        lower_limit: Option<NaiveDate>,
        upper_limit: Option<NaiveDate>,
        offset: i32,
    ) {
        let first = self.first_selected();
        let mut shifted = add_months(first, offset);
        let preferred_month = current_month.map_or(shifted, |month| add_months(month, offset));

        match (lower_limit, upper_limit) {
            (Some(lower), _) if shifted < lower => shifted = lower,
            // keep a whole display week before the upper limit
            (_, Some(upper)) if shifted > upper => shifted = add_days(upper, 1 - week_days()),
            _ => {}
        }

        self.select_week_by_day(first.weekday(), shifted, Some(preferred_month));
    }

    /// First day of the configured week containing `date`.
    fn week_start(&self, date: NaiveDate) -> NaiveDate {
        let first_day = self.config.first_day_of_week;
        let day_of_week = day_number(date.weekday());

        let mut offset = i64::from(first_day.get()) - i64::from(day_of_week);
        if !first_day.is_monday() && day_of_week < first_day.get() {
            offset -= week_days();
        }
        add_days(date, offset)
    }

    fn emit(&mut self, preferred_month: Option<NaiveDate>) {
        let event = DatesSelected {
            dates: self.selected.clone(),
            preferred_month,
        };
        trace!(
            first = %self.first_selected(),
            count = event.dates.len(),
            preferred_month = ?event.preferred_month,
            "dates selected"
        );
        self.observers.notify(&event);
    }
}

impl<C: Clock + fmt::Debug> fmt::Debug for DateNavigator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateNavigator")
            .field("config", &self.config)
            .field("clock", &self.clock)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

// --- date arithmetic, saturating at the representable range ---

const fn week_days() -> i64 {
    DAYS_PER_WEEK as i64
}

fn consecutive_days(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    iter::successors(Some(start), NaiveDate::succ_opt)
}

fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    } else {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    }
}

/// Shifts by whole months; the day is clamped to the target month's length.
fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let magnitude = Months::new(months.unsigned_abs());
    if months < 0 {
        date.checked_sub_months(magnitude).unwrap_or(NaiveDate::MIN)
    } else {
        date.checked_add_months(magnitude).unwrap_or(NaiveDate::MAX)
    }
}
