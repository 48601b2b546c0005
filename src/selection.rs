use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// Snapshot published after every change of the selected dates.
///
/// Views are expected to re-render entirely from it; no diff against the
/// previous selection is provided.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatesSelected {
    /// Selected dates in selection order
    pub dates:           Vec<NaiveDate>,
    /// Month a grid view should anchor on when the dates span two months
    pub preferred_month: Option<NaiveDate>,
}

impl DatesSelected {
    /// True when the dates do not all fall in one calendar month.
    pub fn spans_months(&self) -> bool {
        let mut months = self.dates.iter().map(|d| (d.year(), d.month()));
        months
            .next()
            .is_some_and(|first| months.any(|month| month != first))
    }

    /// True when each date is the day after the previous one.
    pub fn is_contiguous(&self) -> bool {
        self.dates
            .windows(2)
            .all(|pair| pair[0].succ_opt() == Some(pair[1]))
    }
}

/// Receives every [`DatesSelected`] notification, synchronously.
pub trait SelectionObserver {
    fn dates_selected(&mut self, event: &DatesSelected);
}

impl<F> SelectionObserver for F
where
    F: FnMut(&DatesSelected),
{
    fn dates_selected(&mut self, event: &DatesSelected) {
        self(event);
    }
}

/// Handle returned when registering an observer, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "observer#{}", "_0")]
pub struct ObserverId(u64);

/// Registered observers, notified in registration order.
#[derive(Default)]
pub(crate) struct Observers {
    next_id: u64,
    entries: Vec<(ObserverId, Box<dyn SelectionObserver>)>,
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Box<dyn SelectionObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn notify(&mut self, event: &DatesSelected) {
        for (_, observer) in &mut self.entries {
            observer.dates_selected(event);
        }
    }
}
