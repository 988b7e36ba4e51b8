use crate::pool::SlotIndex;
use chrono::{NaiveDate, NaiveTime};

/// Candidate values of one record after its unit constraints are applied.
///
/// # Invariants
///
/// - `dates` and `times` are sorted subsets of the pool's dates and times
/// - `slots` is sorted and holds exactly the pool slots whose date is in
///   `dates` and whose time is in `times`
/// - none of the three is empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDomain {
    pub(crate) dates: Vec<NaiveDate>,
    pub(crate) times: Vec<NaiveTime>,
    pub(crate) slots: Vec<SlotIndex>,
}

impl RecordDomain {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn slots(&self) -> &[SlotIndex] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn allows_date(&self, date: NaiveDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    pub fn allows_time(&self, time: NaiveTime) -> bool {
        self.times.binary_search(&time).is_ok()
    }

    pub fn contains(&self, slot: SlotIndex) -> bool {
        self.slots.binary_search(&slot).is_ok()
    }
}
