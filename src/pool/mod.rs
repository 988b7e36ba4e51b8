//! Timeslot pool: the ordered universe of (date, time) pairs exams can take.
//!
//! The pool is built once per run from the day entries of the input model and
//! never mutated afterwards. Slot indices are ranks by (date, time), so
//! ascending index is chronological order.

mod slot;

pub use slot::{Slot, SlotIndex};

use crate::error::SchedulingError;
use crate::units::{elapsed_hours, Hours};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of the timeslot sheet: a date and the times available on it.
///
/// A date may carry no times at all; it then contributes no slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub times: Vec<NaiveTime>,
}

impl DayEntry {
    pub fn new(date: NaiveDate, times: Vec<NaiveTime>) -> Self {
        Self { date, times }
    }
}

/// Ordered, immutable set of slots.
///
/// # Invariants
///
/// - non-empty
/// - `slots[i].index == SlotIndex(i)` and slots are strictly increasing by
///   (date, time); duplicate pairs in the input collapse into one slot
/// - `dates` and `times` are the sorted distinct date and time components
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    slots: Vec<Slot>,
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
}

impl Pool {
    /// Builds the pool from day entries given in any order.
    ///
    /// # Errors
    ///
    /// Returns `PoolEmpty` if the entries yield no slot.
    pub fn new(entries: &[DayEntry]) -> Result<Self, SchedulingError> {
        let mut pairs: Vec<(NaiveDate, NaiveTime)> = entries
            .iter()
            .flat_map(|e| e.times.iter().map(move |&t| (e.date, t)))
            .collect();
        pairs.sort_unstable();
        pairs.dedup();

        if pairs.is_empty() {
            return Err(SchedulingError::PoolEmpty);
        }

        let slots: Vec<Slot> = pairs
            .iter()
            .enumerate()
            .map(|(i, &(date, time))| Slot {
                index: SlotIndex(i),
                date,
                time,
            })
            .collect();

        let mut dates: Vec<NaiveDate> = slots.iter().map(|s| s.date).collect();
        dates.dedup();
        let mut times: Vec<NaiveTime> = slots.iter().map(|s| s.time).collect();
        times.sort_unstable();
        times.dedup();

        debug!(
            slots = slots.len(),
            dates = dates.len(),
            times = times.len(),
            "timeslot pool built"
        );

        Ok(Self {
            slots,
            dates,
            times,
        })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn get(&self, index: SlotIndex) -> Option<&Slot> {
        self.slots.get(index.0)
    }

    /// Distinct dates that carry at least one slot, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Distinct times of day used by any slot, ascending.
    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    /// Slots on `date`, in time order.
    pub fn slots_on(&self, date: NaiveDate) -> &[Slot] {
        let start = self.slots.partition_point(|s| s.date < date);
        let end = self.slots.partition_point(|s| s.date <= date);
        &self.slots[start..end]
    }

    /// Slots at time-of-day `time`, in date order.
    pub fn slots_at(&self, time: NaiveTime) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().filter(move |s| s.time == time)
    }

    /// Index of the slot at exactly (`date`, `time`), if the pool has one.
    pub fn find(&self, date: NaiveDate, time: NaiveTime) -> Option<SlotIndex> {
        self.slots
            .binary_search_by(|s| (s.date, s.time).cmp(&(date, time)))
            .ok()
            .map(SlotIndex)
    }

    /// Calendar distance between two slots, in hours.
    ///
    /// # Panics
    ///
    /// Panics if either index does not belong to this pool.
    pub fn elapsed_hours(&self, a: SlotIndex, b: SlotIndex) -> Hours {
        elapsed_hours(self.slots[a.0].datetime(), self.slots[b.0].datetime())
    }
}
