//! The solver's output: one slot per included record.

use crate::model::{CellLocation, Record, RecordId};
use crate::pool::Slot;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;


/// Why a record is part of the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    /// Matched the selection.
    Direct,
    /// Pulled in because an included record references it.
    Indirect,
}

/// Where and when one exam takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub record: RecordId,
    pub location: CellLocation,
    pub subject: String,
    pub course: u32,
    pub semester: u32,
    pub slot: Slot,
    pub origin: Origin,
}

impl Placement {
    pub(crate) fn new(record: &Record, slot: Slot, origin: Origin) -> Self {
        Self {
            record: record.id(),
            location: record.location().clone(),
            subject: record.subject().to_string(),
            course: record.course(),
            semester: record.semester(),
            slot,
            origin,
        }
    }

    pub fn grade(&self) -> &str {
        &self.location.sheet
    }

    pub fn date(&self) -> NaiveDate {
        self.slot.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.slot.time()
    }

    fn report_key(&self) -> (u32, u32, NaiveDate, NaiveTime, RecordId) {
        (self.course, self.semester, self.date(), self.time(), self.record)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:<12}] {} {} [{}.{}] {}",
            self.location.to_string(),
            self.date(),
            self.time().format("%H:%M"),
            self.course,
            self.semester,
            self.subject
        )
    }
}

/// A complete assignment: every included record mapped to exactly one slot.
///
/// Placements are kept sorted by [`RecordId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    placements: Vec<Placement>,
}

impl Assignment {
    pub(crate) fn new(mut placements: Vec<Placement>) -> Self {
        placements.sort_by_key(|p| p.record);
        Self { placements }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn get(&self, record: RecordId) -> Option<&Placement> {
        self.placements
            .binary_search_by_key(&record, |p| p.record)
            .ok()
            .map(|i| &self.placements[i])
    }

    pub fn slot_of(&self, record: RecordId) -> Option<&Slot> {
        self.get(record).map(|p| &p.slot)
    }

    /// Placement of the record declared at `location`, if it was scheduled.
    pub fn placement_at(&self, location: &CellLocation) -> Option<&Placement> {
        self.placements.iter().find(|p| &p.location == location)
    }

    /// Placement of the first scheduled record named `subject`.
    pub fn find_subject(&self, subject: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.subject == subject)
    }

    /// All placements in record id order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter()
    }

    pub fn direct(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements.iter().filter(|p| p.origin == Origin::Direct)
    }

    pub fn indirect(&self) -> impl Iterator<Item = &Placement> + '_ {
        self.placements
            .iter()
            .filter(|p| p.origin == Origin::Indirect)
    }

    /// Placements grouped by grade name, each group in record id order.
    pub fn by_grade(&self) -> BTreeMap<&str, Vec<&Placement>> {
        let mut groups: BTreeMap<&str, Vec<&Placement>> = BTreeMap::new();
        for p in &self.placements {
            groups.entry(p.grade()).or_default().push(p);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a Assignment {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

fn write_section<'a>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    placements: impl Iterator<Item = &'a Placement>,
) -> fmt::Result {
    let mut sorted: Vec<&Placement> = placements.collect();
    if sorted.is_empty() {
        return Ok(());
    }
    sorted.sort_by_key(|p| p.report_key());
    writeln!(f, "{title} ({}):", sorted.len())?;
    for p in sorted {
        writeln!(f, "  {p}")?;
    }
    Ok(())
}

impl fmt::Display for Assignment {
    /// Direct results first, then indirect ones, each sorted by course,
    /// semester, date and time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Direct results", self.direct())?;
        write_section(f, "Indirect results", self.indirect())
    }
}
