#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use examplan::model::{CellRef, GradeSheet, InputModel, RawRecord};
use examplan::pool::DayEntry;

pub fn date(m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn cell(s: &str) -> CellRef {
    s.parse().unwrap()
}

/// Eleven calendar days from 2021-05-21 to 2021-06-04 holding thirteen slots,
/// up to four a day. Weekends are absent; 05-28 and 06-03 have no slot.
pub fn thirteen_slot_pool() -> Vec<DayEntry> {
    vec![
        DayEntry::new(
            date(5, 21),
            vec![time(9, 0), time(12, 30), time(15, 0), time(18, 30)],
        ),
        DayEntry::new(date(5, 24), vec![time(12, 30), time(18, 30)]),
        DayEntry::new(date(5, 25), vec![time(9, 0)]),
        DayEntry::new(date(5, 26), vec![time(9, 0)]),
        DayEntry::new(date(5, 27), vec![time(15, 0)]),
        DayEntry::new(date(5, 28), vec![]),
        DayEntry::new(date(5, 31), vec![time(18, 30)]),
        DayEntry::new(date(6, 1), vec![time(9, 0)]),
        DayEntry::new(date(6, 2), vec![time(12, 30)]),
        DayEntry::new(date(6, 3), vec![]),
        DayEntry::new(date(6, 4), vec![time(9, 0)]),
    ]
}

/// The eleven exams of the first four courses, no explicit constraints.
pub fn gii_records() -> Vec<RawRecord> {
    [
        ("Cálculo", 1, 1),
        ("Habilidades: Humanidades I", 1, 1),
        ("Programación", 1, 2),
        ("Álgebra Lineal", 2, 1),
        ("Estadística", 2, 1),
        ("Sistemas Digitales", 2, 1),
        ("Estructura de Computadores", 2, 2),
        ("Matemática Discreta", 2, 2),
        ("Sistemas Operativos", 3, 1),
        ("Redes de Ordenadores", 3, 2),
        ("Inteligencia Artificial", 4, 1),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (subject, course, semester))| {
        RawRecord::new(subject, course, semester, CellRef::new("A", i as u32 + 2).unwrap())
    })
    .collect()
}

pub fn sheet(name: &str, records: Vec<RawRecord>) -> GradeSheet {
    let mut sheet = GradeSheet::new(name);
    sheet.records = records;
    sheet
}

pub fn gii_model() -> InputModel {
    InputModel::new(thirteen_slot_pool(), vec![sheet("GII", gii_records())])
}
