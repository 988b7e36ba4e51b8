//! End-to-end scheduling scenarios.

mod common;

use common::*;
use examplan::model::{InputModel, Selection};
use examplan::pool::DayEntry;
use examplan::units::{at_least, elapsed_hours, hours};
use examplan::{schedule, schedule_with_config, Assignment, EngineConfig, SchedulingError};

fn assert_spacing(assignment: &Assignment, min_hours: u32) {
    let placements: Vec<_> = assignment.iter().collect();
    for (i, a) in placements.iter().enumerate() {
        for b in &placements[i + 1..] {
            if a.grade() == b.grade() && a.course == b.course {
                let gap = elapsed_hours(a.slot.datetime(), b.slot.datetime());
                assert!(
                    at_least(gap, hours(min_hours)),
                    "{} and {} are only {}h apart",
                    a.subject,
                    b.subject,
                    gap.value()
                );
            }
        }
    }
}

#[test]
fn thirteen_slot_pool_places_every_exam() {
    let assignment = schedule(&gii_model(), &Selection::all(), false).unwrap();
    assert_eq!(assignment.len(), 11);
    assert_eq!(assignment.indirect().count(), 0);

    let humanidades = assignment.find_subject("Habilidades: Humanidades I").unwrap();
    assert_eq!((humanidades.date(), humanidades.time()), (date(5, 24), time(12, 30)));

    let discreta = assignment.find_subject("Matemática Discreta").unwrap();
    assert_eq!((discreta.date(), discreta.time()), (date(5, 31), time(18, 30)));

    assert_spacing(&assignment, 24);
}

#[test]
fn thirteen_slot_pool_full_timetable() {
    let assignment = schedule(&gii_model(), &Selection::all(), false).unwrap();
    let expected = [
        ("Cálculo", date(5, 21), time(9, 0)),
        ("Programación", date(5, 26), time(9, 0)),
        ("Álgebra Lineal", date(5, 21), time(9, 0)),
        ("Estadística", date(5, 24), time(12, 30)),
        ("Sistemas Digitales", date(5, 26), time(9, 0)),
        ("Estructura de Computadores", date(5, 27), time(15, 0)),
        ("Sistemas Operativos", date(5, 21), time(9, 0)),
        ("Redes de Ordenadores", date(5, 24), time(12, 30)),
        ("Inteligencia Artificial", date(5, 21), time(9, 0)),
    ];
    for (subject, d, t) in expected {
        let p = assignment.find_subject(subject).unwrap();
        assert_eq!((p.date(), p.time()), (d, t), "{subject}");
    }
}

#[test]
fn setup_override_pushes_the_whole_course_back() {
    let mut model = gii_model();
    model.grades[0].records[0].setup_hours = Some(72);

    let assignment = schedule(&model, &Selection::all().course(1), false).unwrap();
    let calculo = assignment.find_subject("Cálculo").unwrap();
    assert_eq!((calculo.date(), calculo.time()), (date(5, 21), time(9, 0)));

    for p in assignment.iter().filter(|p| p.subject != "Cálculo") {
        let gap = elapsed_hours(calculo.slot.datetime(), p.slot.datetime());
        assert!(at_least(gap, hours(72)), "{} only {}h after", p.subject, gap.value());
    }
    let humanidades = assignment.find_subject("Habilidades: Humanidades I").unwrap();
    assert_eq!((humanidades.date(), humanidades.time()), (date(5, 24), time(12, 30)));
    assert_spacing(&assignment, 24);
}

#[test]
fn fewer_slots_than_same_course_exams_is_unsatisfiable() {
    let model = InputModel::new(
        vec![
            DayEntry::new(date(5, 21), vec![time(9, 0)]),
            DayEntry::new(date(5, 24), vec![time(12, 30)]),
        ],
        vec![sheet("GII", gii_records())],
    );
    let err = schedule(&model, &Selection::all().course(1), false).unwrap_err();
    assert!(matches!(err, SchedulingError::Unsatisfiable { .. }), "{err}");
}

#[test]
fn node_budget_from_config() {
    let model = InputModel::new(
        vec![
            DayEntry::new(date(5, 21), vec![time(9, 0)]),
            DayEntry::new(date(5, 24), vec![time(12, 30)]),
        ],
        vec![sheet("GII", gii_records())],
    );
    let config = EngineConfig::from_toml_str("node_limit = 2").unwrap();
    let err = schedule_with_config(&model, &Selection::all().course(1), false, &config).unwrap_err();
    assert_eq!(err, SchedulingError::BudgetExhausted { limit: 2 });
}

#[test]
fn default_setup_comes_from_config() {
    // Forty-eight hours between exams of one course leaves 05-24 18:30 too close
    // to 05-24 12:30, so the third exam moves on.
    let config = EngineConfig::new().with_default_setup_hours(48);
    let assignment =
        schedule_with_config(&gii_model(), &Selection::all().course(1), false, &config).unwrap();
    assert_spacing(&assignment, 48);
    let humanidades = assignment.find_subject("Habilidades: Humanidades I").unwrap();
    assert_eq!(humanidades.date(), date(5, 24));
}

#[test]
fn empty_pool_is_fatal() {
    let model = InputModel::new(Vec::new(), vec![sheet("GII", gii_records())]);
    assert_eq!(
        schedule(&model, &Selection::all(), false).unwrap_err(),
        SchedulingError::PoolEmpty
    );
}

#[test]
fn unit_constraints_steer_the_timetable() {
    let mut model = gii_model();
    model.grades[0].records[0] = model.grades[0].records[0]
        .clone()
        .with_date(">= 2021-06-01")
        .with_time("< 12:00");
    let assignment = schedule(&model, &Selection::all().course(1), false).unwrap();
    let calculo = assignment.find_subject("Cálculo").unwrap();
    assert!(calculo.date() >= date(6, 1));
    assert!(calculo.time() < time(12, 0));
    assert_spacing(&assignment, 24);
}

#[test]
fn impossible_unit_constraint_reports_the_record() {
    let mut model = gii_model();
    model.grades[0].records[2].date = "= 2021-05-28".to_string();
    let err = schedule(&model, &Selection::all(), false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Empty domain for $GII.A4 'Programación': no feasible date"
    );
}

#[test]
fn syntax_errors_point_at_the_cell() {
    let mut model = gii_model();
    model.grades[0].records[1].time = "12:30, at noon".to_string();
    let err = schedule(&model, &Selection::all(), false).unwrap_err();
    match err {
        SchedulingError::Parse { location, term, .. } => {
            assert_eq!(location.to_string(), "$GII.A3");
            assert_eq!(term, "at noon");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn json_model_round_trip() {
    let json = r#"{
        "pool": [
            { "date": "2021-05-21", "times": ["09:00:00", "15:00:00"] },
            { "date": "2021-05-24", "times": ["09:00:00"] }
        ],
        "grades": [{
            "name": "GII",
            "records": [
                { "subject": "Cálculo", "course": 1, "semester": 1, "cell": "A2" },
                { "subject": "Física", "course": 1, "semester": 1, "cell": "A3",
                  "time": "= A2" }
            ]
        }]
    }"#;
    let model: InputModel = serde_json::from_str(json).unwrap();
    let assignment = schedule(&model, &Selection::all(), false).unwrap();

    let fisica = assignment.find_subject("Física").unwrap();
    assert_eq!((fisica.date(), fisica.time()), (date(5, 24), time(9, 0)));

    let out = serde_json::to_value(&assignment).unwrap();
    assert_eq!(out["placements"][1]["slot"]["date"], "2021-05-24");
    assert_eq!(out["placements"][1]["origin"], "direct");
}
