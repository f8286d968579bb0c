mod common;
use common::{TestEnv, at, closed, rates_ab, seed};
use cpunch::core::report::{ReportLogic, aggregate};
use cpunch::models::punch_record::PunchRecord;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_report_totals_per_work_type() {
    let records = vec![
        closed("A", at(8, 0), at(10, 0)),
        closed("A", at(11, 0), at(12, 0)),
        closed("B", at(13, 0), at(16, 0)),
    ];

    let rows = aggregate(&records, &rates_ab());

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].work_type_name, "A");
    assert!(approx(rows[0].total_hours, 3.0));
    assert!(approx(rows[0].total_amount, 60.0));
    assert_eq!(rows[1].work_type_name, "B");
    assert!(approx(rows[1].total_hours, 3.0));
    assert!(approx(rows[1].total_amount, 30.0));
}

#[test]
fn test_report_rows_follow_first_appearance() {
    let records = vec![
        closed("B", at(8, 0), at(9, 0)),
        closed("A", at(9, 0), at(10, 0)),
        closed("B", at(10, 0), at(11, 0)),
    ];

    let names: Vec<String> = aggregate(&records, &rates_ab())
        .into_iter()
        .map(|r| r.work_type_name)
        .collect();

    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_report_ignores_open_punches() {
    let records = vec![
        closed("A", at(8, 0), at(9, 0)),
        PunchRecord::open("B", at(10, 0)),
    ];

    let rows = aggregate(&records, &rates_ab());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].work_type_name, "A");
}

#[test]
fn test_report_missing_work_type_has_zero_amount() {
    let records = vec![closed("Gone", at(8, 0), at(10, 0))];

    let rows = aggregate(&records, &rates_ab());

    assert!(approx(rows[0].total_hours, 2.0));
    assert_eq!(rows[0].total_amount, 0.0);
}

#[test]
fn test_report_logic_totals_and_ongoing() {
    let env = TestEnv::new();
    let storage = env.storage();
    seed(
        &storage,
        &rates_ab(),
        &[
            closed("A", at(8, 0), at(10, 0)),
            closed("B", at(10, 0), at(11, 0)),
            PunchRecord::open("A", at(12, 0)),
        ],
    );

    let report = ReportLogic::build(&storage).unwrap().expect("report");

    assert!(approx(report.total_hours, 3.0));
    assert!(approx(report.total_amount, 50.0));
    assert_eq!(report.ongoing.as_deref(), Some("A"));
}

#[test]
fn test_report_logic_without_punches() {
    let env = TestEnv::new();
    let storage = env.storage();
    seed(&storage, &rates_ab(), &[]);

    assert!(ReportLogic::build(&storage).unwrap().is_none());
}
