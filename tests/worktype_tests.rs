mod common;
use common::TestEnv;
use cpunch::core::worktypes::{WorkTypeLogic, default_work_types, parse_rate};
use cpunch::errors::AppError;
use cpunch::models::work_type::WorkType;

#[test]
fn test_parse_rate() {
    assert_eq!(parse_rate("20").unwrap(), 20.0);
    assert_eq!(parse_rate(" 12.75\n").unwrap(), 12.75);
    assert_eq!(parse_rate("-8").unwrap(), -8.0);

    for bad in ["", "abc", "12,5", "NaN", "inf"] {
        assert!(
            matches!(parse_rate(bad), Err(AppError::InvalidRate(_))),
            "'{bad}' should be rejected"
        );
    }
}

#[test]
fn test_seed_defaults_only_when_file_missing() {
    let env = TestEnv::new();
    let storage = env.storage();

    assert!(WorkTypeLogic::seed_defaults(&storage).unwrap());
    assert_eq!(storage.work_types.load_all().unwrap(), default_work_types());

    storage.work_types.save_all(&[]).unwrap();
    assert!(!WorkTypeLogic::seed_defaults(&storage).unwrap());
    assert!(storage.work_types.load_all().unwrap().is_empty());
}

#[test]
fn test_defaults_include_negative_rate() {
    let gaming = default_work_types()
        .into_iter()
        .find(|wt| wt.name == "Gaming")
        .expect("Gaming is a default work type");
    assert_eq!(gaming.hourly_rate, -8.0);
}

#[test]
fn test_add_appends_and_trims_name() {
    let env = TestEnv::new();
    let storage = env.storage();
    storage
        .work_types
        .save_all(&[WorkType::new("A", 20.0)])
        .unwrap();

    let added = WorkTypeLogic::add(&storage, "  Tutoring ", 35.0).unwrap();

    assert_eq!(added, WorkType::new("Tutoring", 35.0));
    assert_eq!(
        WorkTypeLogic::list(&storage).unwrap(),
        vec![WorkType::new("A", 20.0), WorkType::new("Tutoring", 35.0)]
    );
}

#[test]
fn test_add_accepts_duplicate_names() {
    let env = TestEnv::new();
    let storage = env.storage();

    WorkTypeLogic::add(&storage, "A", 20.0).unwrap();
    WorkTypeLogic::add(&storage, "A", 25.0).unwrap();

    assert_eq!(WorkTypeLogic::list(&storage).unwrap().len(), 2);
}

#[test]
fn test_add_rejects_empty_name() {
    let env = TestEnv::new();
    let storage = env.storage();

    assert!(matches!(
        WorkTypeLogic::add(&storage, "   ", 10.0),
        Err(AppError::InvalidName)
    ));
    assert!(!storage.work_types.exists());
}
