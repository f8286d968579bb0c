use cpunch::cli::parser::normalize_args;
use std::ffi::OsString;

fn args(words: &[&str]) -> Vec<OsString> {
    words.iter().map(OsString::from).collect()
}

#[test]
fn test_normalize_lowercases_only_the_command_word() {
    assert_eq!(
        normalize_args(args(&["cpunch", "AddType", "--name", "Deep Work"])),
        args(&["cpunch", "addtype", "--name", "Deep Work"])
    );
}

#[test]
fn test_normalize_skips_data_dir_value() {
    assert_eq!(
        normalize_args(args(&["cpunch", "--data-dir", "/Tmp/Data", "REPORT"])),
        args(&["cpunch", "--data-dir", "/Tmp/Data", "report"])
    );
    assert_eq!(
        normalize_args(args(&["cpunch", "--data-dir=/Tmp/Data", "Stop"])),
        args(&["cpunch", "--data-dir=/Tmp/Data", "stop"])
    );
}

#[test]
fn test_normalize_without_command() {
    assert_eq!(normalize_args(args(&["cpunch"])), args(&["cpunch"]));
    assert_eq!(
        normalize_args(args(&["cpunch", "--version"])),
        args(&["cpunch", "--version"])
    );
}
