use cpunch::utils::table::{Column, Table};
use cpunch::utils::{format_amount, format_hours, format_rate};

#[test]
fn test_amount_and_hours_formatting() {
    assert_eq!(format_hours(3.0), "3.00");
    assert_eq!(format_hours(1.0 / 3.0), "0.33");
    assert_eq!(format_amount("$", 60.0), "$60.00");
    assert_eq!(format_amount("$", -16.0), "-$16.00");
    assert_eq!(format_amount("€", -0.001), "€0.00");
    assert_eq!(format_rate("$", 20.0), "$20/h");
    assert_eq!(format_rate("$", -8.0), "$-8/h");
}

#[test]
fn test_table_aligns_by_display_width() {
    let mut table = Table::new(vec![Column::left("Work type"), Column::right("Hours")]);
    table.add_row(vec!["Café".to_string(), "3.00".to_string()]);
    table.add_row(vec!["Family Biz".to_string(), "12.50".to_string()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines[0], "Work type   Hours");
    assert_eq!(lines[1], "----------  -----");
    assert_eq!(lines[2], "Café         3.00");
    assert_eq!(lines[3], "Family Biz  12.50");
}
